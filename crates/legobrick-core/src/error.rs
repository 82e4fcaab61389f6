//! Error types for LegoBrick

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrickError {
    #[error("missing ':' between color and dimensions in {0:?}")]
    MissingColorSeparator(String),

    #[error("missing 'x' between length and width in {0:?}")]
    MissingDimensionSeparator(String),

    #[error("invalid {axis} {value:?}: {reason}")]
    InvalidDimension {
        axis: &'static str,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, BrickError>;

impl BrickError {
    pub fn invalid_dimension(
        axis: &'static str,
        value: impl Into<String>,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::InvalidDimension {
            axis,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}
