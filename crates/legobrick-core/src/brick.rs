//! The brick value: a color, two dimensions, and the derived stud count.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{BrickError, Result};

/// A rectangular brick.
///
/// Dimensions are stored verbatim with no validation: zero and negative
/// values are accepted. `studs` is derived once in [`Brick::new`]; the fields
/// are private so it always matches `length * width`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "BrickParts")]
pub struct Brick {
    color: String,
    length: i32,
    width: i32,
    studs: i64,
}

/// Wire shape accepted when deserializing. A `studs` field, if present, is
/// ignored and recomputed.
#[derive(Deserialize)]
struct BrickParts {
    color: String,
    length: i32,
    width: i32,
}

impl From<BrickParts> for Brick {
    fn from(parts: BrickParts) -> Self {
        Self::new(parts.color, parts.length, parts.width)
    }
}

impl Brick {
    pub fn new(color: impl Into<String>, length: i32, width: i32) -> Self {
        Self {
            color: color.into(),
            length,
            width,
            studs: i64::from(length) * i64::from(width),
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn length(&self) -> i32 {
        self.length
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn studs(&self) -> i64 {
        self.studs
    }

    /// `"A {color} {length}x{width} brick with {studs} studs"`
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Simplified compatibility: this brick's length matches the other's
    /// width, or this brick's width matches the other's length.
    ///
    /// This is not real interlocking geometry and must stay exactly this rule.
    pub fn can_connect_to(&self, other: &Brick) -> bool {
        self.length == other.width || self.width == other.length
    }
}

impl fmt::Display for Brick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A {} {}x{} brick with {} studs",
            self.color, self.length, self.width, self.studs
        )
    }
}

/// Parses `color:LxW`, e.g. `red:2x4`. The color is everything before the
/// last `:` and may be empty.
impl FromStr for Brick {
    type Err = BrickError;

    fn from_str(s: &str) -> Result<Self> {
        let (color, dims) = s
            .rsplit_once(':')
            .ok_or_else(|| BrickError::MissingColorSeparator(s.to_string()))?;
        let (length, width) = dims
            .split_once(['x', 'X'])
            .ok_or_else(|| BrickError::MissingDimensionSeparator(s.to_string()))?;
        let length = parse_dimension("length", length)?;
        let width = parse_dimension("width", width)?;
        Ok(Self::new(color, length, width))
    }
}

fn parse_dimension(axis: &'static str, raw: &str) -> Result<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|e| BrickError::invalid_dimension(axis, raw, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn studs_are_length_times_width() {
        assert_eq!(Brick::new("red", 2, 4).studs(), 8);
        assert_eq!(Brick::new("black", 1, 1).studs(), 1);
        assert_eq!(Brick::new("void", 0, 9).studs(), 0);
        assert_eq!(Brick::new("odd", -3, 2).studs(), -6);
    }

    #[test]
    fn studs_do_not_overflow_at_extremes() {
        let b = Brick::new("huge", i32::MAX, i32::MAX);
        assert_eq!(b.studs(), i64::from(i32::MAX) * i64::from(i32::MAX));
        let b = Brick::new("huge", i32::MIN, i32::MIN);
        assert_eq!(b.studs(), 4_611_686_018_427_387_904);
    }

    #[test]
    fn describe_matches_template() {
        assert_eq!(Brick::new("blue", 2, 2).describe(), "A blue 2x2 brick with 4 studs");
        assert_eq!(Brick::new("", 0, 0).describe(), "A  0x0 brick with 0 studs");
        assert_eq!(
            Brick::new("neon-octarine", 3, 7).to_string(),
            "A neon-octarine 3x7 brick with 21 studs"
        );
    }

    #[test]
    fn parse_with_colon_in_color() {
        let b: Brick = "rgb:1:2x3".parse().unwrap();
        assert_eq!(b.color(), "rgb:1");
        assert_eq!((b.length(), b.width()), (2, 3));
    }

    #[test]
    fn parse_trims_dimensions() {
        let b: Brick = "red: 2 X 4 ".parse().unwrap();
        assert_eq!(b.color(), "red");
        assert_eq!(b.studs(), 8);
    }
}
