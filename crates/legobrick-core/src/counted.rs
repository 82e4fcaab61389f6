//! Counted production: bricks stamped with a sequential production number.

use serde::Serialize;
use std::fmt;

use crate::brick::Brick;

/// A brick plus the production number it was assigned by its factory.
#[derive(Clone, Debug, Serialize)]
pub struct CountedBrick {
    #[serde(flatten)]
    brick: Brick,
    brick_number: u64,
}

impl CountedBrick {
    pub fn brick(&self) -> &Brick {
        &self.brick
    }

    pub fn brick_number(&self) -> u64 {
        self.brick_number
    }

    /// Base description with `" (Brick #{n})"` appended.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    pub fn can_connect_to(&self, other: &Brick) -> bool {
        self.brick.can_connect_to(other)
    }

    pub fn into_brick(self) -> Brick {
        self.brick
    }
}

impl fmt::Display for CountedBrick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Brick #{})", self.brick, self.brick_number)
    }
}

/// Owns the production counter. Starts at zero, increments once per brick,
/// never resets.
#[derive(Debug, Default)]
pub struct BrickFactory {
    total_created: u64,
}

impl BrickFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a brick and stamp it with the post-increment counter value, so
    /// the first brick from a fresh factory is #1.
    pub fn make(&mut self, color: impl Into<String>, length: i32, width: i32) -> CountedBrick {
        let brick = Brick::new(color, length, width);
        self.total_created += 1;
        tracing::debug!(number = self.total_created, brick = %brick, "brick produced");
        CountedBrick {
            brick,
            brick_number: self.total_created,
        }
    }

    pub fn total_created(&self) -> u64 {
        self.total_created
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_factory_starts_at_zero() {
        assert_eq!(BrickFactory::new().total_created(), 0);
    }

    #[test]
    fn display_appends_number() {
        let mut factory = BrickFactory::new();
        let b = factory.make("red", 2, 4);
        assert_eq!(format!("{}", b), "A red 2x4 brick with 8 studs (Brick #1)");
    }
}
