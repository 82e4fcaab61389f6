//! LegoBrick Core - Brick model, counted production, and collection statistics

pub mod brick;
pub mod counted;
pub mod error;
pub mod stats;

pub use brick::Brick;
pub use counted::{BrickFactory, CountedBrick};
pub use error::{BrickError, Result};
pub use stats::{capitalize, partition_compatible, total_studs, ColorTally};
