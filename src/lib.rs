//! Example routines, console rendering, and demo configuration for the
//! `legobrick` driver. The brick model itself lives in `legobrick-core`.

pub mod config;
pub mod examples;
pub mod format;
