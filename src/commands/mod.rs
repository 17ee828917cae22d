//! Command implementations

pub mod play;

pub use play::{DEFAULT_TIME_LIMIT, PlayConfig, WordSupply, play_with, run_play};
