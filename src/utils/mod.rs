//! Utility modules
//!
//! Small helpers shared across the lyric and placement code.

pub mod math;

// Re-export commonly used functions
pub use math::*;
