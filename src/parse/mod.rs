//! Parsing module
//!
//! Converts timestamp-annotated lyric text into sorted lyric entries.

pub mod lrc;

pub use lrc::*;
