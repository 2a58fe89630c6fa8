//! Lyric synchronization
//!
//! Maps a playback position onto the active lyric row and derives the
//! row highlight and scroll position the page should show.

pub mod clock;
pub mod engine;

pub use clock::*;
pub use engine::*;
