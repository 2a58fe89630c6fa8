//! JavaScript-facing API
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, serde conversion, DOM measurement
//! - `lyrics`: lyric fetching with fallback and the `LyricPlayer` display
//! - `landing`: the evasive `EvasiveButton`
//! - `session`: affirmation flag and autoplay

pub mod helpers;
pub mod landing;
pub mod lyrics;
pub mod session;

pub use landing::EvasiveButton;
pub use lyrics::{fetch_track, load_track, LyricPlayer};
pub use session::{has_affirmed, mark_affirmed, try_autoplay};
