//! Error types
//!
//! Neither error reaches the page as a failure: lyric errors are folded into
//! the placeholder track and autoplay errors reveal the manual start prompt.

use thiserror::Error;

/// Failure to obtain lyric text from the external resource
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LyricsError {
    /// Network or fetch-API failure
    #[error("lyrics transport failed: {0}")]
    Transport(String),

    /// Non-success HTTP status
    #[error("lyrics request returned HTTP {0}")]
    Status(u16),

    /// Response body could not be read as text
    #[error("lyrics body unreadable: {0}")]
    Body(String),

    /// Resource read fine but contained no timed lines
    #[error("lyrics contained no timestamped lines")]
    Empty,
}

/// Reasons the player could not start playback on its own
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AutoplayError {
    /// The landing page never recorded the affirming click
    #[error("no affirming gesture recorded")]
    NotAffirmed,

    /// The browser refused `play()` (usually autoplay policy)
    #[error("playback rejected: {0}")]
    Rejected(String),
}
