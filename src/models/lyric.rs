//! Lyric track data
//!
//! A track is an ordered list of timestamped lines. Entries are immutable once
//! parsed; calibration produces a new track rather than editing in place.

use serde::{Deserialize, Serialize};

/// One timed lyric row
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LyricEntry {
    /// Start time in seconds (never negative)
    pub timestamp: f64,

    /// Display text; silent rows carry a single space
    pub text: String,
}

impl LyricEntry {
    pub fn new(timestamp: f64, text: impl Into<String>) -> Self {
        Self {
            timestamp,
            text: text.into(),
        }
    }
}

/// Where a track's content came from
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackSource {
    /// Parsed from the external lyric resource
    Fetched,
    /// Built-in instructional track used when the resource is unavailable
    Placeholder,
}

/// A parsed lyric sequence, sorted ascending by timestamp
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Track {
    pub entries: Vec<LyricEntry>,
    pub source: TrackSource,
}

impl Track {
    pub fn new(entries: Vec<LyricEntry>, source: TrackSource) -> Self {
        Self { entries, source }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_placeholder(&self) -> bool {
        self.source == TrackSource::Placeholder
    }
}
