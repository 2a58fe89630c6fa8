//! Built-in placeholder track
//!
//! Used whenever the external lyric resource cannot be fetched or contains no
//! timed lines. The page never sees a lyric error, only this track.

use crate::errors::LyricsError;
use crate::models::{LyricEntry, Track, TrackSource};
use crate::parse::{parse_lrc, SILENT_LINE_TEXT};

/// First line shown when no lyric file is available
pub const PLACEHOLDER_MESSAGE: &str = "Put your LRC lyrics in assets/lyrics.lrc";

/// The instructional track
pub fn placeholder_track() -> Track {
    let entries = vec![
        LyricEntry::new(0.0, PLACEHOLDER_MESSAGE),
        LyricEntry::new(4.0, "Format each line like: [mm:ss.xx] your lyric line"),
        LyricEntry::new(8.0, "This page will highlight and scroll automatically"),
        LyricEntry::new(12.0, SILENT_LINE_TEXT),
    ];
    Track::new(entries, TrackSource::Placeholder)
}

/// Parse fetched text; text with no timed lines falls back to the placeholder
pub fn track_from_text(text: &str) -> Result<Track, LyricsError> {
    let entries = parse_lrc(text);
    if entries.is_empty() {
        return Err(LyricsError::Empty);
    }
    Ok(Track::new(entries, TrackSource::Fetched))
}

/// Fold a fetch outcome into a track, substituting the placeholder on any error
pub fn track_from_fetch(result: Result<String, LyricsError>) -> Track {
    match result.and_then(|text| track_from_text(&text)) {
        Ok(track) => track,
        Err(e) => {
            log::warn!("Using placeholder lyrics: {}", e);
            placeholder_track()
        }
    }
}
