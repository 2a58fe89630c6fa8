//! Active-line tracking for a calibrated lyric track

use serde::{Deserialize, Serialize};

use crate::config::PlayerConfig;
use crate::models::{LyricEntry, Track};

/// Shift every timestamp by `offset_seconds`, clamping at zero.
///
/// Text and order are unchanged. A zero or non-finite offset counts as no
/// offset and returns an identical copy.
pub fn apply_offset(entries: &[LyricEntry], offset_seconds: f64) -> Vec<LyricEntry> {
    if !offset_seconds.is_finite() || offset_seconds == 0.0 {
        return entries.to_vec();
    }

    entries
        .iter()
        .map(|e| LyricEntry::new((e.timestamp + offset_seconds).max(0.0), e.text.clone()))
        .collect()
}

/// Index of the last entry whose timestamp is `<= time`.
///
/// Returns 0 when `entries` is empty or `time` precedes every entry, so 0 is
/// ambiguous between "before the first line" and "first line active". Callers
/// that care must check `entries.is_empty()` / the first timestamp themselves.
pub fn active_index(entries: &[LyricEntry], time: f64) -> usize {
    // Entries are sorted, so the predicate is true for a prefix
    entries
        .partition_point(|e| e.timestamp <= time)
        .saturating_sub(1)
}

/// Rows to mark after an active-line change
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LineHighlight {
    pub active: usize,
    /// Row immediately after the active one, if it exists
    pub upcoming: Option<usize>,
}

/// Emitted when the active row changes
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineChange {
    pub highlight: LineHighlight,
    /// Playback has moved far enough in to reveal the headline
    pub reveal_headline: bool,
}

/// Scroll offset that places a row `scroll_anchor_ratio` of the way down the
/// viewport. Never negative.
pub fn scroll_top_for(row_offset_top: f64, viewport_height: f64, scroll_anchor_ratio: f64) -> f64 {
    (row_offset_top - viewport_height * scroll_anchor_ratio).max(0.0)
}

/// Owns a track and reports active-line changes for a playback position.
///
/// Seeks in either direction are handled the same way as forward ticks:
/// every update runs a fresh binary search.
#[derive(Clone, Debug)]
pub struct LyricSync {
    raw: Vec<LyricEntry>,
    entries: Vec<LyricEntry>,
    offset_seconds: f64,
    last_index: Option<usize>,
    config: PlayerConfig,
}

impl LyricSync {
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            raw: Vec::new(),
            entries: Vec::new(),
            offset_seconds: config.offset_seconds,
            last_index: None,
            config,
        }
    }

    /// Replace the track. Returns the calibrated entries for the page to
    /// materialize as rows, in order.
    pub fn load(&mut self, track: &Track) -> &[LyricEntry] {
        self.raw = track.entries.clone();
        self.recalibrate();
        log::info!(
            "Loaded lyric track: {} entries ({:?})",
            self.entries.len(),
            track.source
        );
        &self.entries
    }

    /// Change the calibration offset and recompute the calibrated track
    pub fn set_offset(&mut self, offset_seconds: f64) {
        self.offset_seconds = offset_seconds;
        self.recalibrate();
    }

    pub fn offset(&self) -> f64 {
        self.offset_seconds
    }

    pub fn entries(&self) -> &[LyricEntry] {
        &self.entries
    }

    pub fn last_index(&self) -> Option<usize> {
        self.last_index
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Report the active row for `time` if it differs from the last report.
    ///
    /// Returns `None` for an empty track or when the active row is unchanged.
    pub fn update(&mut self, time: f64) -> Option<LineChange> {
        if self.entries.is_empty() {
            return None;
        }

        let time = if time.is_finite() { time } else { 0.0 };
        let idx = active_index(&self.entries, time);
        if self.last_index == Some(idx) {
            return None;
        }
        self.last_index = Some(idx);

        let upcoming = if idx + 1 < self.entries.len() {
            Some(idx + 1)
        } else {
            None
        };
        log::debug!("Active lyric line -> {} at {:.2}s", idx, time);

        Some(LineChange {
            highlight: LineHighlight { active: idx, upcoming },
            reveal_headline: time > self.config.headline_reveal_after,
        })
    }

    /// Scroll offset for the active row using the configured anchor ratio
    pub fn scroll_top(&self, row_offset_top: f64, viewport_height: f64) -> f64 {
        scroll_top_for(row_offset_top, viewport_height, self.config.scroll_anchor_ratio)
    }

    fn recalibrate(&mut self) {
        self.entries = apply_offset(&self.raw, self.offset_seconds);
        // Row indices may now point at different text
        self.last_index = None;
    }
}

impl Default for LyricSync {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrackSource;

    fn entries(times: &[f64]) -> Vec<LyricEntry> {
        times
            .iter()
            .enumerate()
            .map(|(i, t)| LyricEntry::new(*t, format!("line {}", i)))
            .collect()
    }

    #[test]
    fn test_active_index_basic() {
        let e = entries(&[0.0, 5.0, 10.0]);
        assert_eq!(active_index(&e, -1.0), 0);
        assert_eq!(active_index(&e, 0.0), 0);
        assert_eq!(active_index(&e, 7.0), 1);
        assert_eq!(active_index(&e, 10.0), 2);
        assert_eq!(active_index(&e, 999.0), 2);
    }

    #[test]
    fn test_active_index_empty_is_zero() {
        assert_eq!(active_index(&[], 3.0), 0);
    }

    #[test]
    fn test_active_index_duplicate_timestamps_picks_last() {
        let e = entries(&[1.0, 2.0, 2.0, 3.0]);
        assert_eq!(active_index(&e, 2.5), 2);
    }

    #[test]
    fn test_apply_offset_clamps() {
        let e = entries(&[5.0]);
        let shifted = apply_offset(&e, -100.0);
        assert_eq!(shifted[0].timestamp, 0.0);
        assert_eq!(shifted[0].text, "line 0");
    }

    #[test]
    fn test_apply_offset_zero_is_identity() {
        let e = entries(&[1.0, 2.5]);
        assert_eq!(apply_offset(&e, 0.0), e);
    }

    #[test]
    fn test_scroll_top_never_negative() {
        assert_eq!(scroll_top_for(10.0, 500.0, 0.42), 0.0);
        assert!((scroll_top_for(1000.0, 500.0, 0.42) - 790.0).abs() < 1e-9);
    }

    #[test]
    fn test_update_reports_only_changes() {
        let mut sync = LyricSync::new(PlayerConfig {
            offset_seconds: 0.0,
            ..PlayerConfig::default()
        });
        sync.load(&Track::new(entries(&[0.0, 5.0, 10.0]), TrackSource::Fetched));

        let first = sync.update(0.5).unwrap();
        assert_eq!(first.highlight, LineHighlight { active: 0, upcoming: Some(1) });
        assert!(sync.update(1.0).is_none());

        let last = sync.update(12.0).unwrap();
        assert_eq!(last.highlight, LineHighlight { active: 2, upcoming: None });
        assert!(last.reveal_headline);

        // Backward seek
        let back = sync.update(6.0).unwrap();
        assert_eq!(back.highlight.active, 1);
    }

    #[test]
    fn test_update_on_empty_track() {
        let mut sync = LyricSync::default();
        assert!(sync.update(3.0).is_none());
    }

    #[test]
    fn test_offset_change_resets_last_index() {
        let mut sync = LyricSync::new(PlayerConfig {
            offset_seconds: 0.0,
            ..PlayerConfig::default()
        });
        sync.load(&Track::new(entries(&[0.0, 5.0]), TrackSource::Fetched));
        assert!(sync.update(1.0).is_some());
        sync.set_offset(-6.0);
        assert_eq!(sync.entries()[1].timestamp, 0.0);
        assert_eq!(sync.update(1.0).unwrap().highlight.active, 1);
    }
}
