// Lyric synchronization: calibration, active-line lookup and fallback loading

use serenade_wasm::config::PlayerConfig;
use serenade_wasm::errors::LyricsError;
use serenade_wasm::fallback::{track_from_fetch, PLACEHOLDER_MESSAGE};
use serenade_wasm::models::{LyricEntry, Track, TrackSource};
use serenade_wasm::parse::parse_lrc;
use serenade_wasm::sync::{active_index, apply_offset, LyricSync};

fn track(times: &[f64]) -> Vec<LyricEntry> {
    times
        .iter()
        .map(|t| LyricEntry::new(*t, format!("at {}", t)))
        .collect()
}

#[test]
fn test_active_index_boundaries() {
    let entries = track(&[0.0, 5.0, 10.0]);
    assert_eq!(active_index(&entries, -1.0), 0);
    assert_eq!(active_index(&entries, 0.0), 0);
    assert_eq!(active_index(&entries, 7.0), 1);
    assert_eq!(active_index(&entries, 999.0), 2);
}

#[test]
fn test_active_index_before_first_entry_is_ambiguous_zero() {
    // 0 means both "before the first line" and "first line active";
    // callers distinguish using the first timestamp.
    let entries = track(&[3.0, 6.0]);
    assert_eq!(active_index(&entries, 1.0), 0);
    assert!(1.0 < entries[0].timestamp);
    assert_eq!(active_index(&entries, 3.0), 0);
    assert_eq!(active_index(&[], 1.0), 0);
}

#[test]
fn test_active_index_handles_backward_seeks() {
    let entries = track(&[0.0, 2.0, 4.0, 6.0, 8.0]);
    let times = [7.0, 1.0, 5.0, 0.5, 8.5, 2.0];
    let expected = [3, 0, 2, 0, 4, 1];
    for (t, want) in times.iter().zip(expected) {
        assert_eq!(active_index(&entries, *t), want, "time {}", t);
    }
}

#[test]
fn test_apply_offset_never_negative() {
    let shifted = apply_offset(&track(&[5.0]), -100.0);
    assert_eq!(shifted[0].timestamp, 0.0);

    let shifted = apply_offset(&track(&[5.0, 20.0]), -6.0);
    assert_eq!(shifted[0].timestamp, 0.0);
    assert_eq!(shifted[1].timestamp, 14.0);
}

#[test]
fn test_sync_reports_changes_only() {
    let mut sync = LyricSync::new(PlayerConfig {
        offset_seconds: 0.0,
        ..PlayerConfig::default()
    });
    let rows = sync.load(&Track::new(track(&[0.0, 5.0, 10.0]), TrackSource::Fetched));
    assert_eq!(rows.len(), 3);

    let mut reported = Vec::new();
    for tick in [0.0, 0.25, 0.5, 5.0, 5.25, 9.9, 10.0, 3.0] {
        if let Some(change) = sync.update(tick) {
            reported.push(change.highlight.active);
        }
    }
    assert_eq!(reported, vec![0, 1, 2, 0]);
}

#[test]
fn test_sync_applies_configured_offset() {
    let mut sync = LyricSync::default();
    let rows = sync.load(&Track::new(parse_lrc("[00:10.00]a\n[00:20.00]b"), TrackSource::Fetched));
    assert_eq!(rows[0].timestamp, 4.0);
    assert_eq!(rows[1].timestamp, 14.0);

    assert_eq!(sync.update(15.0).unwrap().highlight.active, 1);
}

#[test]
fn test_headline_reveal_threshold() {
    let mut sync = LyricSync::new(PlayerConfig {
        offset_seconds: 0.0,
        ..PlayerConfig::default()
    });
    sync.load(&Track::new(track(&[0.0, 2.0]), TrackSource::Fetched));
    assert!(!sync.update(0.5).unwrap().reveal_headline);
    assert!(sync.update(2.5).unwrap().reveal_headline);
}

#[test]
fn test_fallback_used_when_fetch_rejects() {
    let track = track_from_fetch(Err(LyricsError::Transport("offline".to_string())));
    assert_eq!(track.source, TrackSource::Placeholder);
    assert_eq!(track.entries[0].text, PLACEHOLDER_MESSAGE);

    let mut sync = LyricSync::default();
    sync.load(&track);
    assert_eq!(sync.entries()[0].text, PLACEHOLDER_MESSAGE);
    assert!(sync.update(0.0).is_some());
}

#[test]
fn test_fallback_used_for_http_error_and_empty_body() {
    assert!(track_from_fetch(Err(LyricsError::Status(500))).is_placeholder());
    assert!(track_from_fetch(Ok(String::new())).is_placeholder());
}

#[test]
fn test_non_finite_offset_leaves_timestamps_alone() {
    let entries = track(&[5.0, 12.5]);
    assert_eq!(apply_offset(&entries, f64::NAN), entries);
    assert_eq!(apply_offset(&entries, f64::INFINITY), entries);

    let mut sync = LyricSync::new(PlayerConfig {
        offset_seconds: f64::NAN,
        ..PlayerConfig::default()
    });
    let rows = sync.load(&Track::new(entries.clone(), TrackSource::Fetched));
    assert_eq!(rows[0].timestamp, 5.0);
    assert_eq!(rows[1].timestamp, 12.5);
}
