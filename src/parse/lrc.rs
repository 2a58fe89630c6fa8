//! LRC-style lyric parser
//!
//! Each text line may carry one or more `[m:ss]` / `[m:ss.ff]` tags. The
//! text left after removing every bracketed tag is emitted once per tag.
//! Lines without a recognizable tag are metadata or comments and are skipped.
//!
//! # Examples
//! - `[00:12.50]Hello` -> (12.5, "Hello")
//! - `[00:01.00][00:03.50]Hello` -> (1.0, "Hello"), (3.5, "Hello")
//! - `[00:20.00]` -> (20.0, " ")

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::models::LyricEntry;

/// Minutes, seconds and optional hundredths
static TIMESTAMP_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([0-9]{1,2}):([0-9]{1,2})(?:\.([0-9]{1,2}))?\]").unwrap());

/// Any bracketed tag, including metadata such as `[ar:Artist]`
static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[^\]]+\]").unwrap());

/// Text shown for rows that have a timestamp but no words
pub const SILENT_LINE_TEXT: &str = " ";

/// Parse lyric text into entries sorted ascending by timestamp.
///
/// Never fails: lines that do not parse simply contribute nothing, so an
/// empty or fully malformed input returns an empty vector. Entries sharing a
/// timestamp keep their source order.
pub fn parse_lrc(text: &str) -> Vec<LyricEntry> {
    let mut entries = Vec::new();

    // Bare carriage returns are dropped, not treated as line breaks
    let text = text.replace('\r', "");
    for raw in text.split('\n') {
        let line = raw.trim_end();
        if line.is_empty() {
            continue;
        }

        let stamps: Vec<f64> = TIMESTAMP_TAG
            .captures_iter(line)
            .filter_map(|caps| timestamp_from_captures(&caps))
            .collect();
        if stamps.is_empty() {
            continue;
        }

        let lyric = lyric_text(line);
        for timestamp in stamps {
            entries.push(LyricEntry::new(timestamp, lyric.clone()));
        }
    }

    entries.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));

    log::debug!("parse_lrc: {} entries", entries.len());
    entries
}

/// Strip every bracketed tag and trim; empty text becomes a single space
pub fn lyric_text(line: &str) -> String {
    let stripped = ANY_TAG.replace_all(line, "");
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        SILENT_LINE_TEXT.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parse a single tag such as `[01:02.30]` into seconds
pub fn parse_timestamp_tag(tag: &str) -> Option<f64> {
    TIMESTAMP_TAG
        .captures(tag)
        .and_then(|caps| timestamp_from_captures(&caps))
}

fn timestamp_from_captures(caps: &Captures) -> Option<f64> {
    let minutes: u32 = caps[1].parse().ok()?;
    let seconds: u32 = caps[2].parse().ok()?;
    // A single fraction digit means tenths: "3" reads as "30" hundredths
    let hundredths: u32 = match caps.get(3) {
        Some(m) => format!("{:0<2}", m.as_str()).parse().ok()?,
        None => 0,
    };

    Some(f64::from(minutes) * 60.0 + f64::from(seconds) + f64::from(hundredths) / 100.0)
}
