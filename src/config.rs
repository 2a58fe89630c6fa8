//! Runtime configuration
//!
//! Defaults match the shipped pages; the page can override any field by
//! passing a partial object (missing fields fall back to the defaults).

use serde::{Deserialize, Serialize};

/// Storage key written by the landing page after the affirming click
pub const AFFIRMED_FLAG_KEY: &str = "val_yes_clicked";

/// Default lyric resource location, relative to the player page
pub const DEFAULT_LYRICS_URL: &str = "./assets/lyrics.lrc";

/// Calibration for the bundled audio rendering.
/// Negative means lyrics show earlier.
pub const DEFAULT_LYRICS_OFFSET_SEC: f64 = -6.0;

/// Fraction of the viewport height above the active row after scrolling
pub const DEFAULT_SCROLL_ANCHOR_RATIO: f64 = 0.42;

/// Playback time after which the headline is revealed
pub const DEFAULT_HEADLINE_REVEAL_SEC: f64 = 1.0;

pub const DEFAULT_STAGE_PADDING: f64 = 10.0;
pub const DEFAULT_PLACEMENT_SAMPLES: usize = 20;
pub const DEFAULT_ANCHOR_WEIGHT: f64 = 0.95;
pub const DEFAULT_PROXIMITY_RADIUS: f64 = 140.0;

/// Lyric player settings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerConfig {
    pub lyrics_url: String,
    pub offset_seconds: f64,
    pub scroll_anchor_ratio: f64,
    pub headline_reveal_after: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            lyrics_url: DEFAULT_LYRICS_URL.to_string(),
            offset_seconds: DEFAULT_LYRICS_OFFSET_SEC,
            scroll_anchor_ratio: DEFAULT_SCROLL_ANCHOR_RATIO,
            headline_reveal_after: DEFAULT_HEADLINE_REVEAL_SEC,
        }
    }
}

/// Evasive placement settings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PlacementConfig {
    /// Minimum gap between the movable element and the stage edge
    pub padding: f64,
    /// Random candidates evaluated per placement
    pub samples: usize,
    /// Weight applied to the anchor distance when scoring
    pub anchor_weight: f64,
    /// Pointer distance from the element center that triggers a dodge
    pub proximity_radius: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_STAGE_PADDING,
            samples: DEFAULT_PLACEMENT_SAMPLES,
            anchor_weight: DEFAULT_ANCHOR_WEIGHT,
            proximity_radius: DEFAULT_PROXIMITY_RADIUS,
        }
    }
}

impl PlayerConfig {
    /// Parse a JSON override; unknown or missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl PlacementConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
