//! Random-sampling placement search

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::PlacementConfig;
use crate::models::{PlacementOffset, Point, StageGeometry, TranslationRange};
use crate::utils::clamp;

/// A sampled translation and its score
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub offset: PlacementOffset,
    pub distance_to_pointer: f64,
    pub distance_to_anchor: f64,
    pub score: f64,
}

/// Translations that keep the element's box within
/// `[padding, stage - padding]` on both axes.
///
/// Inverted when the stage is too small for the element plus padding.
pub fn translation_range(geometry: &StageGeometry, padding: f64) -> TranslationRange {
    TranslationRange {
        min_x: padding - geometry.movable_base_left,
        max_x: (geometry.stage_width - geometry.movable_width - padding) - geometry.movable_base_left,
        min_y: padding - geometry.movable_base_top,
        max_y: (geometry.stage_height - geometry.movable_height - padding) - geometry.movable_base_top,
    }
}

/// Clamp an offset into `range`. Inverted ranges resolve to the minimum.
pub fn clamp_offset(offset: PlacementOffset, range: &TranslationRange) -> PlacementOffset {
    PlacementOffset::new(
        clamp(offset.translate_x, range.min_x, range.max_x),
        clamp(offset.translate_y, range.min_y, range.max_y),
    )
}

/// Score a translation against the pointer and anchor
pub fn score_offset(
    geometry: &StageGeometry,
    pointer: Point,
    offset: PlacementOffset,
    anchor_weight: f64,
) -> Candidate {
    let center = geometry.movable_center(offset);
    let distance_to_pointer = center.distance_to(pointer);
    let distance_to_anchor = center.distance_to(geometry.anchor_center());
    Candidate {
        offset,
        distance_to_pointer,
        distance_to_anchor,
        score: distance_to_pointer.min(distance_to_anchor * anchor_weight),
    }
}

/// Draw `count` uniform translations inside `range`
pub fn sample_offsets<R: Rng + ?Sized>(
    range: &TranslationRange,
    count: usize,
    rng: &mut R,
) -> Vec<PlacementOffset> {
    (0..count)
        .map(|_| {
            PlacementOffset::new(
                lerp(range.min_x, range.max_x, rng.gen::<f64>()),
                lerp(range.min_y, range.max_y, rng.gen::<f64>()),
            )
        })
        .collect()
}

/// Highest-scoring candidate; the earliest one wins ties
pub fn pick_best(candidates: &[Candidate]) -> Option<Candidate> {
    let mut iter = candidates.iter();
    let mut best = *iter.next()?;
    for candidate in iter {
        if candidate.score > best.score {
            best = *candidate;
        }
    }
    Some(best)
}

/// Result of one placement search, with every evaluated candidate
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlacementSearch {
    pub range: TranslationRange,
    pub candidates: Vec<Candidate>,
    /// Highest-scoring sample, before the final clamp
    pub best: Candidate,
    pub chosen: PlacementOffset,
}

/// Run the sampling search and keep the evaluated candidates
pub fn search_offset<R: Rng + ?Sized>(
    geometry: &StageGeometry,
    pointer: Point,
    config: &PlacementConfig,
    rng: &mut R,
) -> PlacementSearch {
    let range = translation_range(geometry, config.padding);
    let candidates: Vec<Candidate> = sample_offsets(&range, config.samples.max(1), rng)
        .into_iter()
        .map(|offset| score_offset(geometry, pointer, offset, config.anchor_weight))
        .collect();

    // At least one sample is always drawn
    let best = pick_best(&candidates).unwrap_or_else(|| {
        score_offset(geometry, pointer, PlacementOffset::ZERO, config.anchor_weight)
    });

    PlacementSearch {
        range,
        candidates,
        best,
        chosen: clamp_offset(best.offset, &range),
    }
}

/// Pick a translation away from `pointer` and the anchor, inside the stage
pub fn compute_offset<R: Rng + ?Sized>(
    geometry: &StageGeometry,
    pointer: Point,
    config: &PlacementConfig,
    rng: &mut R,
) -> PlacementOffset {
    search_offset(geometry, pointer, config, rng).chosen
}

/// Whether a moving pointer is close enough to the element to trigger a dodge
pub fn should_dodge(element_center: Point, pointer: Point, proximity_radius: f64) -> bool {
    element_center.distance_to(pointer) < proximity_radius
}

fn lerp(min: f64, max: f64, t: f64) -> f64 {
    min + t * (max - min)
}
