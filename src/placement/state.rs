//! Placement state owned by one movable element

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::config::PlacementConfig;
use crate::models::{PlacementOffset, Point, Rect, StageGeometry};
use crate::placement::search::{compute_offset, should_dodge};

/// Cached geometry plus the current offset for one evasive element.
///
/// Geometry goes stale on resize; the page must call [`EvasivePlacement::measure`]
/// (with the element's translation reset to zero) before the next placement.
#[derive(Debug)]
pub struct EvasivePlacement<R: Rng = ThreadRng> {
    geometry: Option<StageGeometry>,
    offset: PlacementOffset,
    config: PlacementConfig,
    rng: R,
}

impl EvasivePlacement<ThreadRng> {
    pub fn new(config: PlacementConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> EvasivePlacement<R> {
    pub fn with_rng(config: PlacementConfig, rng: R) -> Self {
        Self {
            geometry: None,
            offset: PlacementOffset::ZERO,
            config,
            rng,
        }
    }

    /// Capture geometry from viewport-space rects.
    ///
    /// Resets the current offset to zero, matching the untranslated layout
    /// the rects were measured in.
    pub fn measure(&mut self, stage: Rect, movable: Rect, anchor: Rect) -> StageGeometry {
        let geometry = StageGeometry::from_rects(stage, movable, anchor);
        log::debug!(
            "Measured stage {}x{}, movable at ({}, {})",
            geometry.stage_width,
            geometry.stage_height,
            geometry.movable_base_left,
            geometry.movable_base_top
        );
        self.geometry = Some(geometry);
        self.offset = PlacementOffset::ZERO;
        geometry
    }

    /// Mark cached geometry stale (viewport resized)
    pub fn invalidate(&mut self) {
        log::debug!("Placement geometry invalidated");
        self.geometry = None;
    }

    pub fn is_stale(&self) -> bool {
        self.geometry.is_none()
    }

    pub fn geometry(&self) -> Option<&StageGeometry> {
        self.geometry.as_ref()
    }

    pub fn offset(&self) -> PlacementOffset {
        self.offset
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Move away from a stage-local pointer position.
    ///
    /// Returns `None` while geometry is stale.
    pub fn dodge(&mut self, pointer: Point) -> Option<PlacementOffset> {
        let geometry = self.geometry?;
        self.offset = compute_offset(&geometry, pointer, &self.config, &mut self.rng);
        Some(self.offset)
    }

    /// Dodge only if the pointer is within the proximity radius of the
    /// element's current center
    pub fn dodge_if_near(&mut self, pointer: Point) -> Option<PlacementOffset> {
        let geometry = self.geometry?;
        let center = geometry.movable_center(self.offset);
        if !should_dodge(center, pointer, self.config.proximity_radius) {
            return None;
        }
        self.dodge(pointer)
    }
}
