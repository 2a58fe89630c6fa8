//! Stage geometry for the evasive choice
//!
//! All coordinates are stage-local: the origin is the stage's top-left corner.

use serde::{Deserialize, Serialize};

/// A 2D point
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// An axis-aligned bounding rectangle (same shape as a DOMRect)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Layout captured with the movable element untranslated
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StageGeometry {
    pub stage_width: f64,
    pub stage_height: f64,
    pub movable_width: f64,
    pub movable_height: f64,
    pub movable_base_left: f64,
    pub movable_base_top: f64,
    pub anchor_center_x: f64,
    pub anchor_center_y: f64,
}

impl StageGeometry {
    /// Build geometry from viewport-space bounding rects.
    ///
    /// `movable` must have been measured with its translation reset to zero.
    pub fn from_rects(stage: Rect, movable: Rect, anchor: Rect) -> Self {
        let anchor_center = anchor.center();
        Self {
            stage_width: stage.width,
            stage_height: stage.height,
            movable_width: movable.width,
            movable_height: movable.height,
            movable_base_left: movable.left - stage.left,
            movable_base_top: movable.top - stage.top,
            anchor_center_x: anchor_center.x - stage.left,
            anchor_center_y: anchor_center.y - stage.top,
        }
    }

    pub fn anchor_center(&self) -> Point {
        Point::new(self.anchor_center_x, self.anchor_center_y)
    }

    /// Center of the movable element after applying `offset`
    pub fn movable_center(&self, offset: PlacementOffset) -> Point {
        Point::new(
            self.movable_base_left + offset.translate_x + self.movable_width / 2.0,
            self.movable_base_top + offset.translate_y + self.movable_height / 2.0,
        )
    }

    /// Bounding box of the movable element after applying `offset`
    pub fn movable_rect(&self, offset: PlacementOffset) -> Rect {
        Rect::new(
            self.movable_base_left + offset.translate_x,
            self.movable_base_top + offset.translate_y,
            self.movable_width,
            self.movable_height,
        )
    }
}

/// Translation applied to the movable element
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlacementOffset {
    pub translate_x: f64,
    pub translate_y: f64,
}

impl PlacementOffset {
    pub const ZERO: PlacementOffset = PlacementOffset {
        translate_x: 0.0,
        translate_y: 0.0,
    };

    pub fn new(translate_x: f64, translate_y: f64) -> Self {
        Self { translate_x, translate_y }
    }
}

/// Allowed translation interval on both axes.
///
/// May be inverted (`min > max`) when the stage is smaller than the element
/// plus padding.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TranslationRange {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl TranslationRange {
    pub fn is_inverted(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rects_is_stage_local() {
        let stage = Rect::new(100.0, 50.0, 400.0, 300.0);
        let movable = Rect::new(300.0, 150.0, 80.0, 40.0);
        let anchor = Rect::new(180.0, 150.0, 100.0, 40.0);

        let geo = StageGeometry::from_rects(stage, movable, anchor);
        assert_eq!(geo.stage_width, 400.0);
        assert_eq!(geo.stage_height, 300.0);
        assert_eq!(geo.movable_base_left, 200.0);
        assert_eq!(geo.movable_base_top, 100.0);
        assert_eq!(geo.anchor_center(), Point::new(130.0, 120.0));
    }

    #[test]
    fn test_movable_center_with_offset() {
        let geo = StageGeometry::from_rects(
            Rect::new(0.0, 0.0, 400.0, 300.0),
            Rect::new(200.0, 100.0, 80.0, 40.0),
            Rect::new(80.0, 100.0, 100.0, 40.0),
        );
        let c = geo.movable_center(PlacementOffset::new(-20.0, 30.0));
        assert_eq!(c, Point::new(220.0, 150.0));
    }
}
