//! Evasive "No" button API
//!
//! The page forwards pointer events here; this module converts viewport
//! coordinates to stage-local space, runs the placement search and writes the
//! result to the element's `--tx`/`--ty` custom properties.

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::api::helpers::{bounding_rect, deserialize_or_default, serialize};
use crate::config::PlacementConfig;
use crate::models::{PlacementOffset, Point};
use crate::placement::EvasivePlacement;
use crate::wasm_log;

/// The movable choice, its stage, and the anchor choice it avoids
#[wasm_bindgen]
pub struct EvasiveButton {
    stage: HtmlElement,
    movable: HtmlElement,
    anchor: HtmlElement,
    placement: EvasivePlacement,
}

#[wasm_bindgen]
impl EvasiveButton {
    /// Bind to the page elements and take the initial measurement.
    ///
    /// `config` may be `undefined` or a partial `PlacementConfig`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        stage: HtmlElement,
        movable: HtmlElement,
        anchor: HtmlElement,
        config: JsValue,
    ) -> Result<EvasiveButton, JsValue> {
        let config: PlacementConfig = deserialize_or_default(config, "Invalid placement config")?;
        let mut button = EvasiveButton {
            stage,
            movable,
            anchor,
            placement: EvasivePlacement::new(config),
        };
        button.remeasure()?;
        Ok(button)
    }

    /// Reset the translation to zero and capture fresh geometry
    pub fn remeasure(&mut self) -> Result<(), JsValue> {
        self.apply(PlacementOffset::ZERO)?;
        self.placement.measure(
            bounding_rect(&self.stage),
            bounding_rect(&self.movable),
            bounding_rect(&self.anchor),
        );
        Ok(())
    }

    /// Viewport resized; geometry is remeasured before the next dodge
    #[wasm_bindgen(js_name = onResize)]
    pub fn on_resize(&mut self) {
        self.placement.invalidate();
    }

    /// Pointer entered the movable element
    #[wasm_bindgen(js_name = onPointerEnter)]
    pub fn on_pointer_enter(&mut self, client_x: f64, client_y: f64) -> Result<(), JsValue> {
        self.dodge(client_x, client_y, false).map(|_| ())
    }

    /// Press started on the movable element. Always returns `true`: the
    /// caller must suppress the activation (`preventDefault`).
    #[wasm_bindgen(js_name = onPointerDown)]
    pub fn on_pointer_down(&mut self, client_x: f64, client_y: f64) -> Result<bool, JsValue> {
        self.dodge(client_x, client_y, false)?;
        Ok(true)
    }

    /// Pointer moved over the stage; dodges only inside the proximity radius.
    /// Returns whether the element moved.
    #[wasm_bindgen(js_name = onPointerMove)]
    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64) -> Result<bool, JsValue> {
        self.dodge(client_x, client_y, true)
    }

    /// Current translation as `{ translateX, translateY }`
    pub fn offset(&self) -> Result<JsValue, JsValue> {
        serialize(&self.placement.offset(), "Failed to serialize offset")
    }
}

impl EvasiveButton {
    fn dodge(&mut self, client_x: f64, client_y: f64, only_if_near: bool) -> Result<bool, JsValue> {
        if self.placement.is_stale() {
            self.remeasure()?;
        }

        let stage = bounding_rect(&self.stage);
        let pointer = Point::new(client_x - stage.left, client_y - stage.top);

        let moved = if only_if_near {
            self.placement.dodge_if_near(pointer)
        } else {
            self.placement.dodge(pointer)
        };

        match moved {
            Some(offset) => {
                wasm_log!(
                    "Dodged to ({:.0}, {:.0})",
                    offset.translate_x,
                    offset.translate_y
                );
                self.apply(offset)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn apply(&self, offset: PlacementOffset) -> Result<(), JsValue> {
        let style = self.movable.style();
        style.set_property("--tx", &format!("{:.0}px", offset.translate_x))?;
        style.set_property("--ty", &format!("{:.0}px", offset.translate_y))?;
        Ok(())
    }
}
