//! Cross-page affirmation flag and autoplay
//!
//! The landing page records the affirming click in local storage; the player
//! page only attempts automatic playback when that flag exists.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlMediaElement, Storage};

use crate::api::helpers::window;
use crate::config::AFFIRMED_FLAG_KEY;
use crate::errors::AutoplayError;
use crate::{wasm_info, wasm_warn};

fn local_storage() -> Option<Storage> {
    window().ok()?.local_storage().ok()?
}

/// Record the affirming gesture with the current time.
///
/// Storage failures (private mode, quota) are ignored.
#[wasm_bindgen(js_name = markAffirmed)]
pub fn mark_affirmed() {
    let Some(storage) = local_storage() else {
        wasm_warn!("localStorage unavailable, affirmation not recorded");
        return;
    };
    let stamp = js_sys::Date::now().to_string();
    if storage.set_item(AFFIRMED_FLAG_KEY, &stamp).is_err() {
        wasm_warn!("Failed to write {}", AFFIRMED_FLAG_KEY);
    }
}

/// Whether the landing page recorded the affirming gesture
#[wasm_bindgen(js_name = hasAffirmed)]
pub fn has_affirmed() -> bool {
    local_storage()
        .and_then(|s| s.get_item(AFFIRMED_FLAG_KEY).ok().flatten())
        .is_some()
}

async fn start_playback(media: &HtmlMediaElement) -> Result<(), AutoplayError> {
    if !has_affirmed() {
        return Err(AutoplayError::NotAffirmed);
    }
    let promise = media
        .play()
        .map_err(|e| AutoplayError::Rejected(format!("{:?}", e)))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| AutoplayError::Rejected(format!("{:?}", e)))?;
    Ok(())
}

/// Try to start playback automatically.
///
/// Resolves `true` when playback started. `false` means the page should show
/// its manual "tap to start" prompt; the attempt is not retried.
#[wasm_bindgen(js_name = tryAutoplay)]
pub async fn try_autoplay(media: HtmlMediaElement) -> bool {
    match start_playback(&media).await {
        Ok(()) => {
            wasm_info!("Autoplay started");
            true
        }
        Err(e) => {
            wasm_warn!("Autoplay unavailable: {}", e);
            false
        }
    }
}
