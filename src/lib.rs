//! Serenade WASM Module
//!
//! Core logic for a two-page browser experience: a landing page whose "No"
//! choice dodges the pointer, and a player page that scrolls and highlights
//! LRC-timed lyrics in step with audio playback.

pub mod api;
pub mod config;
pub mod errors;
pub mod fallback;
pub mod models;
pub mod parse;
pub mod placement;
pub mod sync;
pub mod utils;

// Re-export commonly used types
pub use models::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        wasm_warn!("Logger already initialized: {}", e);
    }

    log::info!("Serenade WASM module initialized");
}
