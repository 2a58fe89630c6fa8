//! Evasive placement
//!
//! Picks a translation for the movable element that keeps it inside the
//! stage while staying away from both the pointer and the anchor element.
//!
//! # Algorithm
//! 1. Derive the translation range that keeps the element inside the padded stage
//! 2. Draw N random translations within that range
//! 3. Score each as `min(d_pointer, d_anchor * anchor_weight)`
//! 4. Keep the best (earliest wins ties) and clamp it into the range

pub mod search;
pub mod state;

pub use search::*;
pub use state::*;
