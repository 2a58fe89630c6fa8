//! Data models shared by the lyric player and the evasive choice

pub mod geometry;
pub mod lyric;

pub use geometry::*;
pub use lyric::*;
