//! # World Rules
//!
//! The "World Bible" crate - biome classification, category membership, and
//! block positions for the Driftline world. This crate is the single source of
//! truth for world-side data and does not contain any loot logic.

pub mod biome;
pub mod position;
pub mod world;

pub use biome::*;
pub use position::*;
pub use world::*;
