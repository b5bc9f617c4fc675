//! # Loot Core
//!
//! Loot-table conditional evaluation for Driftline. Rules persisted with
//! loot tables are decoded into immutable predicates and evaluated against
//! a world's biome classification.
//!
//! ## Core Components
//!
//! - **predicate**: location predicates combining coordinate bounds with
//!   biome category include/exclude rules
//! - **condition**: loot conditions embedding predicates in loot tables
//!
//! ## Design Philosophy
//!
//! - **Tolerant loading**: a bad category name in a loot table is logged
//!   and neutralized, never a crash at resolution time
//! - **Pure evaluation**: predicates are read-only value objects, safe to
//!   share across concurrent loot rolls
//! - **Host-agnostic**: world access goes through the `BiomeProvider`
//!   seam, so any world representation can back the rules

pub mod condition;
pub mod predicate;

pub use condition::*;
pub use predicate::*;
