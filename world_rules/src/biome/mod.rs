//! Biome definitions and category membership.

mod category;
mod dictionary;

pub use category::*;
pub use dictionary::*;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Unique identifier for biomes registered in a dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BiomeId(pub Uuid);

impl BiomeId {
    /// Create a new random biome ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a biome ID from a specific UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Create a nil/empty biome ID (useful for defaults).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for BiomeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BiomeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A biome registered in the world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Biome {
    pub id: BiomeId,

    /// Canonical lowercase registry name, e.g. "warm_ocean".
    pub name: String,

    /// Host-attached data (colors, spawn weights, mod extensions).
    #[serde(default)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Biome {
    /// Create a new biome with the given registry name. The name is
    /// normalized to lowercase.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BiomeId::new(),
            name: name.into().to_lowercase(),
            extra: HashMap::new(),
        }
    }
}
