//! Biome categories - the closed classification taxonomy.

use serde::{Deserialize, Serialize};

/// Climate/terrain categories a biome may belong to.
///
/// The set is closed: loot rules refer to categories by their canonical
/// lowercase name, and unknown names never resolve to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiomeCategory {
    Beach,
    Desert,
    ExtremeHills,
    Forest,
    Icy,
    Jungle,
    Mesa,
    Mushroom,
    Nether,
    None,
    Ocean,
    Plains,
    River,
    Savanna,
    Swamp,
    Taiga,
    TheEnd,
}

impl BiomeCategory {
    /// Every category, in canonical order.
    pub fn all() -> &'static [BiomeCategory] {
        &[
            BiomeCategory::Beach,
            BiomeCategory::Desert,
            BiomeCategory::ExtremeHills,
            BiomeCategory::Forest,
            BiomeCategory::Icy,
            BiomeCategory::Jungle,
            BiomeCategory::Mesa,
            BiomeCategory::Mushroom,
            BiomeCategory::Nether,
            BiomeCategory::None,
            BiomeCategory::Ocean,
            BiomeCategory::Plains,
            BiomeCategory::River,
            BiomeCategory::Savanna,
            BiomeCategory::Swamp,
            BiomeCategory::Taiga,
            BiomeCategory::TheEnd,
        ]
    }

    /// Categories that never take part in general matching: the placeholder
    /// category and the dimension-locked ones. Rules must name them
    /// explicitly to match against them.
    pub fn restricted() -> &'static [BiomeCategory] {
        &[
            BiomeCategory::Nether,
            BiomeCategory::TheEnd,
            BiomeCategory::None,
        ]
    }

    /// Whether this category is in the restricted set.
    pub fn is_restricted(&self) -> bool {
        matches!(
            self,
            BiomeCategory::Nether | BiomeCategory::TheEnd | BiomeCategory::None
        )
    }

    /// The canonical lowercase name used in persisted rules.
    pub fn name(&self) -> &'static str {
        match self {
            BiomeCategory::Beach => "beach",
            BiomeCategory::Desert => "desert",
            BiomeCategory::ExtremeHills => "extreme_hills",
            BiomeCategory::Forest => "forest",
            BiomeCategory::Icy => "icy",
            BiomeCategory::Jungle => "jungle",
            BiomeCategory::Mesa => "mesa",
            BiomeCategory::Mushroom => "mushroom",
            BiomeCategory::Nether => "nether",
            BiomeCategory::None => "none",
            BiomeCategory::Ocean => "ocean",
            BiomeCategory::Plains => "plains",
            BiomeCategory::River => "river",
            BiomeCategory::Savanna => "savanna",
            BiomeCategory::Swamp => "swamp",
            BiomeCategory::Taiga => "taiga",
            BiomeCategory::TheEnd => "the_end",
        }
    }

    /// Look up a category by name, case-insensitively.
    pub fn by_name(name: &str) -> Option<BiomeCategory> {
        let name = name.to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|category| category.name() == name)
    }
}

impl std::fmt::Display for BiomeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
