//! Biome dictionary - the category membership index.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use thiserror::Error;

use super::{Biome, BiomeCategory, BiomeId};

/// Errors raised while building a dictionary.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("biome `{0}` is already registered")]
    DuplicateBiome(String),

    #[error("unknown biome category `{0}`")]
    UnknownCategory(String),

    #[error("invalid dictionary document: {0}")]
    InvalidDocument(#[from] toml::de::Error),
}

/// Index of registered biomes and the categories they belong to.
///
/// A biome may belong to any number of categories. The dictionary keeps
/// both directions of the relation so that membership queries and
/// per-biome listings are cheap.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BiomeDictionary {
    /// All biomes stored by ID.
    biomes: HashMap<BiomeId, Biome>,

    /// Index: canonical name -> biome.
    by_name: HashMap<String, BiomeId>,

    /// Index: category -> biomes belonging to it.
    category_to_biomes: HashMap<BiomeCategory, HashSet<BiomeId>>,

    /// Reverse index: biome -> its categories.
    biome_to_categories: HashMap<BiomeId, HashSet<BiomeCategory>>,
}

/// On-disk dictionary document: a `[biomes]` table mapping each biome name
/// to the list of category names it belongs to.
#[derive(Debug, Deserialize)]
struct DictionaryDoc {
    #[serde(default)]
    biomes: BTreeMap<String, Vec<String>>,
}

impl BiomeDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a dictionary from a TOML document.
    ///
    /// Unlike loot-table parsing, dictionary documents are authored by the
    /// pack maintainer, so an unknown category name fails the whole load.
    pub fn from_toml_str(document: &str) -> Result<Self, DictionaryError> {
        let doc: DictionaryDoc = toml::from_str(document)?;
        let mut dictionary = Self::new();
        for (name, categories) in doc.biomes {
            let categories = categories
                .iter()
                .map(|raw| {
                    BiomeCategory::by_name(raw)
                        .ok_or_else(|| DictionaryError::UnknownCategory(raw.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            dictionary.register(name, categories)?;
        }
        Ok(dictionary)
    }

    /// Register a biome under the given categories.
    ///
    /// Returns the new biome's ID, or an error if the name is taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        categories: impl IntoIterator<Item = BiomeCategory>,
    ) -> Result<BiomeId, DictionaryError> {
        let biome = Biome::new(name);
        if self.by_name.contains_key(&biome.name) {
            return Err(DictionaryError::DuplicateBiome(biome.name));
        }
        let id = biome.id;
        self.by_name.insert(biome.name.clone(), id);
        self.biome_to_categories.insert(id, HashSet::new());
        self.biomes.insert(id, biome);
        for category in categories {
            self.add_category(id, category);
        }
        Ok(id)
    }

    /// Add a category to an already registered biome. Unknown IDs are
    /// ignored.
    pub fn add_category(&mut self, id: BiomeId, category: BiomeCategory) {
        if !self.biomes.contains_key(&id) {
            return;
        }
        self.category_to_biomes.entry(category).or_default().insert(id);
        self.biome_to_categories.entry(id).or_default().insert(category);
    }

    /// All biomes belonging to a category.
    pub fn members_of(&self, category: BiomeCategory) -> impl Iterator<Item = BiomeId> + '_ {
        self.category_to_biomes
            .get(&category)
            .into_iter()
            .flatten()
            .copied()
    }

    /// Whether a biome belongs to a category.
    pub fn has_category(&self, id: BiomeId, category: BiomeCategory) -> bool {
        self.category_to_biomes
            .get(&category)
            .is_some_and(|members| members.contains(&id))
    }

    /// The categories a biome belongs to.
    pub fn categories_of(&self, id: BiomeId) -> impl Iterator<Item = BiomeCategory> + '_ {
        self.biome_to_categories
            .get(&id)
            .into_iter()
            .flatten()
            .copied()
    }

    /// Get a biome by ID.
    pub fn biome(&self, id: BiomeId) -> Option<&Biome> {
        self.biomes.get(&id)
    }

    /// Get a biome by registry name, case-insensitively.
    pub fn biome_by_name(&self, name: &str) -> Option<&Biome> {
        self.by_name
            .get(&name.to_lowercase())
            .and_then(|id| self.biomes.get(id))
    }

    /// All registered biomes.
    pub fn all_biomes(&self) -> impl Iterator<Item = &Biome> {
        self.biomes.values()
    }

    /// The number of registered biomes.
    pub fn biome_count(&self) -> usize {
        self.biomes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut dictionary = BiomeDictionary::new();
        let id = dictionary
            .register("plains", [BiomeCategory::Plains])
            .unwrap();

        assert_eq!(dictionary.biome(id).unwrap().name, "plains");
        assert_eq!(dictionary.biome_by_name("Plains").unwrap().id, id);
        assert_eq!(dictionary.biome_count(), 1);
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let mut dictionary = BiomeDictionary::new();
        dictionary.register("swamp", [BiomeCategory::Swamp]).unwrap();

        let err = dictionary.register("Swamp", [BiomeCategory::Swamp]);
        assert!(matches!(err, Err(DictionaryError::DuplicateBiome(name)) if name == "swamp"));
    }

    #[test]
    fn test_membership_both_directions() {
        let mut dictionary = BiomeDictionary::new();
        let river = dictionary
            .register("frozen_river", [BiomeCategory::River, BiomeCategory::Icy])
            .unwrap();
        let ocean = dictionary
            .register("warm_ocean", [BiomeCategory::Ocean])
            .unwrap();

        assert!(dictionary.has_category(river, BiomeCategory::Icy));
        assert!(!dictionary.has_category(ocean, BiomeCategory::Icy));

        let icy: Vec<_> = dictionary.members_of(BiomeCategory::Icy).collect();
        assert_eq!(icy, vec![river]);

        let mut categories: Vec<_> = dictionary.categories_of(river).collect();
        categories.sort_by_key(|category| category.name());
        assert_eq!(categories, vec![BiomeCategory::Icy, BiomeCategory::River]);
    }

    #[test]
    fn test_members_of_empty_category() {
        let dictionary = BiomeDictionary::new();
        assert_eq!(dictionary.members_of(BiomeCategory::Mesa).count(), 0);
    }

    #[test]
    fn test_from_toml_str() {
        let dictionary = BiomeDictionary::from_toml_str(
            r#"
            [biomes]
            plains = ["plains"]
            frozen_river = ["river", "icy"]
            nether_wastes = ["nether"]
            "#,
        )
        .unwrap();

        assert_eq!(dictionary.biome_count(), 3);
        let frozen = dictionary.biome_by_name("frozen_river").unwrap();
        assert!(dictionary.has_category(frozen.id, BiomeCategory::River));
        assert_eq!(dictionary.members_of(BiomeCategory::Nether).count(), 1);
    }

    #[test]
    fn test_from_toml_str_unknown_category() {
        let err = BiomeDictionary::from_toml_str(
            r#"
            [biomes]
            plains = ["volcano"]
            "#,
        );
        assert!(matches!(err, Err(DictionaryError::UnknownCategory(name)) if name == "volcano"));
    }
}
