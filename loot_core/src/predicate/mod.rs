//! Location predicates - positional and biome-category rules for loot
//! conditions.
//!
//! A predicate combines three per-axis [`RangeBound`]s with biome category
//! include/exclude lists. Evaluation short-circuits on the coordinate
//! bounds before asking the world to classify the position, so rules that
//! only constrain position never touch biome data.

mod bounds;

pub use bounds::*;

use log::error;
use serde_json::{Map, Value};
use std::collections::HashSet;
use thiserror::Error;

use world_rules::{BiomeCategory, BiomeDictionary, BiomeId, BiomeProvider, BlockPos};

/// Errors raised while decoding a persisted predicate.
///
/// Unknown category *names* are not errors (see [`CategoryEntry`]); these
/// cover structural problems the rule author has to fix.
#[derive(Debug, Error)]
pub enum PredicateParseError {
    #[error("expected `{field}` to be {expected}")]
    UnexpectedShape {
        field: &'static str,
        expected: &'static str,
    },

    #[error("invalid `{axis}` bound: {source}")]
    InvalidBound {
        axis: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// A category reference as it appeared in a loot table.
///
/// Names that resolve against [`BiomeCategory`] become `Known`; anything
/// else is kept verbatim as `Unrecognized` so the rule still round-trips,
/// while never matching any registered biome.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryEntry {
    Known(BiomeCategory),
    Unrecognized(String),
}

impl CategoryEntry {
    /// The resolved category, if any.
    pub fn category(&self) -> Option<BiomeCategory> {
        match self {
            CategoryEntry::Known(category) => Some(*category),
            CategoryEntry::Unrecognized(_) => None,
        }
    }

    /// The name this entry persists under.
    pub fn name(&self) -> &str {
        match self {
            CategoryEntry::Known(category) => category.name(),
            CategoryEntry::Unrecognized(name) => name,
        }
    }
}

impl From<BiomeCategory> for CategoryEntry {
    fn from(category: BiomeCategory) -> Self {
        CategoryEntry::Known(category)
    }
}

/// A rule matching a location against coordinate bounds and biome
/// categories.
///
/// `Unconstrained` matches every location and persists as an explicit JSON
/// null; everything else carries a [`LocationRule`]. Predicates are
/// immutable once built and safe to share across concurrent evaluations.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationPredicate {
    Unconstrained,
    Constrained(LocationRule),
}

/// The constrained half of a [`LocationPredicate`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationRule {
    pub x: RangeBound,
    pub y: RangeBound,
    pub z: RangeBound,

    /// Categories a biome may belong to. Empty means every category
    /// except the restricted ones.
    pub include: Vec<CategoryEntry>,

    /// Categories that disqualify a biome even when included.
    pub exclude: Vec<CategoryEntry>,

    /// When set, a biome must belong to every included category at once
    /// rather than at least one.
    pub and: bool,
}

impl LocationRule {
    /// Create an empty rule: unbounded axes, no category constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the x-axis bound.
    pub fn with_x(mut self, bound: RangeBound) -> Self {
        self.x = bound;
        self
    }

    /// Set the y-axis bound.
    pub fn with_y(mut self, bound: RangeBound) -> Self {
        self.y = bound;
        self
    }

    /// Set the z-axis bound.
    pub fn with_z(mut self, bound: RangeBound) -> Self {
        self.z = bound;
        self
    }

    /// Add a category to the include list.
    pub fn including(mut self, category: BiomeCategory) -> Self {
        self.include.push(CategoryEntry::Known(category));
        self
    }

    /// Add a category to the exclude list.
    pub fn excluding(mut self, category: BiomeCategory) -> Self {
        self.exclude.push(CategoryEntry::Known(category));
        self
    }

    /// Require membership in every included category.
    pub fn with_and(mut self, and: bool) -> Self {
        self.and = and;
        self
    }

    /// Test a point against this rule. Axis bounds are checked in x, y, z
    /// order and any rejection returns before the biome lookup.
    pub fn test(&self, world: &impl BiomeProvider, x: f64, y: f64, z: f64) -> bool {
        if !self.x.test(x) {
            return false;
        }
        if !self.y.test(y) {
            return false;
        }
        if !self.z.test(z) {
            return false;
        }
        let pos = BlockPos::containing(x, y, z);
        match world.biome_at(pos) {
            Some(biome) => self.valid_biomes(world.dictionary()).contains(&biome),
            None => false,
        }
    }

    /// The biomes satisfying this rule's category configuration.
    ///
    /// An empty include list stands for every category, so a rule that
    /// only constrains position (or only excludes) still matches regular
    /// biomes. Restricted categories are stripped from the result unless
    /// the rule names one of them in `include`.
    pub fn valid_biomes(&self, dictionary: &BiomeDictionary) -> HashSet<BiomeId> {
        let explicit_restricted = self
            .include
            .iter()
            .filter_map(CategoryEntry::category)
            .any(|category| category.is_restricted());

        let mut include = self.include.clone();
        if include.is_empty() {
            include.extend(
                BiomeCategory::all()
                    .iter()
                    .copied()
                    .map(CategoryEntry::Known),
            );
        }

        let mut biomes: HashSet<BiomeId> = HashSet::new();
        for entry in &include {
            if let Some(category) = entry.category() {
                biomes.extend(dictionary.members_of(category));
            }
        }

        if self.and {
            // Intersection semantics; an unrecognized entry has no
            // members, so its presence empties the set.
            biomes.retain(|id| {
                include.iter().all(|entry| match entry.category() {
                    Some(category) => dictionary.has_category(*id, category),
                    None => false,
                })
            });
        }

        for entry in &self.exclude {
            if let Some(category) = entry.category() {
                for id in dictionary.members_of(category) {
                    biomes.remove(&id);
                }
            }
        }
        if !explicit_restricted {
            for category in BiomeCategory::restricted() {
                for id in dictionary.members_of(*category) {
                    biomes.remove(&id);
                }
            }
        }

        biomes
    }

    /// The persisted JSON form of this rule.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        if !self.x.is_unbounded() || !self.y.is_unbounded() || !self.z.is_unbounded() {
            let mut position = Map::new();
            for (axis, bound) in [("x", &self.x), ("y", &self.y), ("z", &self.z)] {
                if !bound.is_unbounded() {
                    position.insert(axis.to_string(), bound.to_json());
                }
            }
            object.insert("position".to_string(), Value::Object(position));
        }
        for (field, entries) in [("include", &self.include), ("exclude", &self.exclude)] {
            if !entries.is_empty() {
                let names = entries
                    .iter()
                    .map(|entry| Value::String(entry.name().to_string()))
                    .collect();
                object.insert(field.to_string(), Value::Array(names));
            }
        }
        object.insert("and".to_string(), Value::Bool(self.and));
        Value::Object(object)
    }
}

impl LocationPredicate {
    /// Test a point. `Unconstrained` matches without touching the world.
    pub fn test(&self, world: &impl BiomeProvider, x: f64, y: f64, z: f64) -> bool {
        match self {
            LocationPredicate::Unconstrained => true,
            LocationPredicate::Constrained(rule) => rule.test(world, x, y, z),
        }
    }

    /// Decode a persisted predicate. Absent or null input is the
    /// unconstrained predicate.
    ///
    /// Category names are matched case-insensitively; names that resolve
    /// to no category are reported through the log and carried as
    /// [`CategoryEntry::Unrecognized`] rather than failing the rule.
    pub fn from_json(element: Option<&Value>) -> Result<Self, PredicateParseError> {
        let Some(element) = element else {
            return Ok(LocationPredicate::Unconstrained);
        };
        if element.is_null() {
            return Ok(LocationPredicate::Unconstrained);
        }
        let location = element
            .as_object()
            .ok_or(PredicateParseError::UnexpectedShape {
                field: "location",
                expected: "an object or null",
            })?;

        let position = match location.get("position") {
            None => None,
            Some(Value::Object(map)) => Some(map),
            Some(_) => {
                return Err(PredicateParseError::UnexpectedShape {
                    field: "position",
                    expected: "an object",
                })
            }
        };
        let x = parse_axis(position, "x")?;
        let y = parse_axis(position, "y")?;
        let z = parse_axis(position, "z")?;

        let include = parse_categories(location.get("include"), "include")?;
        let exclude = parse_categories(location.get("exclude"), "exclude")?;

        let and = match location.get("and") {
            None => false,
            Some(Value::Bool(and)) => *and,
            Some(_) => {
                return Err(PredicateParseError::UnexpectedShape {
                    field: "and",
                    expected: "a boolean",
                })
            }
        };

        Ok(LocationPredicate::Constrained(LocationRule {
            x,
            y,
            z,
            include,
            exclude,
            and,
        }))
    }

    /// The persisted JSON form. The unconstrained predicate is an explicit
    /// null so that `from_json` reproduces it exactly.
    pub fn to_json(&self) -> Value {
        match self {
            LocationPredicate::Unconstrained => Value::Null,
            LocationPredicate::Constrained(rule) => rule.to_json(),
        }
    }
}

fn parse_axis(
    position: Option<&Map<String, Value>>,
    axis: &'static str,
) -> Result<RangeBound, PredicateParseError> {
    match position.and_then(|map| map.get(axis)) {
        None => Ok(RangeBound::UNBOUNDED),
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|source| PredicateParseError::InvalidBound { axis, source }),
    }
}

fn parse_categories(
    value: Option<&Value>,
    field: &'static str,
) -> Result<Vec<CategoryEntry>, PredicateParseError> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };
    let entries = value
        .as_array()
        .ok_or(PredicateParseError::UnexpectedShape {
            field,
            expected: "an array of category names",
        })?;
    let mut list = Vec::with_capacity(entries.len());
    for entry in entries {
        let name = entry
            .as_str()
            .ok_or(PredicateParseError::UnexpectedShape {
                field,
                expected: "an array of category names",
            })?
            .to_lowercase();
        match BiomeCategory::by_name(&name) {
            Some(category) => list.push(CategoryEntry::Known(category)),
            None => {
                error!("Failed to {field} Biome Category: {name}. Please check your loot tables");
                list.push(CategoryEntry::Unrecognized(name));
            }
        }
    }
    Ok(list)
}
