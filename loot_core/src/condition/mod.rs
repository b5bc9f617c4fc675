//! Loot conditions - rule objects attached to loot table entries.

use serde_json::{json, Value};

use world_rules::BiomeProvider;

use crate::predicate::{LocationPredicate, PredicateParseError};

/// A loot condition gating an entry on where the roll happens.
///
/// Persisted as a condition object whose `location` key holds the
/// predicate; a missing or null key means the condition always passes.
#[derive(Debug, Clone, PartialEq)]
pub struct BiomeCheck {
    location: LocationPredicate,
}

impl BiomeCheck {
    /// Create a check around an already built predicate.
    pub fn new(location: LocationPredicate) -> Self {
        Self { location }
    }

    /// The wrapped predicate.
    pub fn location(&self) -> &LocationPredicate {
        &self.location
    }

    /// Decode a check from a persisted condition object.
    pub fn from_json(condition: &Value) -> Result<Self, PredicateParseError> {
        let object = condition
            .as_object()
            .ok_or(PredicateParseError::UnexpectedShape {
                field: "condition",
                expected: "an object",
            })?;
        LocationPredicate::from_json(object.get("location")).map(Self::new)
    }

    /// The persisted JSON form of this check.
    pub fn to_json(&self) -> Value {
        json!({ "location": self.location.to_json() })
    }

    /// Test the roll location against the wrapped predicate.
    pub fn test(&self, world: &impl BiomeProvider, x: f64, y: f64, z: f64) -> bool {
        self.location.test(world, x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{LocationRule, RangeBound};
    use serde_json::json;
    use world_rules::{BiomeCategory, BiomeDictionary, StaticWorld};

    fn pond_world() -> StaticWorld {
        let mut dictionary = BiomeDictionary::new();
        let river = dictionary
            .register("river", [BiomeCategory::River])
            .unwrap();
        let mut world = StaticWorld::new(dictionary);
        world.set_fallback(river);
        world
    }

    #[test]
    fn test_condition_with_location() {
        let world = pond_world();
        let check = BiomeCheck::from_json(&json!({
            "location": {
                "position": {"y": {"min": 60, "max": 70}},
                "include": ["river"]
            }
        }))
        .unwrap();

        assert!(check.test(&world, 0.0, 65.0, 0.0));
        assert!(!check.test(&world, 0.0, 80.0, 0.0));
    }

    #[test]
    fn test_missing_location_always_passes() {
        let world = pond_world();
        let check = BiomeCheck::from_json(&json!({})).unwrap();

        assert_eq!(check.location(), &LocationPredicate::Unconstrained);
        assert!(check.test(&world, 12000.0, -300.0, 12000.0));
    }

    #[test]
    fn test_non_object_condition_is_rejected() {
        assert!(BiomeCheck::from_json(&json!("biome_check")).is_err());
        assert!(BiomeCheck::from_json(&Value::Null).is_err());
    }

    #[test]
    fn test_round_trip() {
        let check = BiomeCheck::new(LocationPredicate::Constrained(
            LocationRule::new()
                .with_x(RangeBound::between(-32.0, 32.0))
                .excluding(BiomeCategory::Ocean),
        ));

        let reparsed = BiomeCheck::from_json(&check.to_json()).unwrap();
        assert_eq!(reparsed, check);
    }

    #[test]
    fn test_unconstrained_round_trips_through_null() {
        let check = BiomeCheck::new(LocationPredicate::Unconstrained);
        let document = check.to_json();
        assert_eq!(document, json!({ "location": null }));

        let reparsed = BiomeCheck::from_json(&document).unwrap();
        assert_eq!(reparsed, check);
    }
}
