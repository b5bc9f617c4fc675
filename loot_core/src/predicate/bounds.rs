//! Numeric range bounds with an explicit unbounded state.

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Map, Value};

/// An inclusive interval over a floating value.
///
/// Either endpoint may be absent; a bound with neither endpoint matches
/// every value. The persisted form is a bare number for an exact bound,
/// an object with optional `min`/`max` otherwise, and null when unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RangeBound {
    min: Option<f64>,
    max: Option<f64>,
}

impl RangeBound {
    /// The bound that matches every value.
    pub const UNBOUNDED: RangeBound = RangeBound {
        min: None,
        max: None,
    };

    /// Create a bound from optional endpoints.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Values greater than or equal to `min`.
    pub fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Values less than or equal to `max`.
    pub fn at_most(max: f64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Values between `min` and `max`, inclusive.
    pub fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Exactly `value`.
    pub fn exact(value: f64) -> Self {
        Self {
            min: Some(value),
            max: Some(value),
        }
    }

    /// Whether this bound matches every value.
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// Test a value against the interval. Absent endpoints always pass.
    pub fn test(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }

    /// The persisted JSON form of this bound.
    pub fn to_json(&self) -> Value {
        match (self.min, self.max) {
            (None, None) => Value::Null,
            (Some(min), Some(max)) if min == max => json!(min),
            (min, max) => {
                let mut object = Map::new();
                if let Some(min) = min {
                    object.insert("min".to_string(), json!(min));
                }
                if let Some(max) = max {
                    object.insert("max".to_string(), json!(max));
                }
                Value::Object(object)
            }
        }
    }
}

impl Serialize for RangeBound {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RangeBound {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BoundVisitor;

        impl<'de> Visitor<'de> for BoundVisitor {
            type Value = RangeBound;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("a number, a min/max object, or null")
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<RangeBound, E> {
                Ok(RangeBound::exact(value))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<RangeBound, E> {
                Ok(RangeBound::exact(value as f64))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<RangeBound, E> {
                Ok(RangeBound::exact(value as f64))
            }

            fn visit_unit<E: de::Error>(self) -> Result<RangeBound, E> {
                Ok(RangeBound::UNBOUNDED)
            }

            fn visit_map<A>(self, mut map: A) -> Result<RangeBound, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut min = None;
                let mut max = None;
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "min" => min = map.next_value::<Option<f64>>()?,
                        "max" => max = map.next_value::<Option<f64>>()?,
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(RangeBound::new(min, max))
            }
        }

        deserializer.deserialize_any(BoundVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_matches_everything() {
        assert!(RangeBound::UNBOUNDED.test(0.0));
        assert!(RangeBound::UNBOUNDED.test(f64::MAX));
        assert!(RangeBound::UNBOUNDED.test(f64::MIN));
        assert!(RangeBound::UNBOUNDED.is_unbounded());
    }

    #[test]
    fn test_endpoints_are_inclusive() {
        let bound = RangeBound::between(60.0, 70.0);
        assert!(bound.test(60.0));
        assert!(bound.test(65.0));
        assert!(bound.test(70.0));
        assert!(!bound.test(59.9));
        assert!(!bound.test(70.1));
    }

    #[test]
    fn test_half_open_bounds() {
        assert!(RangeBound::at_least(10.0).test(10.0));
        assert!(RangeBound::at_least(10.0).test(1000.0));
        assert!(!RangeBound::at_least(10.0).test(9.0));

        assert!(RangeBound::at_most(10.0).test(-1000.0));
        assert!(!RangeBound::at_most(10.0).test(10.5));
    }

    #[test]
    fn test_exact() {
        let bound = RangeBound::exact(12.0);
        assert!(bound.test(12.0));
        assert!(!bound.test(12.1));
        assert!(!bound.test(11.9));
    }

    #[test]
    fn test_deserialize_number_as_exact() {
        let bound: RangeBound = serde_json::from_value(json!(12)).unwrap();
        assert_eq!(bound, RangeBound::exact(12.0));

        let bound: RangeBound = serde_json::from_value(json!(0.5)).unwrap();
        assert_eq!(bound, RangeBound::exact(0.5));
    }

    #[test]
    fn test_deserialize_object() {
        let bound: RangeBound = serde_json::from_value(json!({"min": 60, "max": 70})).unwrap();
        assert_eq!(bound, RangeBound::between(60.0, 70.0));

        let bound: RangeBound = serde_json::from_value(json!({"min": 60})).unwrap();
        assert_eq!(bound, RangeBound::at_least(60.0));

        let bound: RangeBound = serde_json::from_value(json!({})).unwrap();
        assert!(bound.is_unbounded());
    }

    #[test]
    fn test_deserialize_null_as_unbounded() {
        let bound: RangeBound = serde_json::from_value(Value::Null).unwrap();
        assert!(bound.is_unbounded());
    }

    #[test]
    fn test_json_forms() {
        assert_eq!(RangeBound::UNBOUNDED.to_json(), Value::Null);
        assert_eq!(RangeBound::exact(5.0).to_json(), json!(5.0));
        assert_eq!(
            RangeBound::between(60.0, 70.0).to_json(),
            json!({"min": 60.0, "max": 70.0})
        );
        assert_eq!(RangeBound::at_most(8.0).to_json(), json!({"max": 8.0}));
    }

    #[test]
    fn test_round_trip() {
        for bound in [
            RangeBound::UNBOUNDED,
            RangeBound::exact(3.0),
            RangeBound::at_least(-4.5),
            RangeBound::between(60.0, 70.0),
        ] {
            let parsed: RangeBound = serde_json::from_value(bound.to_json()).unwrap();
            assert_eq!(parsed, bound);
        }
    }
}
