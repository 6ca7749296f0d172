use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a meal, always kept in its decimal string form.
///
/// The api sends ids as strings while older favorites lists stored them as
/// numbers, so both are accepted when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MealId(String);

impl MealId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for MealId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for MealId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl From<u64> for MealId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMealId {
    Text(String),
    Number(u64),
}

impl<'de> Deserialize<'de> for MealId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawMealId::deserialize(deserializer)? {
            RawMealId::Text(id) => MealId::new(id),
            RawMealId::Number(id) => MealId::from(id),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_number_and_string_are_equal() {
        let ids: Vec<MealId> = serde_json::from_str(r#"[52772, "52772", " 52771 "]"#).unwrap();

        assert_eq!(ids[0], ids[1]);
        assert_eq!(ids[2].as_str(), "52771");
    }

    #[test]
    fn test_serialize_as_string() {
        let ids = vec![MealId::from(52772), MealId::from("52771")];

        assert_eq!(serde_json::to_string(&ids).unwrap(), r#"["52772","52771"]"#);
    }

    #[test]
    fn test_reject_other_types() {
        assert!(serde_json::from_str::<MealId>("true").is_err());
        assert!(serde_json::from_str::<MealId>("-1").is_err());
    }
}
