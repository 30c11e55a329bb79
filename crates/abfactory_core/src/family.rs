//! Product family definitions.

use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::FactoryError;

/// Supported product families.
///
/// A family is a matched set of variants: every product a family's factory
/// creates reports the same `Family`.
///
/// Serialized as `as_str()`; deserialized through `FromStr`, so config files
/// accept the same spellings as the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub enum Family {
    #[default]
    Family1,
    Family2,
}

impl Family {
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Family1 => "family1",
            Family::Family2 => "family2",
        }
    }

    /// Variant index shared by every product in this family.
    pub fn index(&self) -> u8 {
        match self {
            Family::Family1 => 1,
            Family::Family2 => 2,
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Family::Family1, Family::Family2]
    }
}

impl FromStr for Family {
    type Err = FactoryError;

    /// Accepts `family1`, `family-1`, `family_1` or the bare index, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect();

        match normalized.as_str() {
            "family1" | "1" => Ok(Family::Family1),
            "family2" | "2" => Ok(Family::Family2),
            _ => Err(FactoryError::UnknownFamily(s.to_string())),
        }
    }
}

impl From<Family> for String {
    fn from(family: Family) -> Self {
        family.as_str().to_string()
    }
}

impl<'de> Deserialize<'de> for Family {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FamilyVisitor;

        impl Visitor<'_> for FamilyVisitor {
            type Value = Family;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a family name such as `family1` or a family index")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Family, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Family, E> {
                self.visit_str(&v.to_string())
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Family, E> {
                self.visit_str(&v.to_string())
            }
        }

        deserializer.deserialize_any(FamilyVisitor)
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_parse() {
        assert_eq!("family1".parse::<Family>().unwrap(), Family::Family1);
        assert_eq!("Family-2".parse::<Family>().unwrap(), Family::Family2);
        assert_eq!("2".parse::<Family>().unwrap(), Family::Family2);
        assert_eq!(" FAMILY_1 ".parse::<Family>().unwrap(), Family::Family1);
    }

    #[test]
    fn test_family_parse_unknown() {
        let err = "family3".parse::<Family>().unwrap_err();
        assert!(matches!(err, FactoryError::UnknownFamily(ref s) if s == "family3"));
    }

    #[test]
    fn test_family_display_and_index() {
        assert_eq!(Family::Family1.to_string(), "family1");
        assert_eq!(Family::Family2.index(), 2);
        assert_eq!(Family::all().len(), 2);
        assert_eq!(Family::default(), Family::Family1);
    }

    #[test]
    fn test_family_serde() {
        let yaml = serde_yaml::to_string(&Family::Family2).unwrap();
        assert_eq!(yaml.trim(), "family2");
        let parsed: Family = serde_yaml::from_str("family1").unwrap();
        assert_eq!(parsed, Family::Family1);
    }

    #[test]
    fn test_family_serde_accepts_parse_spellings() {
        for raw in ["family1", "Family2", "family-1", "FAMILY_2", "1", "2"] {
            let parsed: Family = serde_yaml::from_str(raw).unwrap();
            assert_eq!(parsed, raw.parse::<Family>().unwrap(), "spelling {:?}", raw);
        }
    }

    #[test]
    fn test_family_serde_rejects_unknown() {
        assert!(serde_yaml::from_str::<Family>("family3").is_err());
    }
}
