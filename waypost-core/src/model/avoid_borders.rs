use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize};

/// policy for crossing administrative borders. an absent policy is carried
/// as `Option::None` by callers and is distinct from [AvoidBorders::None].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AvoidBorders {
    All,
    Controlled,
    None,
}

impl AvoidBorders {
    /// maps a wire value to a policy. unrecognized values map to None.
    pub fn from_name(name: &str) -> AvoidBorders {
        match name {
            "all" => AvoidBorders::All,
            "controlled" => AvoidBorders::Controlled,
            _ => AvoidBorders::None,
        }
    }
}

impl<'de> Deserialize<'de> for AvoidBorders {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(AvoidBorders::from_name(&name))
    }
}

impl Display for AvoidBorders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvoidBorders::All => write!(f, "all"),
            AvoidBorders::Controlled => write!(f, "controlled"),
            AvoidBorders::None => write!(f, "none"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_known_names_map_to_their_policy() {
        assert_eq!(AvoidBorders::from_name("all"), AvoidBorders::All);
        assert_eq!(
            AvoidBorders::from_name("controlled"),
            AvoidBorders::Controlled
        );
        assert_eq!(AvoidBorders::from_name("none"), AvoidBorders::None);
    }

    #[test]
    fn test_unrecognized_name_maps_to_none() {
        assert_eq!(AvoidBorders::from_name("closed"), AvoidBorders::None);
    }

    #[test]
    fn test_deserialize_follows_from_name() {
        let all: AvoidBorders = serde_json::from_value(serde_json::json!("all"))
            .expect("border policy should deserialize");
        assert_eq!(all, AvoidBorders::All);
        let fallback: AvoidBorders = serde_json::from_value(serde_json::json!("anything"))
            .expect("unrecognized border policy should deserialize");
        assert_eq!(fallback, AvoidBorders::None);
    }
}
