use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// an avoidance feature as named at the API boundary. validity against the
/// resolved profile is checked during conversion, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvoidFeature {
    Highways,
    Tollways,
    Ferries,
    Fords,
    Steps,
    UnpavedRoads,
    Tracks,
    Tunnels,
    Bridges,
    Borders,
}

impl AvoidFeature {
    /// name of this feature on the wire and in flag registry lookups
    pub fn name(&self) -> &'static str {
        match self {
            AvoidFeature::Highways => "highways",
            AvoidFeature::Tollways => "tollways",
            AvoidFeature::Ferries => "ferries",
            AvoidFeature::Fords => "fords",
            AvoidFeature::Steps => "steps",
            AvoidFeature::UnpavedRoads => "unpaved_roads",
            AvoidFeature::Tracks => "tracks",
            AvoidFeature::Tunnels => "tunnels",
            AvoidFeature::Bridges => "bridges",
            AvoidFeature::Borders => "borders",
        }
    }
}

impl Display for AvoidFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_wire_name_matches_display_name() {
        let feature: AvoidFeature = serde_json::from_value(serde_json::json!("unpaved_roads"))
            .expect("feature name should deserialize");
        assert_eq!(feature, AvoidFeature::UnpavedRoads);
        assert_eq!(feature.to_string(), "unpaved_roads");
    }
}
