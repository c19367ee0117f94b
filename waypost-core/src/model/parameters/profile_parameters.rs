use serde::Serialize;

use super::{
    CyclingParameters, ProfileWeighting, VehicleParameters, WalkingParameters,
    WheelchairParameters,
};

/// validated, profile-specific routing parameters assembled from a request.
/// owned by the request that produced it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileParameters {
    pub variant: ProfileParametersVariant,
    /// weighting adjustments in application order
    pub weightings: Vec<ProfileWeighting>,
}

/// the closed set of profile-specific parameter record shapes. profiles
/// outside the four restrictable categories carry the empty base variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "kind", content = "restrictions", rename_all = "snake_case")]
pub enum ProfileParametersVariant {
    #[default]
    Base,
    Cycling(CyclingParameters),
    Walking(WalkingParameters),
    Vehicle(VehicleParameters),
    Wheelchair(WheelchairParameters),
}

impl ProfileParameters {
    pub fn with_variant(variant: ProfileParametersVariant) -> ProfileParameters {
        ProfileParameters {
            variant,
            weightings: Vec::new(),
        }
    }

    /// appends a weighting adjustment, preserving caller order
    pub fn push_weighting(&mut self, weighting: ProfileWeighting) {
        self.weightings.push(weighting);
    }
}
