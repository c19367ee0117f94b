use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::parameters::{
    CyclingParameters, VehicleParameters, WalkingParameters, WheelchairParameters,
};

/// routing profile requested by the caller. resolved once per request and
/// immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileType {
    DrivingCar,
    DrivingHgv,
    CyclingRegular,
    CyclingRoad,
    CyclingMountain,
    CyclingElectric,
    FootWalking,
    FootHiking,
    Wheelchair,
}

/// closed set of profile categories used to dispatch parameter conversion.
/// every profile type resolves to exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileCategory {
    Driving,
    HeavyVehicle,
    Cycling,
    Walking,
    Wheelchair,
}

impl ProfileType {
    pub fn category(&self) -> ProfileCategory {
        match self {
            ProfileType::DrivingCar => ProfileCategory::Driving,
            ProfileType::DrivingHgv => ProfileCategory::HeavyVehicle,
            ProfileType::CyclingRegular
            | ProfileType::CyclingRoad
            | ProfileType::CyclingMountain
            | ProfileType::CyclingElectric => ProfileCategory::Cycling,
            ProfileType::FootWalking | ProfileType::FootHiking => ProfileCategory::Walking,
            ProfileType::Wheelchair => ProfileCategory::Wheelchair,
        }
    }

    /// name of this profile on the wire and in error messages
    pub fn name(&self) -> &'static str {
        match self {
            ProfileType::DrivingCar => "driving-car",
            ProfileType::DrivingHgv => "driving-hgv",
            ProfileType::CyclingRegular => "cycling-regular",
            ProfileType::CyclingRoad => "cycling-road",
            ProfileType::CyclingMountain => "cycling-mountain",
            ProfileType::CyclingElectric => "cycling-electric",
            ProfileType::FootWalking => "foot-walking",
            ProfileType::FootHiking => "foot-hiking",
            ProfileType::Wheelchair => "wheelchair",
        }
    }
}

impl ProfileCategory {
    /// restriction names accepted by the parameter variant of this
    /// category. fixed per category and never mutated at runtime.
    pub fn valid_restrictions(&self) -> &'static [&'static str] {
        match self {
            ProfileCategory::Driving => &[],
            ProfileCategory::HeavyVehicle => VehicleParameters::VALID_RESTRICTIONS,
            ProfileCategory::Cycling => CyclingParameters::VALID_RESTRICTIONS,
            ProfileCategory::Walking => WalkingParameters::VALID_RESTRICTIONS,
            ProfileCategory::Wheelchair => WheelchairParameters::VALID_RESTRICTIONS,
        }
    }
}

impl Display for ProfileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ProfileType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "driving-car" => Ok(ProfileType::DrivingCar),
            "driving-hgv" => Ok(ProfileType::DrivingHgv),
            "cycling-regular" => Ok(ProfileType::CyclingRegular),
            "cycling-road" => Ok(ProfileType::CyclingRoad),
            "cycling-mountain" => Ok(ProfileType::CyclingMountain),
            "cycling-electric" => Ok(ProfileType::CyclingElectric),
            "foot-walking" => Ok(ProfileType::FootWalking),
            "foot-hiking" => Ok(ProfileType::FootHiking),
            "wheelchair" => Ok(ProfileType::Wheelchair),
            _ => Err(format!("unknown routing profile '{s}'")),
        }
    }
}

impl Display for ProfileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileCategory::Driving => write!(f, "driving"),
            ProfileCategory::HeavyVehicle => write!(f, "heavy_vehicle"),
            ProfileCategory::Cycling => write!(f, "cycling"),
            ProfileCategory::Walking => write!(f, "walking"),
            ProfileCategory::Wheelchair => write!(f, "wheelchair"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_each_profile_resolves_one_category() {
        let expected = [
            (ProfileType::DrivingCar, ProfileCategory::Driving),
            (ProfileType::DrivingHgv, ProfileCategory::HeavyVehicle),
            (ProfileType::CyclingRegular, ProfileCategory::Cycling),
            (ProfileType::CyclingRoad, ProfileCategory::Cycling),
            (ProfileType::CyclingMountain, ProfileCategory::Cycling),
            (ProfileType::CyclingElectric, ProfileCategory::Cycling),
            (ProfileType::FootWalking, ProfileCategory::Walking),
            (ProfileType::FootHiking, ProfileCategory::Walking),
            (ProfileType::Wheelchair, ProfileCategory::Wheelchair),
        ];
        for (profile, category) in expected {
            assert_eq!(profile.category(), category);
        }
    }

    #[test]
    fn test_name_round_trip() {
        let profiles = [
            ProfileType::DrivingCar,
            ProfileType::DrivingHgv,
            ProfileType::CyclingRegular,
            ProfileType::FootWalking,
            ProfileType::Wheelchair,
        ];
        for profile in profiles {
            let parsed: ProfileType = profile
                .name()
                .parse()
                .expect("profile name should parse back to its type");
            assert_eq!(parsed, profile);
        }
    }

    #[test]
    fn test_unknown_profile_name_fails() {
        let result: Result<ProfileType, String> = "driving-hovercraft".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_names_match_wire_names() {
        let value = serde_json::to_value(ProfileType::DrivingHgv)
            .expect("profile type should serialize");
        assert_eq!(value, serde_json::json!("driving-hgv"));
        let parsed: ProfileType = serde_json::from_value(serde_json::json!("foot-walking"))
            .expect("wire name should deserialize");
        assert_eq!(parsed, ProfileType::FootWalking);
    }

    #[test]
    fn test_driving_category_accepts_no_restrictions() {
        assert!(ProfileCategory::Driving.valid_restrictions().is_empty());
    }
}
