use serde::{Deserialize, Serialize};
use serde_json::Value;

use waypost_core::model::avoid_borders::AvoidBorders;
use waypost_core::model::heavy_vehicle_type::HeavyVehicleType;

use super::avoid_feature::AvoidFeature;
use super::profile_params::ProfileParams;

/// optional routing behavior adjustments carried by a request. every field
/// distinguishes "not specified" from an explicit value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteRequestOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avoid_features: Option<Vec<AvoidFeature>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avoid_borders: Option<AvoidBorders>,
    /// GeoJSON polygon or multipolygon, kept loose until geometry conversion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avoid_polygons: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<HeavyVehicleType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_params: Option<ProfileParams>,
}
