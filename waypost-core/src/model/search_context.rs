use geo::Polygon;
use serde::Serialize;

use super::avoid_borders::AvoidBorders;
use super::heavy_vehicle_type::HeavyVehicleType;
use super::parameters::ProfileParameters;
use super::profile_type::ProfileType;

/// the search-ready representation of a translated routing request: the
/// resolved profile, its validated parameters, and every avoidance input
/// in the form a search engine consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSearchContext {
    pub profile: ProfileType,
    /// resolved vehicle classification; `Unknown` when the request named none
    pub vehicle_type: HeavyVehicleType,
    pub parameters: ProfileParameters,
    /// combined avoid feature bits, 0 when no feature was requested
    pub avoid_features: u32,
    /// border crossing policy; `None` when the request left it unset
    pub avoid_borders: Option<AvoidBorders>,
    /// simple polygons the route must not enter, in request order
    pub avoid_areas: Vec<Polygon<f64>>,
}
