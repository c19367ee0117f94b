use serde::{Deserialize, Serialize};

use waypost_core::model::profile_type::ProfileType;

use super::route_options::RouteRequestOptions;

/// an inbound routing request, reduced to the parts this layer translates.
/// coordinates and output options belong to the search engine's surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRequest {
    /// requested routing profile, e.g. "driving-car"
    pub profile: ProfileType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<RouteRequestOptions>,
}
