use serde::{Deserialize, Serialize};

use super::restrictions::Restrictions;
use super::weightings::Weightings;

/// profile-specific request parameters: hard restrictions and soft
/// weighting preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<Restrictions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weightings: Option<Weightings>,
}
