use serde::{Deserialize, Serialize};

/// soft preference factors influencing route cost. factors are continuous
/// in [0, 1]; steepness difficulty is a discrete level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Weightings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub green: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiet: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steepness_difficulty: Option<i32>,
}
