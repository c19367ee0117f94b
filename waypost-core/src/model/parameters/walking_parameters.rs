use serde::Serialize;

/// restrictions applicable to walking and hiking profiles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WalkingParameters {
    /// steepest gradient the route may use, in percent
    pub maximum_gradient: Option<i32>,
    /// most difficult sac_scale rating the route may use
    pub maximum_trail_difficulty: Option<i32>,
}

impl WalkingParameters {
    /// restriction names this variant accepts. fixed; never mutated.
    pub const VALID_RESTRICTIONS: &'static [&'static str] = &["gradient", "trail_difficulty"];
}
