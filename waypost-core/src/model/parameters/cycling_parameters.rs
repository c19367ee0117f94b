use serde::Serialize;

/// restrictions applicable to cycling profiles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CyclingParameters {
    /// steepest gradient the route may use, in percent
    pub maximum_gradient: Option<i32>,
    /// most difficult mtb:scale rating the route may use
    pub maximum_trail_difficulty: Option<i32>,
}

impl CyclingParameters {
    /// restriction names this variant accepts. fixed; never mutated.
    pub const VALID_RESTRICTIONS: &'static [&'static str] = &["gradient", "trail_difficulty"];
}
