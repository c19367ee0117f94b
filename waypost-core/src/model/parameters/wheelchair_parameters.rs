use serde::Serialize;
use uom::si::f64::Length;

/// restrictions applicable to the wheelchair profile. surface, track and
/// smoothness limits are stored as their graph-encoded integer values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct WheelchairParameters {
    pub surface_type: Option<i32>,
    pub track_type: Option<i32>,
    pub smoothness_type: Option<i32>,
    pub maximum_sloped_kerb: Option<Length>,
    /// steepest incline the route may use, in percent
    pub maximum_incline: Option<i32>,
    pub minimum_width: Option<Length>,
}

impl WheelchairParameters {
    /// restriction names this variant accepts. fixed; never mutated.
    pub const VALID_RESTRICTIONS: &'static [&'static str] = &[
        "surface_type",
        "track_type",
        "smoothness_type",
        "max_sloped_kerb",
        "max_incline",
        "min_width",
    ];
}
