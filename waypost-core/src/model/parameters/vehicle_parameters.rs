use serde::Serialize;
use uom::si::f64::{Length, Mass};

/// restrictions applicable to heavy vehicle profiles. dimension and load
/// fields are populated only for a known vehicle type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct VehicleParameters {
    pub length: Option<Length>,
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub weight: Option<Mass>,
    pub axle_load: Option<Mass>,
    /// combined load characteristic bits, unset when no bit applies
    pub load_characteristics: Option<u32>,
}

impl VehicleParameters {
    /// restriction names this variant accepts. fixed; never mutated.
    pub const VALID_RESTRICTIONS: &'static [&'static str] = &[
        "length",
        "width",
        "height",
        "weight",
        "axle_load",
        "hazardous_material",
    ];
}
