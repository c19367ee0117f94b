use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// classification of a heavy vehicle. `Unknown` is the sentinel for
/// "not specified" and carries no attribute bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeavyVehicleType {
    Unknown,
    Goods,
    Hgv,
    Bus,
    Agricultural,
    Delivery,
    Forestry,
}

impl HeavyVehicleType {
    /// attribute bit for this vehicle type. `Unknown` carries none.
    pub fn flag(&self) -> u32 {
        match self {
            HeavyVehicleType::Unknown => 0,
            HeavyVehicleType::Goods => 1,
            HeavyVehicleType::Hgv => 1 << 1,
            HeavyVehicleType::Bus => 1 << 2,
            HeavyVehicleType::Agricultural => 1 << 3,
            HeavyVehicleType::Delivery => 1 << 4,
            HeavyVehicleType::Forestry => 1 << 5,
        }
    }

    /// maps a wire value to a vehicle type, falling back to `Unknown`
    pub fn from_name(name: &str) -> HeavyVehicleType {
        match name {
            "goods" => HeavyVehicleType::Goods,
            "hgv" => HeavyVehicleType::Hgv,
            "bus" => HeavyVehicleType::Bus,
            "agricultural" => HeavyVehicleType::Agricultural,
            "delivery" => HeavyVehicleType::Delivery,
            "forestry" => HeavyVehicleType::Forestry,
            _ => HeavyVehicleType::Unknown,
        }
    }

    pub fn is_unknown(&self) -> bool {
        *self == HeavyVehicleType::Unknown
    }
}

impl Display for HeavyVehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeavyVehicleType::Unknown => write!(f, "unknown"),
            HeavyVehicleType::Goods => write!(f, "goods"),
            HeavyVehicleType::Hgv => write!(f, "hgv"),
            HeavyVehicleType::Bus => write!(f, "bus"),
            HeavyVehicleType::Agricultural => write!(f, "agricultural"),
            HeavyVehicleType::Delivery => write!(f, "delivery"),
            HeavyVehicleType::Forestry => write!(f, "forestry"),
        }
    }
}
