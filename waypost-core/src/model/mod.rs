pub mod avoid_borders;
pub mod avoid_feature_flags;
pub mod heavy_vehicle_type;
pub mod load_characteristics;
pub mod parameters;
pub mod profile_type;
pub mod search_context;
pub mod wheelchair_types;

pub use avoid_borders::AvoidBorders;
pub use heavy_vehicle_type::HeavyVehicleType;
pub use profile_type::{ProfileCategory, ProfileType};
pub use search_context::RouteSearchContext;
