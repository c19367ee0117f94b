mod cycling_parameters;
mod profile_parameters;
mod profile_weighting;
mod vehicle_parameters;
mod walking_parameters;
mod wheelchair_parameters;

pub use cycling_parameters::CyclingParameters;
pub use profile_parameters::{ProfileParameters, ProfileParametersVariant};
pub use profile_weighting::ProfileWeighting;
pub use vehicle_parameters::VehicleParameters;
pub use walking_parameters::WalkingParameters;
pub use wheelchair_parameters::WheelchairParameters;
