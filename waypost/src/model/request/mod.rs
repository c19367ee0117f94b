mod avoid_feature;
mod profile_params;
mod restrictions;
mod route_options;
mod route_request;
mod weightings;

pub use avoid_feature::AvoidFeature;
pub use profile_params::ProfileParams;
pub use restrictions::Restrictions;
pub use route_options::RouteRequestOptions;
pub use route_request::RouteRequest;
pub use weightings::Weightings;
