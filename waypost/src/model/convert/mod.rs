pub mod avoid_areas;
pub mod handler;

pub use handler::RouteRequestHandler;
