pub mod route_viewmodel;
pub mod map_viewmodel;

pub use route_viewmodel::RouteViewModel;
pub use map_viewmodel::MapViewModel;
