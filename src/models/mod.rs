pub mod coordinate;
pub mod transport;
pub mod route;
pub mod geocoding;
pub mod reference_point;
pub mod algorithm;
pub mod notification;

pub use coordinate::Coordinate;
pub use transport::TransportMode;
pub use route::{RouteRequest, RouteResponse, RouteResult};
pub use geocoding::{SearchRequest, SearchResponse};
pub use reference_point::{ReferencePoint, ReferencePointsResponse};
pub use algorithm::{AlgorithmInfo, AlgorithmInfoResponse};
pub use notification::{Notification, NotificationKind};
