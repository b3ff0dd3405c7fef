// ============================================================================
// SERVICES - SOLO comunicación con el servidor de rutas
// ============================================================================

pub mod api_client;
pub mod error;
pub mod route_api;

pub use api_client::ApiClient;
pub use route_api::RouteApi;
