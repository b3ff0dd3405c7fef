// ============================================================================
// ROUTE API - Contrato de los endpoints consumidos por el controlador
// ============================================================================
// El ViewModel depende de este trait, no de gloo-net, para poder probarlo
// fuera del navegador.
// ============================================================================

use crate::models::{
    AlgorithmInfoResponse, Coordinate, ReferencePointsResponse, RouteRequest, RouteResponse,
    SearchResponse,
};
use crate::services::error::ApiError;

// Todo corre en un único hilo (WASM), los futures no necesitan ser Send
#[allow(async_fn_in_trait)]
pub trait RouteApi {
    /// POST /api/buscar_endereco con texto libre
    async fn search_address(&self, query: &str) -> Result<SearchResponse, ApiError>;

    /// Reverse geocoding: mismo endpoint con query "lat, lng"
    async fn reverse_geocode(&self, coordinate: &Coordinate) -> Result<SearchResponse, ApiError> {
        self.search_address(&coordinate.reverse_query()).await
    }

    /// POST /api/calcular_rota
    async fn calculate_route(&self, request: &RouteRequest) -> Result<RouteResponse, ApiError>;

    /// GET /api/pontos_turisticos
    async fn reference_points(&self) -> Result<ReferencePointsResponse, ApiError>;

    /// GET /api/info_algoritmo
    async fn algorithm_info(&self) -> Result<AlgorithmInfoResponse, ApiError>;

    /// Abortar las peticiones ligadas a la selección actual (ruta, búsqueda)
    fn cancel_pending(&self) {}
}
