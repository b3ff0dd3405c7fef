// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP.
// Cada request lleva un AbortController: se aborta por timeout y, si es de
// ámbito "selección", también cuando el usuario cambia origen/destino.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use web_sys::AbortController;
use crate::config::CONFIG;
use crate::models::{
    AlgorithmInfoResponse, Coordinate, ReferencePointsResponse, RouteRequest, RouteResponse,
    SearchRequest, SearchResponse,
};
use crate::services::error::ApiError;
use crate::services::route_api::RouteApi;
use crate::utils::constants::{
    API_ALGORITHM_INFO, API_CALCULATE_ROUTE, API_REFERENCE_POINTS, API_SEARCH_ADDRESS,
};

/// Ámbito de una petición en vuelo
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RequestScope {
    /// Se cancela cuando cambia la selección
    Selection,
    /// Solo se cancela por timeout
    Session,
}

struct InFlight {
    controller: AbortController,
    scope: RequestScope,
    _timeout: Timeout,
}

/// Cliente API - SOLO comunicación HTTP
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    timeout_ms: u32,
    in_flight: Rc<RefCell<HashMap<u64, InFlight>>>,
    next_id: Rc<Cell<u64>>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url(), CONFIG.network_timeout_ms())
    }

    pub fn with_base_url(base_url: &str, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_ms,
            in_flight: Rc::new(RefCell::new(HashMap::new())),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Registrar un AbortController para la petición (con timeout)
    fn begin(&self, scope: RequestScope) -> Result<(u64, AbortController), ApiError> {
        let controller = AbortController::new()
            .map_err(|e| ApiError::Build(format!("AbortController: {:?}", e)))?;

        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));

        let timeout = {
            let controller = controller.clone();
            let timeout_ms = self.timeout_ms;
            Timeout::new(timeout_ms, move || {
                log::warn!("⏱️ Request #{} excedió {} ms, abortando", id, timeout_ms);
                controller.abort();
            })
        };

        self.in_flight.borrow_mut().insert(
            id,
            InFlight {
                controller: controller.clone(),
                scope,
                _timeout: timeout,
            },
        );
        Ok((id, controller))
    }

    /// Liberar el registro (el Timeout se cancela al hacer drop)
    fn finish(&self, id: u64) {
        self.in_flight.borrow_mut().remove(&id);
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        body: Option<&impl serde::Serialize>,
        scope: RequestScope,
    ) -> Result<T, ApiError> {
        let (id, controller) = self.begin(scope)?;
        let signal = controller.signal();
        let builder = builder.abort_signal(Some(&signal));

        let result = async move {
            let response = match body {
                Some(body) => builder.json(body)
                    .map_err(|e| ApiError::Build(e.to_string()))?
                    .send()
                    .await?,
                None => builder.send().await?,
            };
            Self::read_json::<T>(response).await
        }
        .await;

        self.finish(id);
        result
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            return Err(ApiError::Http {
                status: response.status(),
                status_text: response.status_text(),
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteApi for ApiClient {
    async fn search_address(&self, query: &str) -> Result<SearchResponse, ApiError> {
        log::info!("🔍 Buscando endereço: {}", query);
        let request = SearchRequest { query: query.to_string() };
        let response: SearchResponse = self
            .send(Request::post(&self.url(API_SEARCH_ADDRESS)), Some(&request), RequestScope::Selection)
            .await?;
        log::info!("✅ Busca concluída: {} resultado(s)", response.results.len());
        Ok(response)
    }

    /// El nombre se aplica solo si el extremo no se movió, así que no se aborta
    /// cuando cambia la selección
    async fn reverse_geocode(&self, coordinate: &Coordinate) -> Result<SearchResponse, ApiError> {
        let request = SearchRequest { query: coordinate.reverse_query() };
        self.send(Request::post(&self.url(API_SEARCH_ADDRESS)), Some(&request), RequestScope::Session)
            .await
    }

    async fn calculate_route(&self, request: &RouteRequest) -> Result<RouteResponse, ApiError> {
        log::info!(
            "🗺️ Calculando rota {}: ({}, {}) -> ({}, {})",
            request.mode.as_str(),
            request.origin_lat,
            request.origin_lng,
            request.destination_lat,
            request.destination_lng
        );
        let response: RouteResponse = self
            .send(Request::post(&self.url(API_CALCULATE_ROUTE)), Some(request), RequestScope::Selection)
            .await?;
        if response.success {
            log::info!(
                "✅ Rota recebida: {} coordenadas, {:.0} m, {} nós",
                response.path.len(),
                response.distance_m,
                response.nos_count
            );
        } else {
            log::warn!("⚠️ Servidor recusou a rota: {:?}", response.failure_message());
        }
        Ok(response)
    }

    async fn reference_points(&self) -> Result<ReferencePointsResponse, ApiError> {
        log::info!("📍 Carregando pontos de referência");
        self.send(Request::get(&self.url(API_REFERENCE_POINTS)), None::<&()>, RequestScope::Session)
            .await
    }

    async fn algorithm_info(&self) -> Result<AlgorithmInfoResponse, ApiError> {
        log::info!("ℹ️ Carregando informações do algoritmo");
        self.send(Request::get(&self.url(API_ALGORITHM_INFO)), None::<&()>, RequestScope::Session)
            .await
    }

    fn cancel_pending(&self) {
        let mut in_flight = self.in_flight.borrow_mut();
        let before = in_flight.len();
        in_flight.retain(|_, request| {
            if request.scope == RequestScope::Selection {
                request.controller.abort();
                false
            } else {
                true
            }
        });
        let aborted = before - in_flight.len();
        if aborted > 0 {
            log::info!("🛑 {} request(s) abortada(s) por mudança de seleção", aborted);
        }
    }
}
