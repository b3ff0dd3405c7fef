// ============================================================================
// ROUTE VIEWMODEL - Controlador de interacción con el mapa
// ============================================================================
// Protocolo de selección (origen -> destino -> confirmar reinicio), búsqueda de
// direcciones, cálculo de rutas por modo con caché, reset y modal del algoritmo.
// Muta AppState y notifica qué parte de la UI cambió; el mapa se actualiza
// a través de MapRenderer.
// ============================================================================

use crate::config::{MapConfig, CONFIG};
use crate::maps::{validate_coordinate, MapError, MapRenderer};
use crate::models::{
    Coordinate, NotificationKind, RouteRequest, RouteResult, TransportMode,
};
use crate::services::RouteApi;
use crate::state::{AlgorithmModal, AppState, Endpoint, IncrementalUpdate, SelectionPhase};
use crate::utils::constants::{SAMPLE_ROUTE_DESTINATION, SAMPLE_ROUTE_ORIGIN};
use crate::utils::i18n::{t, t_with, Language};
use crate::viewmodels::MapViewModel;

/// Resultado de un click en el mapa
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Se rellenó el primer hueco libre
    EndpointSet(Endpoint),
    /// Ambos estaban definidos, el usuario confirmó y el punto es el nuevo origen
    Restarted,
    /// Ambos estaban definidos y el usuario canceló: nada cambia
    Declined,
}

/// ViewModel de rutas - lógica de negocio + estado explícito
pub struct RouteViewModel<A: RouteApi, M: MapRenderer> {
    state: AppState,
    api: A,
    map: M,
}

impl<A: RouteApi, M: MapRenderer> RouteViewModel<A, M> {
    pub fn new(state: AppState, api: A, map: M) -> Self {
        Self { state, api, map }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[cfg(test)]
    pub fn map(&self) -> &M {
        &self.map
    }

    fn log_map_error(&self, action: &str, result: Result<(), MapError>) {
        if let Err(e) = result {
            log::warn!("⚠️ Mapa ({}): {}", action, e);
        }
    }

    fn notify_text(&self, kind: NotificationKind, key: &str) {
        self.state.show_notification(kind, t(key, self.state.language()));
    }

    // ========================================================================
    // INICIALIZACIÓN
    // ========================================================================

    /// Crear el mapa centrado en Maricá
    pub fn initialize_map(&self, container_id: &str, config: &MapConfig) -> Result<(), MapError> {
        self.map.initialize(container_id, config)
    }

    /// Cargar los puntos turísticos una sola vez
    pub async fn load_reference_points(&self) {
        match self.api.reference_points().await {
            Ok(response) if response.success => {
                log::info!("✅ {} pontos de referência carregados", response.points.len());
                let result = self.map.add_reference_points(&response.points, self.state.language());
                self.log_map_error("pontos de referência", result);
                self.state.set_reference_points(response.points);
            }
            Ok(response) => {
                log::warn!("⚠️ Servidor não retornou pontos: {:?}", response.message);
                self.notify_text(NotificationKind::Warning, "nota_erro_pontos");
            }
            Err(e) => {
                log::error!("❌ Erro ao carregar pontos: {}", e);
                self.notify_text(NotificationKind::Warning, "nota_erro_pontos");
            }
        }
    }

    // ========================================================================
    // PROTOCOLO DE SELECCIÓN
    // ========================================================================

    /// Click en el mapa. `confirm` se consulta solo si ambos extremos están definidos
    pub async fn handle_map_click<F>(&self, coordinate: Coordinate, confirm: F) -> ClickOutcome
    where
        F: FnOnce(&str) -> bool,
    {
        log::info!("🖱️ Click no mapa: ({}, {})", coordinate.lat, coordinate.lng);

        match self.state.selection.first_empty() {
            Some(endpoint) => {
                self.place_endpoint(endpoint, coordinate.clone());
                self.after_endpoint_change(endpoint, &coordinate).await;
                ClickOutcome::EndpointSet(endpoint)
            }
            None => {
                let question = t("confirmar_redefinir", self.state.language());
                if !confirm(&question) {
                    log::info!("↩️ Redefinição cancelada pelo usuário");
                    return ClickOutcome::Declined;
                }
                self.clear_all();
                self.place_endpoint(Endpoint::Origin, coordinate.clone());
                self.after_endpoint_change(Endpoint::Origin, &coordinate).await;
                ClickOutcome::Restarted
            }
        }
    }

    /// Parte síncrona de fijar un extremo: invalida rutas y peticiones, coloca el marcador
    fn place_endpoint(&self, endpoint: Endpoint, coordinate: Coordinate) {
        let lang = self.state.language();

        self.api.cancel_pending();
        self.invalidate_routes();

        let popup = MapViewModel::endpoint_popup_html(endpoint, &coordinate, lang);
        let result = self.map.show_endpoint(endpoint, &coordinate, &popup);
        self.log_map_error("marcador", result);

        self.state.selection.set(endpoint, coordinate);
        self.state.notify(IncrementalUpdate::Selection);

        let key = match (endpoint, self.state.selection.phase()) {
            (Endpoint::Origin, SelectionPhase::BothSet) => "nota_pontos_definidos",
            (Endpoint::Origin, _) => "nota_origem_definida",
            (Endpoint::Destination, SelectionPhase::BothSet) => "nota_destino_definido",
            (Endpoint::Destination, _) => "nota_destino_sem_origem",
        };
        self.notify_text(NotificationKind::Success, key);
    }

    /// Parte asíncrona: reverse geocoding y ruta salen a la vez.
    /// El nombre solo se muestra; la ruta no lo espera.
    async fn after_endpoint_change(&self, endpoint: Endpoint, coordinate: &Coordinate) {
        let naming = async {
            if coordinate.name.is_none() {
                self.resolve_name(endpoint, coordinate).await;
            }
        };
        let routing = async {
            let mode = self.state.routes.active_mode();
            if self.state.selection.phase() == SelectionPhase::BothSet
                && self.state.routes.cached(mode).is_none()
            {
                self.compute_route(mode).await;
            }
        };
        futures::join!(naming, routing);
    }

    /// Reverse geocoding: el fallo deja el punto sin nombre
    async fn resolve_name(&self, endpoint: Endpoint, coordinate: &Coordinate) {
        let name = match self.api.reverse_geocode(coordinate).await {
            Ok(response) => response.first_result().and_then(|r| r.to_coordinate().name),
            Err(e) => {
                log::warn!("⚠️ Reverse geocoding falhou: {}", e);
                None
            }
        };

        if let Some(name) = name {
            if self.state.selection.name_endpoint(endpoint, coordinate, &name) {
                log::info!("🏷️ {} = {}", endpoint.as_str(), name);
                self.state.notify(IncrementalUpdate::Selection);

                // Popups con el nombre nuevo
                if let Some(named) = self.state.selection.get(endpoint) {
                    let popup = MapViewModel::endpoint_popup_html(endpoint, &named, self.state.language());
                    let result = self.map.show_endpoint(endpoint, &named, &popup);
                    self.log_map_error("marcador", result);
                }
                if let Some(route) = self.state.routes.displayed_route() {
                    self.display_route(&route);
                }
            } else {
                log::debug!("🏷️ Nome descartado: {} mudou", endpoint.as_str());
            }
        }
    }

    /// Vaciar caché y quitar la polilínea (la selección va a cambiar)
    fn invalidate_routes(&self) {
        let had_routes = !self.state.routes.cached_routes().is_empty()
            || self.state.routes.displayed_route().is_some();
        self.state.routes.clear();
        if had_routes {
            let result = self.map.clear_route();
            self.log_map_error("limpar rota", result);
        }
        self.state.notify(IncrementalUpdate::RouteInfo);
        self.state.notify(IncrementalUpdate::RouteCards);
    }

    // ========================================================================
    // RUTAS
    // ========================================================================

    /// Calcular la ruta del modo activo (botón "Calcular rota")
    pub async fn calculate_route(&self) {
        self.compute_route(self.state.routes.active_mode()).await;
    }

    /// Una petición por modo y selección; el resultado se descarta si la selección cambió
    pub async fn compute_route(&self, mode: TransportMode) {
        let lang = self.state.language();
        let Some((origin, destination)) = self.state.selection.both() else {
            self.notify_text(NotificationKind::Warning, "nota_selecione_pontos");
            return;
        };

        let epoch = self.state.selection.epoch();
        if !self.state.routes.begin_request(mode, epoch) {
            log::debug!("⏳ Rota {} já está sendo calculada", mode.as_str());
            return;
        }

        self.state.begin_loading();
        let request = RouteRequest::new(&origin, &destination, mode);
        let result = self.api.calculate_route(&request).await;
        self.state.end_loading();
        self.state.routes.finish_request(mode, epoch);

        if !self.state.selection.is_current(epoch) {
            log::info!("🗑️ Resposta da rota {} descartada (seleção mudou)", mode.as_str());
            return;
        }

        match result {
            Ok(response) => match response.into_result(mode) {
                Ok(route) => {
                    self.state.routes.store(route.clone());
                    if self.state.routes.active_mode() == mode {
                        self.display_route(&route);
                    }
                    self.state.notify(IncrementalUpdate::RouteCards);
                }
                Err(message) => {
                    let message = message.unwrap_or_else(|| t("erro_rota_padrao", lang));
                    self.state.show_notification(
                        NotificationKind::Error,
                        t_with("erro_prefixo", lang, &message),
                    );
                }
            },
            Err(e) if e.is_aborted() => {
                log::warn!("⏱️ Rota {} abortada (tempo esgotado)", mode.as_str());
                self.notify_text(NotificationKind::Error, "nota_erro_calcular_rota");
            }
            Err(e) => {
                log::error!("❌ Erro ao calcular rota {}: {}", mode.as_str(), e);
                self.notify_text(NotificationKind::Error, "nota_erro_calcular_rota");
            }
        }
    }

    /// Dibujar una ruta cacheada y actualizar el panel de información
    fn display_route(&self, route: &RouteResult) {
        if let Some((origin, destination)) = self.state.selection.both() {
            let popup = MapViewModel::route_popup_html(route, &origin, &destination, self.state.language());
            let result = self.map.draw_route(route, &popup);
            self.log_map_error("desenhar rota", result);
        }
        self.state.routes.set_displayed(Some(route.mode));
        self.state.notify(IncrementalUpdate::RouteInfo);
        log::info!(
            "✅ Rota {}: {}, {} nós",
            route.mode.as_str(),
            route.distance_label(),
            route.node_count
        );
    }

    /// Cambiar modo de transporte (selector o tarjeta de comparación)
    pub async fn select_mode(&self, mode: TransportMode) {
        log::info!("🚦 Modo de transporte: {}", mode.as_str());
        self.state.routes.set_active_mode(mode);
        self.state.notify(IncrementalUpdate::TransportMode);

        if let Some(route) = self.state.routes.cached(mode) {
            self.display_route(&route);
            self.state.notify(IncrementalUpdate::RouteCards);
            return;
        }

        self.state.notify(IncrementalUpdate::RouteCards);
        if self.state.selection.phase() == SelectionPhase::BothSet {
            self.compute_route(mode).await;
        }
    }

    // ========================================================================
    // BÚSQUEDA DE DIRECCIONES
    // ========================================================================

    /// Texto tecleado en el input de búsqueda
    pub fn update_search_input(&self, endpoint: Endpoint, text: &str) {
        self.state.selection.set_input(endpoint, text);
    }

    /// Buscar el texto del input y fijar el extremo con el primer resultado
    pub async fn search_address(&self, endpoint: Endpoint) {
        let query = self.state.selection.input(endpoint).trim().to_string();
        if query.is_empty() {
            self.notify_text(NotificationKind::Warning, "nota_digite_endereco");
            return;
        }

        let epoch = self.state.selection.epoch();
        self.state.begin_loading();
        let result = self.api.search_address(&query).await;
        self.state.end_loading();

        if !self.state.selection.is_current(epoch) {
            log::info!("🗑️ Resultado da busca '{}' descartado (seleção mudou)", query);
            return;
        }

        match result {
            Ok(response) => match response.first_result() {
                Some(found) => {
                    let coordinate = found.to_coordinate();
                    if let Err(e) = validate_coordinate(&coordinate) {
                        log::warn!("⚠️ Resultado inválido para '{}': {}", query, e);
                        self.notify_text(NotificationKind::Error, "nota_endereco_nao_encontrado");
                        return;
                    }
                    log::info!("📍 '{}' -> ({}, {})", query, coordinate.lat, coordinate.lng);
                    let result = self.map.set_center(&coordinate, CONFIG.map_config.search_result_zoom);
                    self.log_map_error("centralizar", result);
                    self.place_endpoint(endpoint, coordinate.clone());
                    self.after_endpoint_change(endpoint, &coordinate).await;
                }
                None => {
                    log::warn!("⚠️ Nenhum resultado para '{}'", query);
                    self.notify_text(NotificationKind::Error, "nota_endereco_nao_encontrado");
                }
            },
            Err(e) => {
                log::error!("❌ Erro ao buscar endereço: {}", e);
                self.notify_text(NotificationKind::Error, "nota_erro_buscar_endereco");
            }
        }
    }

    // ========================================================================
    // PUNTOS DE REFERENCIA / RUTA DE EJEMPLO
    // ========================================================================

    /// "Selecionar" en el popup de un punto turístico
    pub async fn select_reference_point(&self, index: usize) {
        let Some(point) = self.state.reference_point(index) else {
            log::warn!("⚠️ Ponto de referência {} não existe", index);
            return;
        };

        match self.state.selection.first_empty() {
            Some(endpoint) => {
                let coordinate = point.coordinate();
                self.place_endpoint(endpoint, coordinate.clone());
                self.after_endpoint_change(endpoint, &coordinate).await;
            }
            None => self.notify_text(NotificationKind::Warning, "nota_pontos_ja_definidos"),
        }
    }

    /// Dos puntos fijos en Maricá y cálculo de la ruta
    pub async fn run_sample_route(&self) {
        let lang = self.state.language();
        log::info!("🧪 Rota de exemplo");

        self.clear_all();
        let origin = Coordinate::named(SAMPLE_ROUTE_ORIGIN.0, SAMPLE_ROUTE_ORIGIN.1, t("ponto_teste_a", lang));
        let destination = Coordinate::named(
            SAMPLE_ROUTE_DESTINATION.0,
            SAMPLE_ROUTE_DESTINATION.1,
            t("ponto_teste_b", lang),
        );
        self.place_endpoint(Endpoint::Origin, origin);
        self.place_endpoint(Endpoint::Destination, destination.clone());
        self.after_endpoint_change(Endpoint::Destination, &destination).await;
    }

    // ========================================================================
    // RESET
    // ========================================================================

    /// "Limpar mapa"
    pub fn reset(&self) {
        log::info!("🧹 Limpando mapa");
        self.clear_all();
        self.notify_text(NotificationKind::Info, "nota_mapa_limpo");
    }

    /// Marcadores, ruta, coordenadas, inputs, caché y peticiones de la selección
    fn clear_all(&self) {
        self.api.cancel_pending();
        for endpoint in [Endpoint::Origin, Endpoint::Destination] {
            if self.state.selection.get(endpoint).is_some() {
                let result = self.map.clear_endpoint(endpoint);
                self.log_map_error("remover marcador", result);
            }
        }
        self.invalidate_routes();
        self.state.selection.clear();
        self.state.notify(IncrementalUpdate::Selection);
    }

    // ========================================================================
    // MODAL DEL ALGORITMO / NOTIFICACIONES
    // ========================================================================

    pub async fn load_algorithm_info(&self) {
        let lang = self.state.language();
        self.state.set_algorithm_modal(AlgorithmModal::Loading);

        let modal = match self.api.algorithm_info().await {
            Ok(response) => match (response.success, response.info) {
                (true, Some(info)) => AlgorithmModal::Loaded(info),
                (_, _) => AlgorithmModal::Failed(
                    response.message.unwrap_or_else(|| t("erro_info_padrao", lang)),
                ),
            },
            Err(e) => {
                log::error!("❌ Erro ao carregar info do algoritmo: {}", e);
                AlgorithmModal::Failed(t("erro_conexao_detalhe", lang))
            }
        };

        // El usuario pudo cerrar el modal mientras cargaba
        if self.state.algorithm_modal() == AlgorithmModal::Loading {
            self.state.set_algorithm_modal(modal);
        }
    }

    pub fn close_algorithm_modal(&self) {
        self.state.set_algorithm_modal(AlgorithmModal::Hidden);
    }

    pub fn dismiss_notification(&self, id: uuid::Uuid) {
        self.state.dismiss_notification(id);
    }

    /// Cambiar idioma: re-render completo y popups de los puntos turísticos
    pub fn set_language(&self, lang: Language) {
        self.state.set_language(lang);
        let points = self.state.reference_points.borrow().clone();
        if !points.is_empty() {
            let result = self.map.add_reference_points(&points, lang);
            self.log_map_error("pontos de referência", result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::future::Future;
    use tokio::sync::oneshot;
    use crate::models::geocoding::SearchResult;
    use crate::models::reference_point::ReferencePointKind;
    use crate::models::{
        AlgorithmInfo, AlgorithmInfoResponse, ReferencePoint, ReferencePointsResponse,
        RouteResponse, SearchResponse,
    };
    use crate::services::error::ApiError;

    fn block_on<F: Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("tokio runtime")
            .block_on(future)
    }

    // ------------------------------------------------------------------------
    // Fakes
    // ------------------------------------------------------------------------

    #[derive(Default)]
    struct FakeApi {
        searches: RefCell<Vec<String>>,
        reverse_lookups: RefCell<Vec<String>>,
        route_requests: RefCell<Vec<RouteRequest>>,
        search_results: RefCell<HashMap<String, Result<SearchResponse, ApiError>>>,
        reverse_name: RefCell<Option<String>>,
        route_failure: RefCell<Option<Result<RouteResponse, ApiError>>>,
        points: RefCell<Option<Result<ReferencePointsResponse, ApiError>>>,
        algorithm: RefCell<Option<Result<AlgorithmInfoResponse, ApiError>>>,
        /// Se ejecuta dentro de calculate_route, con la petición "en vuelo"
        during_route: RefCell<Option<Box<dyn Fn()>>>,
        /// Igual, dentro de search_address
        during_search: RefCell<Option<Box<dyn Fn()>>>,
        /// El siguiente reverse geocoding no responde hasta que se suelte
        reverse_gate: RefCell<Option<oneshot::Receiver<()>>>,
        cancellations: Cell<usize>,
    }

    impl FakeApi {
        fn route_count(&self) -> usize {
            self.route_requests.borrow().len()
        }

        fn ok_route(mode: TransportMode) -> RouteResponse {
            let distance = match mode {
                TransportMode::Driving => 2349.0,
                TransportMode::Walking => 2100.0,
                TransportMode::Cycling => 2200.0,
            };
            RouteResponse {
                success: true,
                path: vec![[-22.9186, -42.8197], [-22.9193, -42.8189], [-22.92, -42.818]],
                distance_m: distance,
                nos_count: 37,
                mode: Some(mode),
                message: None,
                error: None,
            }
        }
    }

    impl RouteApi for FakeApi {
        async fn search_address(&self, query: &str) -> Result<SearchResponse, ApiError> {
            self.searches.borrow_mut().push(query.to_string());
            if let Some(hook) = self.during_search.borrow().as_ref() {
                hook();
            }
            self.search_results
                .borrow()
                .get(query)
                .cloned()
                .unwrap_or_else(|| Ok(SearchResponse::default()))
        }

        async fn reverse_geocode(&self, coordinate: &Coordinate) -> Result<SearchResponse, ApiError> {
            self.reverse_lookups.borrow_mut().push(coordinate.reverse_query());
            let gate = self.reverse_gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            let results = self
                .reverse_name
                .borrow()
                .iter()
                .map(|name| SearchResult {
                    lat: coordinate.lat,
                    lng: coordinate.lng,
                    name: Some(name.clone()),
                })
                .collect();
            Ok(SearchResponse { success: true, results, message: None })
        }

        async fn calculate_route(&self, request: &RouteRequest) -> Result<RouteResponse, ApiError> {
            self.route_requests.borrow_mut().push(request.clone());
            if let Some(hook) = self.during_route.borrow().as_ref() {
                hook();
            }
            match self.route_failure.borrow().clone() {
                Some(result) => result,
                None => Ok(Self::ok_route(request.mode)),
            }
        }

        async fn reference_points(&self) -> Result<ReferencePointsResponse, ApiError> {
            self.points
                .borrow()
                .clone()
                .unwrap_or_else(|| Err(ApiError::Network("offline".to_string())))
        }

        async fn algorithm_info(&self) -> Result<AlgorithmInfoResponse, ApiError> {
            self.algorithm
                .borrow()
                .clone()
                .unwrap_or_else(|| Err(ApiError::Network("offline".to_string())))
        }

        fn cancel_pending(&self) {
            self.cancellations.set(self.cancellations.get() + 1);
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    enum MapCall {
        ShowEndpoint(Endpoint),
        ClearEndpoint(Endpoint),
        DrawRoute(TransportMode),
        ClearRoute,
        Center,
        ReferencePoints(usize, Language),
    }

    #[derive(Default)]
    struct RecordingMap {
        calls: RefCell<Vec<MapCall>>,
    }

    impl RecordingMap {
        fn count(&self, call: &MapCall) -> usize {
            self.calls.borrow().iter().filter(|c| *c == call).count()
        }

        fn last_route(&self) -> Option<TransportMode> {
            self.calls.borrow().iter().rev().find_map(|c| match c {
                MapCall::DrawRoute(mode) => Some(*mode),
                _ => None,
            })
        }
    }

    impl MapRenderer for RecordingMap {
        fn initialize(&self, _container_id: &str, _config: &MapConfig) -> Result<(), MapError> {
            Ok(())
        }

        fn show_endpoint(&self, endpoint: Endpoint, _coordinate: &Coordinate, _popup_html: &str) -> Result<(), MapError> {
            self.calls.borrow_mut().push(MapCall::ShowEndpoint(endpoint));
            Ok(())
        }

        fn clear_endpoint(&self, endpoint: Endpoint) -> Result<(), MapError> {
            self.calls.borrow_mut().push(MapCall::ClearEndpoint(endpoint));
            Ok(())
        }

        fn draw_route(&self, route: &RouteResult, _popup_html: &str) -> Result<(), MapError> {
            self.calls.borrow_mut().push(MapCall::DrawRoute(route.mode));
            Ok(())
        }

        fn clear_route(&self) -> Result<(), MapError> {
            self.calls.borrow_mut().push(MapCall::ClearRoute);
            Ok(())
        }

        fn set_center(&self, _coordinate: &Coordinate, _zoom: f64) -> Result<(), MapError> {
            self.calls.borrow_mut().push(MapCall::Center);
            Ok(())
        }

        fn add_reference_points(&self, points: &[ReferencePoint], lang: Language) -> Result<(), MapError> {
            self.calls.borrow_mut().push(MapCall::ReferencePoints(points.len(), lang));
            Ok(())
        }
    }

    type TestViewModel = RouteViewModel<FakeApi, RecordingMap>;

    fn view_model() -> TestViewModel {
        RouteViewModel::new(AppState::new(Language::Pt), FakeApi::default(), RecordingMap::default())
    }

    fn origin() -> Coordinate {
        Coordinate::new(-22.9186, -42.8197)
    }

    fn destination() -> Coordinate {
        Coordinate::new(-22.92, -42.818)
    }

    fn never_asked(_: &str) -> bool {
        panic!("confirmation should not be requested");
    }

    fn with_both_points(vm: &TestViewModel) {
        block_on(vm.handle_map_click(origin(), never_asked));
        block_on(vm.handle_map_click(destination(), never_asked));
    }

    fn notification_text(vm: &TestViewModel) -> Option<String> {
        vm.state().current_notification().map(|n| n.message)
    }

    fn notification_kind(vm: &TestViewModel) -> Option<NotificationKind> {
        vm.state().current_notification().map(|n| n.kind)
    }

    // ------------------------------------------------------------------------
    // Protocolo de selección
    // ------------------------------------------------------------------------

    #[test]
    fn two_clicks_issue_exactly_one_route_request() {
        let vm = view_model();

        let first = block_on(vm.handle_map_click(origin(), never_asked));
        assert_eq!(first, ClickOutcome::EndpointSet(Endpoint::Origin));
        assert_eq!(vm.api().route_count(), 0);
        assert_eq!(notification_text(&vm).as_deref(), Some("🟢 Origem definida! Clique no destino."));

        let second = block_on(vm.handle_map_click(destination(), never_asked));
        assert_eq!(second, ClickOutcome::EndpointSet(Endpoint::Destination));
        assert_eq!(vm.api().route_count(), 1);

        let request = vm.api().route_requests.borrow()[0].clone();
        assert_eq!(request.mode, TransportMode::Driving);
        assert_eq!(request.origin_lat, -22.9186);
        assert_eq!(request.destination_lng, -42.818);

        assert_eq!(vm.map().last_route(), Some(TransportMode::Driving));
        assert!(vm.state().routes.cached(TransportMode::Driving).is_some());
        assert!(!vm.state().is_loading());
    }

    #[test]
    fn third_click_changes_nothing_until_confirmed() {
        let vm = view_model();
        with_both_points(&vm);
        let epoch = vm.state().selection.epoch();
        let asked = Cell::new(false);

        let outcome = block_on(vm.handle_map_click(Coordinate::new(-22.95, -42.9), |question| {
            asked.set(true);
            assert_eq!(question, "Deseja redefinir os pontos e calcular uma nova rota?");
            false
        }));

        assert!(asked.get());
        assert_eq!(outcome, ClickOutcome::Declined);
        assert!(vm.state().selection.is_current(epoch));
        assert_eq!(vm.state().selection.get(Endpoint::Origin), Some(origin()));
        assert_eq!(vm.state().routes.cached_routes().len(), 1);
        assert_eq!(vm.api().route_count(), 1);
    }

    #[test]
    fn confirmed_restart_makes_click_the_new_origin() {
        let vm = view_model();
        with_both_points(&vm);
        let restart_point = Coordinate::new(-22.95, -42.9);

        let outcome = block_on(vm.handle_map_click(restart_point.clone(), |_| true));

        assert_eq!(outcome, ClickOutcome::Restarted);
        assert_eq!(vm.state().selection.phase(), SelectionPhase::OriginSet);
        assert_eq!(vm.state().selection.get(Endpoint::Origin), Some(restart_point));
        assert!(vm.state().routes.cached_routes().is_empty());
        assert_eq!(vm.map().count(&MapCall::ClearEndpoint(Endpoint::Destination)), 1);
        assert_eq!(vm.api().route_count(), 1);
    }

    #[test]
    fn reverse_geocoding_names_the_clicked_point() {
        let vm = view_model();
        *vm.api().reverse_name.borrow_mut() = Some("Rua Abreu Rangel, Centro".to_string());

        block_on(vm.handle_map_click(origin(), never_asked));

        assert_eq!(vm.api().reverse_lookups.borrow().as_slice(), ["-22.9186, -42.8197"]);
        let named = vm.state().selection.get(Endpoint::Origin).and_then(|c| c.name);
        assert_eq!(named.as_deref(), Some("Rua Abreu Rangel, Centro"));
        assert_eq!(vm.state().selection.input(Endpoint::Origin), "Rua Abreu Rangel, Centro");
    }

    #[test]
    fn failed_reverse_lookup_leaves_point_unnamed() {
        let vm = view_model();
        block_on(vm.handle_map_click(origin(), never_asked));
        assert_eq!(vm.state().selection.get(Endpoint::Origin).and_then(|c| c.name), None);
        assert_eq!(vm.state().selection.phase(), SelectionPhase::OriginSet);
    }

    fn gate_next_reverse_lookup(vm: &TestViewModel) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        *vm.api().reverse_gate.borrow_mut() = Some(gate);
        release
    }

    #[test]
    fn route_is_requested_while_reverse_lookup_is_pending() {
        let vm = view_model();
        block_on(vm.handle_map_click(origin(), never_asked));
        *vm.api().reverse_name.borrow_mut() = Some("Rua Ribeiro de Almeida".to_string());
        let release = gate_next_reverse_lookup(&vm);

        block_on(async {
            let click = vm.handle_map_click(destination(), never_asked);
            let while_naming = async {
                tokio::task::yield_now().await;
                assert_eq!(vm.api().route_count(), 1);
                assert_eq!(vm.map().last_route(), Some(TransportMode::Driving));
                assert_eq!(vm.state().selection.get(Endpoint::Destination).and_then(|c| c.name), None);
                let _ = release.send(());
            };
            futures::join!(click, while_naming);
        });

        assert_eq!(vm.api().route_count(), 1);
        assert_eq!(vm.state().selection.input(Endpoint::Destination), "Rua Ribeiro de Almeida");
        // Marcador y polilínea se redibujan con el nombre
        assert_eq!(vm.map().count(&MapCall::ShowEndpoint(Endpoint::Destination)), 2);
        assert_eq!(vm.map().count(&MapCall::DrawRoute(TransportMode::Driving)), 2);
    }

    #[test]
    fn mode_fetched_during_reverse_lookup_is_not_requested_again() {
        let vm = view_model();
        block_on(vm.handle_map_click(origin(), never_asked));
        *vm.api().reverse_name.borrow_mut() = Some("Rua Ribeiro de Almeida".to_string());
        let release = gate_next_reverse_lookup(&vm);

        block_on(async {
            let click = vm.handle_map_click(destination(), never_asked);
            let switch_mode = async {
                tokio::task::yield_now().await;
                vm.select_mode(TransportMode::Walking).await;
                assert!(vm.state().routes.cached(TransportMode::Walking).is_some());
                let _ = release.send(());
            };
            futures::join!(click, switch_mode);
        });

        let modes: Vec<_> = vm.api().route_requests.borrow().iter().map(|r| r.mode).collect();
        assert_eq!(modes, vec![TransportMode::Driving, TransportMode::Walking]);
        assert_eq!(vm.state().routes.displayed_route().map(|r| r.mode), Some(TransportMode::Walking));
    }

    #[test]
    fn late_name_is_dropped_when_slot_was_replaced() {
        let vm = view_model();
        *vm.api().reverse_name.borrow_mut() = Some("Rua Abreu Rangel".to_string());
        vm.api().search_results.borrow_mut().insert(
            "Itaipuaçu".to_string(),
            Ok(SearchResponse {
                success: true,
                results: vec![SearchResult {
                    lat: -22.9636,
                    lng: -42.9817,
                    name: Some("Praia de Itaipuaçu, Maricá".to_string()),
                }],
                message: None,
            }),
        );
        let release = gate_next_reverse_lookup(&vm);

        block_on(async {
            let click = vm.handle_map_click(origin(), never_asked);
            let replace = async {
                tokio::task::yield_now().await;
                vm.update_search_input(Endpoint::Origin, "Itaipuaçu");
                vm.search_address(Endpoint::Origin).await;
                let _ = release.send(());
            };
            futures::join!(click, replace);
        });

        let current = vm.state().selection.get(Endpoint::Origin);
        assert_eq!(current.as_ref().map(|c| c.lat), Some(-22.9636));
        assert_eq!(current.and_then(|c| c.name).as_deref(), Some("Praia de Itaipuaçu, Maricá"));
        assert_eq!(vm.state().selection.input(Endpoint::Origin), "Praia de Itaipuaçu, Maricá");
        assert_eq!(vm.map().count(&MapCall::ShowEndpoint(Endpoint::Origin)), 2);
    }

    // ------------------------------------------------------------------------
    // Modos de transporte y caché
    // ------------------------------------------------------------------------

    #[test]
    fn cached_mode_is_redisplayed_without_network() {
        let vm = view_model();
        with_both_points(&vm);

        block_on(vm.select_mode(TransportMode::Walking));
        assert_eq!(vm.api().route_count(), 2);
        assert_eq!(vm.map().last_route(), Some(TransportMode::Walking));

        block_on(vm.select_mode(TransportMode::Driving));
        assert_eq!(vm.api().route_count(), 2);
        assert_eq!(vm.map().last_route(), Some(TransportMode::Driving));
        assert_eq!(vm.state().routes.displayed_route().map(|r| r.mode), Some(TransportMode::Driving));

        let modes: Vec<_> = vm.state().routes.cached_routes().iter().map(|r| r.mode).collect();
        assert_eq!(modes, vec![TransportMode::Driving, TransportMode::Walking]);
    }

    #[test]
    fn switching_mode_without_points_only_changes_selection() {
        let vm = view_model();
        block_on(vm.select_mode(TransportMode::Cycling));
        assert_eq!(vm.state().routes.active_mode(), TransportMode::Cycling);
        assert_eq!(vm.api().route_count(), 0);
        assert!(vm.state().current_notification().is_none());
    }

    #[test]
    fn route_for_active_mode_is_used_after_switch() {
        let vm = view_model();
        block_on(vm.select_mode(TransportMode::Cycling));
        with_both_points(&vm);

        assert_eq!(vm.api().route_count(), 1);
        assert_eq!(vm.api().route_requests.borrow()[0].mode, TransportMode::Cycling);
    }

    #[test]
    fn calculate_without_points_warns_and_sends_nothing() {
        let vm = view_model();
        block_on(vm.handle_map_click(origin(), never_asked));
        block_on(vm.calculate_route());

        assert_eq!(vm.api().route_count(), 0);
        assert_eq!(notification_kind(&vm), Some(NotificationKind::Warning));
        assert_eq!(notification_text(&vm).as_deref(), Some("⚠️ Por favor, selecione origem e destino!"));
    }

    #[test]
    fn server_failure_shows_message_and_keeps_cache() {
        let vm = view_model();
        with_both_points(&vm);
        *vm.api().route_failure.borrow_mut() = Some(Ok(RouteResponse {
            success: false,
            path: Vec::new(),
            distance_m: 0.0,
            nos_count: 0,
            mode: None,
            message: None,
            error: Some("Nó não encontrado".to_string()),
        }));

        block_on(vm.select_mode(TransportMode::Walking));

        assert_eq!(notification_kind(&vm), Some(NotificationKind::Error));
        assert_eq!(notification_text(&vm).as_deref(), Some("❌ Erro: Nó não encontrado"));
        assert!(vm.state().routes.cached(TransportMode::Walking).is_none());
        assert!(vm.state().routes.cached(TransportMode::Driving).is_some());
    }

    #[test]
    fn network_failure_shows_route_error() {
        let vm = view_model();
        *vm.api().route_failure.borrow_mut() = Some(Err(ApiError::Http {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        }));
        with_both_points(&vm);

        assert_eq!(notification_text(&vm).as_deref(), Some("❌ Erro ao calcular rota"));
        assert!(vm.state().routes.cached_routes().is_empty());
        assert!(!vm.state().is_loading());
    }

    #[test]
    fn stale_route_response_is_discarded() {
        let vm = view_model();
        with_both_points(&vm);
        let cancellations_before = vm.api().cancellations.get();

        // El usuario reinicia mientras la ruta "cycling" está en vuelo
        let state = vm.state().clone();
        *vm.api().during_route.borrow_mut() = Some(Box::new(move || {
            state.selection.set(Endpoint::Destination, Coordinate::new(-22.97, -42.95));
        }));
        block_on(vm.select_mode(TransportMode::Cycling));

        assert_eq!(vm.api().route_count(), 2);
        assert!(vm.state().routes.cached(TransportMode::Cycling).is_none());
        assert_eq!(vm.map().last_route(), Some(TransportMode::Driving));
        assert!(!vm.state().routes.is_pending(TransportMode::Cycling));

        // Un cambio real de selección aborta lo que quede en vuelo
        block_on(vm.handle_map_click(Coordinate::new(-22.9, -42.8), |_| true));
        assert!(vm.api().cancellations.get() > cancellations_before);
    }

    // ------------------------------------------------------------------------
    // Búsqueda
    // ------------------------------------------------------------------------

    #[test]
    fn empty_query_warns_without_request() {
        let vm = view_model();
        vm.update_search_input(Endpoint::Origin, "   ");
        block_on(vm.search_address(Endpoint::Origin));

        assert!(vm.api().searches.borrow().is_empty());
        assert_eq!(notification_text(&vm).as_deref(), Some("⚠️ Por favor, digite um endereço!"));
    }

    #[test]
    fn failed_search_keeps_previous_selection() {
        let vm = view_model();
        block_on(vm.handle_map_click(origin(), never_asked));
        let epoch = vm.state().selection.epoch();

        vm.update_search_input(Endpoint::Origin, "Rua Inexistente");
        block_on(vm.search_address(Endpoint::Origin));
        assert_eq!(notification_kind(&vm), Some(NotificationKind::Error));
        assert_eq!(notification_text(&vm).as_deref(), Some("❌ Endereço não encontrado em Maricá"));

        vm.api().search_results.borrow_mut().insert(
            "Centro".to_string(),
            Err(ApiError::Network("connection refused".to_string())),
        );
        vm.update_search_input(Endpoint::Origin, "Centro");
        block_on(vm.search_address(Endpoint::Origin));
        assert_eq!(notification_text(&vm).as_deref(), Some("❌ Erro ao buscar endereço"));

        assert!(vm.state().selection.is_current(epoch));
        assert_eq!(vm.state().selection.get(Endpoint::Origin), Some(origin()));
        assert_eq!(vm.map().count(&MapCall::Center), 0);
    }

    #[test]
    fn search_sets_named_destination_and_centers_map() {
        let vm = view_model();
        vm.api().search_results.borrow_mut().insert(
            "Praia de Ponta Negra".to_string(),
            Ok(SearchResponse {
                success: true,
                results: vec![SearchResult {
                    lat: -22.9563,
                    lng: -42.6929,
                    name: Some("Praia de Ponta Negra, Maricá".to_string()),
                }],
                message: None,
            }),
        );

        vm.update_search_input(Endpoint::Destination, "  Praia de Ponta Negra ");
        block_on(vm.search_address(Endpoint::Destination));

        assert_eq!(vm.api().searches.borrow().as_slice(), ["Praia de Ponta Negra"]);
        assert_eq!(vm.state().selection.phase(), SelectionPhase::DestinationSet);
        assert_eq!(vm.state().selection.input(Endpoint::Destination), "Praia de Ponta Negra, Maricá");
        assert!(vm.api().reverse_lookups.borrow().is_empty());
        assert_eq!(vm.map().count(&MapCall::Center), 1);

        // El siguiente click rellena el origen y calcula
        block_on(vm.handle_map_click(origin(), never_asked));
        assert_eq!(vm.state().selection.phase(), SelectionPhase::BothSet);
        assert_eq!(vm.api().route_count(), 1);
    }

    #[test]
    fn search_result_is_dropped_when_selection_changes_meanwhile() {
        let vm = view_model();
        vm.api().search_results.borrow_mut().insert(
            "Centro".to_string(),
            Ok(SearchResponse {
                success: true,
                results: vec![SearchResult {
                    lat: -22.9189,
                    lng: -42.8194,
                    name: Some("Centro, Maricá".to_string()),
                }],
                message: None,
            }),
        );
        let state = vm.state().clone();
        *vm.api().during_search.borrow_mut() = Some(Box::new(move || {
            state.selection.set(Endpoint::Origin, Coordinate::new(-22.95, -42.9));
        }));

        vm.update_search_input(Endpoint::Destination, "Centro");
        block_on(vm.search_address(Endpoint::Destination));

        assert_eq!(vm.state().selection.get(Endpoint::Destination), None);
        assert_eq!(vm.map().count(&MapCall::Center), 0);
        assert_eq!(vm.map().count(&MapCall::ShowEndpoint(Endpoint::Destination)), 0);
        assert!(vm.state().current_notification().is_none());
        assert!(!vm.state().is_loading());
    }

    #[test]
    fn out_of_range_search_result_is_reported_as_not_found() {
        let vm = view_model();
        vm.api().search_results.borrow_mut().insert(
            "Lugar Estranho".to_string(),
            Ok(SearchResponse {
                success: true,
                results: vec![SearchResult { lat: 200.0, lng: -42.8, name: None }],
                message: None,
            }),
        );
        block_on(vm.handle_map_click(origin(), never_asked));

        vm.update_search_input(Endpoint::Destination, "Lugar Estranho");
        block_on(vm.search_address(Endpoint::Destination));

        assert_eq!(notification_kind(&vm), Some(NotificationKind::Error));
        assert_eq!(notification_text(&vm).as_deref(), Some("❌ Endereço não encontrado em Maricá"));
        assert_eq!(vm.state().selection.phase(), SelectionPhase::OriginSet);
        assert_eq!(vm.map().count(&MapCall::Center), 0);
        assert_eq!(vm.api().route_count(), 0);
    }

    // ------------------------------------------------------------------------
    // Reset / ejemplo / puntos de referencia / modal
    // ------------------------------------------------------------------------

    #[test]
    fn reset_clears_markers_routes_and_inputs() {
        let vm = view_model();
        with_both_points(&vm);
        vm.update_search_input(Endpoint::Origin, "texto");

        vm.reset();

        assert_eq!(vm.state().selection.phase(), SelectionPhase::Empty);
        assert_eq!(vm.state().selection.input(Endpoint::Origin), "");
        assert_eq!(vm.state().selection.input(Endpoint::Destination), "");
        assert!(vm.state().routes.cached_routes().is_empty());
        assert!(vm.state().routes.displayed_route().is_none());
        assert_eq!(vm.map().count(&MapCall::ClearEndpoint(Endpoint::Origin)), 1);
        assert_eq!(vm.map().count(&MapCall::ClearEndpoint(Endpoint::Destination)), 1);
        assert!(vm.map().count(&MapCall::ClearRoute) >= 1);
        assert_eq!(
            notification_text(&vm).as_deref(),
            Some("🗺️ Mapa limpo! Selecione um novo ponto de origem.")
        );
    }

    #[test]
    fn sample_route_uses_fixed_points() {
        let vm = view_model();
        block_on(vm.run_sample_route());

        let request = vm.api().route_requests.borrow()[0].clone();
        assert_eq!((request.origin_lat, request.origin_lng), SAMPLE_ROUTE_ORIGIN);
        assert_eq!((request.destination_lat, request.destination_lng), SAMPLE_ROUTE_DESTINATION);
        assert_eq!(vm.api().route_count(), 1);
        assert!(vm.api().reverse_lookups.borrow().is_empty());
        assert_eq!(vm.state().selection.input(Endpoint::Origin), "Ponto de Teste A");
        assert_eq!(vm.state().selection.input(Endpoint::Destination), "Ponto de Teste B");
    }

    fn sample_points() -> ReferencePointsResponse {
        ReferencePointsResponse {
            success: true,
            points: vec![
                ReferencePoint {
                    name: "Centro de Maricá".to_string(),
                    lat: -22.9189,
                    lng: -42.8194,
                    kind: ReferencePointKind::Centro,
                    description: "Centro histórico".to_string(),
                },
                ReferencePoint {
                    name: "Lagoa de Maricá".to_string(),
                    lat: -22.93,
                    lng: -42.84,
                    kind: ReferencePointKind::Lagoa,
                    description: "Lagoa".to_string(),
                },
            ],
            message: None,
        }
    }

    #[test]
    fn reference_points_fill_first_empty_slot() {
        let vm = view_model();
        *vm.api().points.borrow_mut() = Some(Ok(sample_points()));
        block_on(vm.load_reference_points());
        assert_eq!(vm.map().count(&MapCall::ReferencePoints(2, Language::Pt)), 1);

        block_on(vm.select_reference_point(1));
        assert_eq!(vm.state().selection.input(Endpoint::Origin), "Lagoa de Maricá");
        block_on(vm.select_reference_point(0));
        assert_eq!(vm.state().selection.input(Endpoint::Destination), "Centro de Maricá");
        assert_eq!(vm.api().route_count(), 1);

        block_on(vm.select_reference_point(0));
        assert_eq!(notification_text(&vm).as_deref(), Some("Origem e destino já definidos!"));
        assert_eq!(vm.api().route_count(), 1);
    }

    #[test]
    fn language_switch_redraws_reference_points() {
        let vm = view_model();
        vm.set_language(Language::En);
        assert_eq!(vm.map().calls.borrow().len(), 0);

        *vm.api().points.borrow_mut() = Some(Ok(sample_points()));
        block_on(vm.load_reference_points());
        assert_eq!(vm.map().count(&MapCall::ReferencePoints(2, Language::En)), 1);

        vm.set_language(Language::Pt);
        assert_eq!(vm.state().language(), Language::Pt);
        assert_eq!(vm.map().count(&MapCall::ReferencePoints(2, Language::Pt)), 1);
    }

    #[test]
    fn reference_point_failure_warns() {
        let vm = view_model();
        block_on(vm.load_reference_points());
        assert_eq!(notification_kind(&vm), Some(NotificationKind::Warning));
        assert!(vm.state().reference_points.borrow().is_empty());
    }

    #[test]
    fn algorithm_modal_loads_or_fails() {
        let vm = view_model();
        block_on(vm.load_algorithm_info());
        assert_eq!(
            vm.state().algorithm_modal(),
            AlgorithmModal::Failed(
                "Não foi possível conectar ao servidor para obter as informações.".to_string()
            )
        );

        let info = AlgorithmInfo {
            algorithm: "Dijkstra".to_string(),
            total_nodes: 1234,
            ..AlgorithmInfo::default()
        };
        *vm.api().algorithm.borrow_mut() = Some(Ok(AlgorithmInfoResponse {
            success: true,
            info: Some(info.clone()),
            message: None,
        }));
        block_on(vm.load_algorithm_info());
        assert_eq!(vm.state().algorithm_modal(), AlgorithmModal::Loaded(info));

        vm.close_algorithm_modal();
        assert_eq!(vm.state().algorithm_modal(), AlgorithmModal::Hidden);
    }

    #[test]
    fn server_refusal_uses_its_message_in_modal() {
        let vm = view_model();
        *vm.api().algorithm.borrow_mut() = Some(Ok(AlgorithmInfoResponse {
            success: false,
            info: None,
            message: Some("Grafo não carregado".to_string()),
        }));
        block_on(vm.load_algorithm_info());
        assert_eq!(
            vm.state().algorithm_modal(),
            AlgorithmModal::Failed("Grafo não carregado".to_string())
        );
    }
}
