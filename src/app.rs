// ============================================================================
// APP - Aplicación principal (layout + ViewModel + actualizaciones del DOM)
// ============================================================================

use std::rc::Rc;
use gloo_timers::callback::Timeout;
use uuid::Uuid;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::incremental::*;
use crate::dom::{append_child, get_element_by_id, require_element, set_inner_html};
use crate::maps::LeafletMap;
use crate::models::TransportMode;
use crate::services::ApiClient;
use crate::state::{AppState, Endpoint, IncrementalUpdate, UpdateType};
use crate::utils::constants::MAP_CONTAINER_ID;
use crate::viewmodels::RouteViewModel;
use crate::views::{render_app, AppActions};

/// ViewModel concreto del navegador
pub type AppViewModel = RouteViewModel<ApiClient, LeafletMap>;

/// Aplicación principal
pub struct App {
    state: AppState,
    vm: Rc<AppViewModel>,
    actions: AppActions,
    root: Element,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = require_element("app")?;

        let state = AppState::new(CONFIG.language);
        let vm = Rc::new(RouteViewModel::new(state.clone(), ApiClient::new(), LeafletMap::new()));
        let actions = Self::build_actions(&vm);

        // Suscribirse a cambios de estado (Timeout 0 para batchear y no re-entrar en APP)
        state.subscribe_to_changes(move |update_type| {
            Timeout::new(0, move || {
                crate::rerender_app_with_type(update_type);
            })
            .forget();
        });

        Ok(Self {
            state,
            vm,
            actions,
            root,
        })
    }

    /// Conectar los eventos de las vistas con el ViewModel
    fn build_actions(vm: &Rc<AppViewModel>) -> AppActions {
        let select_mode = {
            let vm = vm.clone();
            Rc::new(move |mode: TransportMode| {
                let vm = vm.clone();
                spawn_local(async move { vm.select_mode(mode).await });
            })
        };
        let search_input = {
            let vm = vm.clone();
            Rc::new(move |endpoint: Endpoint, text: String| vm.update_search_input(endpoint, &text))
        };
        let search = {
            let vm = vm.clone();
            Rc::new(move |endpoint: Endpoint| {
                let vm = vm.clone();
                spawn_local(async move { vm.search_address(endpoint).await });
            })
        };
        let calculate = {
            let vm = vm.clone();
            Rc::new(move || {
                let vm = vm.clone();
                spawn_local(async move { vm.calculate_route().await });
            })
        };
        let sample_route = {
            let vm = vm.clone();
            Rc::new(move || {
                let vm = vm.clone();
                spawn_local(async move { vm.run_sample_route().await });
            })
        };
        let reset = {
            let vm = vm.clone();
            Rc::new(move || vm.reset())
        };
        let open_algorithm_info = {
            let vm = vm.clone();
            Rc::new(move || {
                let vm = vm.clone();
                spawn_local(async move { vm.load_algorithm_info().await });
            })
        };
        let close_algorithm_modal = {
            let vm = vm.clone();
            Rc::new(move || vm.close_algorithm_modal())
        };
        let dismiss_notification = {
            let vm = vm.clone();
            Rc::new(move |id: Uuid| vm.dismiss_notification(id))
        };

        AppActions {
            select_mode,
            search_input,
            search,
            calculate,
            sample_route,
            reset,
            open_algorithm_info,
            close_algorithm_modal,
            dismiss_notification,
        }
    }

    /// Renderizar aplicación completa. Si el mapa ya existe se reutiliza su contenedor
    pub fn render(&mut self) -> Result<(), JsValue> {
        log::debug!("🎬 [APP] render()");

        let existing_map = get_element_by_id(MAP_CONTAINER_ID);
        let view = render_app(&self.state, &self.actions)?;

        if let Some(existing_map) = existing_map {
            if let Some(placeholder) = view.query_selector(&format!("#{}", MAP_CONTAINER_ID))? {
                placeholder.replace_with_with_node_1(&existing_map)?;
            }
        }

        set_inner_html(&self.root, "");
        append_child(&self.root, &view)?;
        Ok(())
    }

    pub fn view_model(&self) -> Rc<AppViewModel> {
        self.vm.clone()
    }

    /// Aplicar una notificación del estado al DOM
    pub fn update(&mut self, update_type: UpdateType) -> Result<(), JsValue> {
        match update_type {
            UpdateType::Incremental(update) => self.update_incremental(update),
            UpdateType::FullRender => self.render(),
        }
    }

    /// Actualización incremental del DOM (solo elementos específicos)
    pub fn update_incremental(&self, update: IncrementalUpdate) -> Result<(), JsValue> {
        match update {
            IncrementalUpdate::Selection => update_selection(&self.state),
            IncrementalUpdate::TransportMode => update_transport_mode(&self.state),
            IncrementalUpdate::RouteInfo => update_route_info(&self.state),
            IncrementalUpdate::RouteCards => update_route_cards(&self.state, &self.actions),
            IncrementalUpdate::Loading => update_loading(&self.state),
            IncrementalUpdate::Notification => update_notification(&self.state, &self.actions),
            IncrementalUpdate::AlgorithmModal => update_algorithm_modal(&self.state),
        }
    }
}
