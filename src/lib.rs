// ============================================================================
// ROTAS DE MARICÁ - FRONTEND MVVM (RUST PURO + LEAFLET)
// ============================================================================
// Arquitectura MVVM:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Protocolo de selección, rutas, búsqueda
// - Services: SOLO comunicación API
// - State: State Management con Rc<RefCell>
// - Maps: Trait MapRenderer + implementación Leaflet
// - Models: Estructuras compartidas con backend
// ============================================================================

mod config;
mod models;
mod services;
mod viewmodels;
mod state;
mod maps;
mod dom;
mod views;
mod utils;
mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use wasm_logger::Config;
use crate::app::{App, AppViewModel};
use crate::config::CONFIG;
use crate::models::Coordinate;
use crate::state::UpdateType;
use crate::utils::constants::MAP_CONTAINER_ID;
use crate::utils::leaflet_ffi;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(Config::default());
    }
    log::info!("🚀 Rotas de Maricá - Rust + Leaflet");

    // Crear y renderizar app (el contenedor #map tiene que existir antes de Leaflet)
    let mut app = App::new()?;
    app.render()?;
    let vm = app.view_model();

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    if let Err(e) = vm.initialize_map(MAP_CONTAINER_ID, &CONFIG.map_config) {
        log::error!("❌ Erro ao inicializar o mapa: {}", e);
        return Ok(());
    }

    // Click en el mapa: se registra UNA sola vez
    {
        let vm = vm.clone();
        let on_click = Closure::wrap(Box::new(move |lat: f64, lng: f64| {
            let vm = vm.clone();
            spawn_local(async move {
                vm.handle_map_click(Coordinate::new(lat, lng), crate::dom::confirm).await;
            });
        }) as Box<dyn FnMut(f64, f64)>);
        leaflet_ffi::on_leaflet_map_click(&on_click);
        on_click.forget();
    }

    spawn_local(async move {
        vm.load_reference_points().await;
    });

    Ok(())
}

/// Función pública para actualizar la app con tipo específico
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| {
        let Ok(mut app) = app_cell.try_borrow_mut() else {
            log::warn!("⚠️ [UPDATE] App ocupada, atualização {:?} ignorada", update_type);
            return;
        };
        let Some(app) = app.as_mut() else {
            log::warn!("⚠️ [UPDATE] App não está inicializada");
            return;
        };

        log::debug!("🔄 [UPDATE] {:?}", update_type);
        if let Err(e) = app.update(update_type.clone()) {
            let needs_full_render = format!("{:?}", e).contains("needs full render");
            if needs_full_render && update_type != UpdateType::FullRender {
                log::info!("🔄 [UPDATE] Mudando para re-render completo");
                if let Err(e) = app.render() {
                    log::error!("❌ Erro re-renderizando: {:?}", e);
                }
            } else {
                log::error!("❌ Erro na atualização {:?}: {:?}", update_type, e);
            }
        }
    });
}

fn view_model() -> Option<std::rc::Rc<AppViewModel>> {
    APP.with(|app_cell| app_cell.borrow().as_ref().map(App::view_model))
}

/// Botón "Selecionar" del popup de un punto turístico (llamado desde map_bridge.js)
#[wasm_bindgen]
pub fn select_reference_point(index: usize) {
    let Some(vm) = view_model() else {
        log::warn!("⚠️ App não está inicializada");
        return;
    };
    spawn_local(async move {
        vm.select_reference_point(index).await;
    });
}

/// Cambiar idioma de la interfaz ("PT" / "EN"); re-render completo
#[wasm_bindgen]
pub fn set_language(code: &str) {
    let Some(vm) = view_model() else {
        return;
    };
    let language = crate::utils::i18n::Language::from_code(code);
    log::info!("🌐 Idioma: {}", language.code());
    vm.set_language(language);
}
