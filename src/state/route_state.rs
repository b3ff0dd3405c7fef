// ============================================================================
// ROUTE STATE - Modo activo + caché de rutas por modo de transporte
// ============================================================================

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use crate::models::{RouteResult, TransportMode};

#[derive(Clone)]
pub struct RouteState {
    pub active_mode: Rc<RefCell<TransportMode>>,
    pub cache: Rc<RefCell<BTreeMap<TransportMode, RouteResult>>>,
    /// Modo cuya ruta está dibujada en el mapa
    pub displayed: Rc<RefCell<Option<TransportMode>>>,
    /// Peticiones en vuelo: modo -> época de la selección que las lanzó
    pending: Rc<RefCell<BTreeMap<TransportMode, u64>>>,
}

impl RouteState {
    pub fn new() -> Self {
        Self {
            active_mode: Rc::new(RefCell::new(TransportMode::default())),
            cache: Rc::new(RefCell::new(BTreeMap::new())),
            displayed: Rc::new(RefCell::new(None)),
            pending: Rc::new(RefCell::new(BTreeMap::new())),
        }
    }

    pub fn active_mode(&self) -> TransportMode {
        *self.active_mode.borrow()
    }

    pub fn set_active_mode(&self, mode: TransportMode) {
        *self.active_mode.borrow_mut() = mode;
    }

    pub fn cached(&self, mode: TransportMode) -> Option<RouteResult> {
        self.cache.borrow().get(&mode).cloned()
    }

    pub fn store(&self, route: RouteResult) {
        self.cache.borrow_mut().insert(route.mode, route);
    }

    /// Rutas cacheadas en orden fijo: carro, caminhada, bicicleta
    pub fn cached_routes(&self) -> Vec<RouteResult> {
        TransportMode::ALL
            .iter()
            .filter_map(|mode| self.cached(*mode))
            .collect()
    }

    pub fn set_displayed(&self, mode: Option<TransportMode>) {
        *self.displayed.borrow_mut() = mode;
    }

    pub fn displayed_route(&self) -> Option<RouteResult> {
        let mode = (*self.displayed.borrow())?;
        self.cached(mode)
    }

    /// Marcar petición en vuelo. `false` si ya había una para este modo y época
    pub fn begin_request(&self, mode: TransportMode, epoch: u64) -> bool {
        let mut pending = self.pending.borrow_mut();
        if pending.get(&mode) == Some(&epoch) {
            return false;
        }
        pending.insert(mode, epoch);
        true
    }

    /// Solo libera la marca si pertenece a la misma época
    pub fn finish_request(&self, mode: TransportMode, epoch: u64) {
        let mut pending = self.pending.borrow_mut();
        if pending.get(&mode) == Some(&epoch) {
            pending.remove(&mode);
        }
    }

    #[cfg(test)]
    pub fn is_pending(&self, mode: TransportMode) -> bool {
        self.pending.borrow().contains_key(&mode)
    }

    /// Vaciar caché y peticiones (la selección cambió)
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
        self.pending.borrow_mut().clear();
        *self.displayed.borrow_mut() = None;
    }
}

impl Default for RouteState {
    fn default() -> Self {
        Self::new()
    }
}
