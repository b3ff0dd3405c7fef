// ============================================================================
// APP ACTIONS - Callbacks que las vistas conectan a eventos del DOM
// ============================================================================

use std::rc::Rc;
use uuid::Uuid;
use crate::models::TransportMode;
use crate::state::Endpoint;

#[derive(Clone)]
pub struct AppActions {
    pub select_mode: Rc<dyn Fn(TransportMode)>,
    pub search_input: Rc<dyn Fn(Endpoint, String)>,
    pub search: Rc<dyn Fn(Endpoint)>,
    pub calculate: Rc<dyn Fn()>,
    pub sample_route: Rc<dyn Fn()>,
    pub reset: Rc<dyn Fn()>,
    pub open_algorithm_info: Rc<dyn Fn()>,
    pub close_algorithm_modal: Rc<dyn Fn()>,
    pub dismiss_notification: Rc<dyn Fn(Uuid)>,
}
