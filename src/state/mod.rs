// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod selection_state;
pub mod route_state;
pub mod app_state;

pub use selection_state::*;
pub use route_state::*;
pub use app_state::*;
