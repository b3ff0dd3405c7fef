pub mod actions;
pub mod app;
pub mod search_panel;
pub mod transport_selector;
pub mod route_info;
pub mod route_cards;
pub mod notification;
pub mod algorithm_modal;

pub use actions::AppActions;
pub use app::render_app;
pub use search_panel::{render_search_panel, search_input_id, status_id, status_text};
pub use transport_selector::render_transport_selector;
pub use route_info::render_route_details;
pub use route_cards::render_route_cards;
pub use notification::render_notification;
pub use algorithm_modal::{render_algorithm_modal, render_algorithm_modal_body};
