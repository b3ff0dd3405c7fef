// Utils compartidos

pub mod constants;
pub mod leaflet_ffi;
pub mod format;
pub mod i18n;

pub use format::escape_html;
