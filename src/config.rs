use serde::{Deserialize, Serialize};
use crate::utils::i18n::Language;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub network_timeout_seconds: u32,
    pub map_config: MapConfig,
    pub ui_config: UIConfig,
    pub language: Language,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            // Vacío = mismo origen que la página (el servidor Flask sirve /api/*)
            backend_url_development: String::new(),
            backend_url_production: String::new(),
            environment: "development".to_string(),
            enable_logging: true,
            network_timeout_seconds: 30,
            map_config: MapConfig::default(),
            ui_config: UIConfig::default(),
            language: Language::Pt,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
    pub search_result_zoom: f64,
    pub tile_url: String,
    pub tile_attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center_lat: -22.9189,
            default_center_lng: -42.8194,
            default_zoom: 14.0,
            search_result_zoom: 16.0,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            tile_attribution: "© OpenStreetMap contributors".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    pub notification_timeout_ms: u32,
    pub route_line_width: u32,
    pub route_line_color: String,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            notification_timeout_ms: 5000,
            route_line_width: 8,
            route_line_color: "#FF0000".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .map(|s| s.to_string())
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .map(|s| s.to_string())
                .unwrap_or(defaults.backend_url_production),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            network_timeout_seconds: option_env!("NETWORK_TIMEOUT_SECONDS")
                .unwrap_or("30").parse().unwrap_or(30),
            map_config: MapConfig {
                default_center_lat: option_env!("DEFAULT_MAP_CENTER_LAT")
                    .unwrap_or("-22.9189").parse().unwrap_or(-22.9189),
                default_center_lng: option_env!("DEFAULT_MAP_CENTER_LNG")
                    .unwrap_or("-42.8194").parse().unwrap_or(-42.8194),
                default_zoom: option_env!("DEFAULT_MAP_ZOOM")
                    .unwrap_or("14").parse().unwrap_or(14.0),
                search_result_zoom: option_env!("SEARCH_RESULT_ZOOM")
                    .unwrap_or("16").parse().unwrap_or(16.0),
                tile_url: option_env!("TILE_URL")
                    .map(|s| s.to_string())
                    .unwrap_or(defaults.map_config.tile_url),
                tile_attribution: option_env!("TILE_ATTRIBUTION")
                    .map(|s| s.to_string())
                    .unwrap_or(defaults.map_config.tile_attribution),
            },
            ui_config: UIConfig {
                notification_timeout_ms: option_env!("NOTIFICATION_TIMEOUT_MS")
                    .unwrap_or("5000").parse().unwrap_or(5000),
                route_line_width: option_env!("ROUTE_LINE_WIDTH")
                    .unwrap_or("8").parse().unwrap_or(8),
                route_line_color: option_env!("ROUTE_LINE_COLOR")
                    .map(|s| s.to_string())
                    .unwrap_or(defaults.ui_config.route_line_color),
            },
            language: option_env!("LANGUAGE")
                .map(Language::from_code)
                .unwrap_or(Language::Pt),
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        let url = match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        };
        url.trim_end_matches('/')
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Timeout de red en milisegundos (mínimo 1 s)
    pub fn network_timeout_ms(&self) -> u32 {
        self.network_timeout_seconds.max(1).saturating_mul(1000)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_follows_environment() {
        let mut config = AppConfig {
            backend_url_development: "http://localhost:5000/".to_string(),
            backend_url_production: "https://rotas.example.org".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.backend_url(), "http://localhost:5000");

        config.environment = "production".to_string();
        assert_eq!(config.backend_url(), "https://rotas.example.org");
    }

    #[test]
    fn default_map_is_centered_on_marica() {
        let config = AppConfig::default();
        assert_eq!(config.map_config.default_center_lat, -22.9189);
        assert_eq!(config.map_config.default_center_lng, -42.8194);
        assert_eq!(config.backend_url(), "");
    }

    #[test]
    fn network_timeout_never_zero() {
        let config = AppConfig {
            network_timeout_seconds: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.network_timeout_ms(), 1000);
    }
}
