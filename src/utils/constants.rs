// Endpoints del servidor de rutas (relativos a CONFIG.backend_url())

pub const API_SEARCH_ADDRESS: &str = "/api/buscar_endereco";
pub const API_REFERENCE_POINTS: &str = "/api/pontos_turisticos";
pub const API_CALCULATE_ROUTE: &str = "/api/calcular_rota";
pub const API_ALGORITHM_INFO: &str = "/api/info_algoritmo";

/// Ruta de ejemplo dentro de Maricá (origen, destino)
pub const SAMPLE_ROUTE_ORIGIN: (f64, f64) = (-22.9186, -42.8197);
pub const SAMPLE_ROUTE_DESTINATION: (f64, f64) = (-22.9200, -42.8180);

/// Padding relativo al ajustar la vista a la ruta
pub const ROUTE_BOUNDS_PADDING: f64 = 0.1;

/// Contenedor de Leaflet en el DOM
pub const MAP_CONTAINER_ID: &str = "map";
