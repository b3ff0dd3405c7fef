use serde::{Deserialize, Serialize};

/// Modo de transporte (selecciona el peso de las aristas en el servidor)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    #[default]
    Driving,
    Walking,
    Cycling,
}

impl TransportMode {
    /// Orden fijo de las tarjetas de comparación
    pub const ALL: [TransportMode; 3] = [
        TransportMode::Driving,
        TransportMode::Walking,
        TransportMode::Cycling,
    ];

    /// Valor usado en el wire y en `data-mode`
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Driving => "driving",
            TransportMode::Walking => "walking",
            TransportMode::Cycling => "cycling",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "driving" => Some(TransportMode::Driving),
            "walking" => Some(TransportMode::Walking),
            "cycling" => Some(TransportMode::Cycling),
            _ => None,
        }
    }

    /// Clave i18n del título de la tarjeta
    pub fn title_key(&self) -> &'static str {
        match self {
            TransportMode::Driving => "carro",
            TransportMode::Walking => "caminhada",
            TransportMode::Cycling => "bicicleta",
        }
    }

    /// Velocidad media en km/h
    pub fn average_speed_kmh(&self) -> f64 {
        match self {
            TransportMode::Driving => 30.0,
            TransportMode::Walking => 5.0,
            TransportMode::Cycling => 15.0,
        }
    }

    /// Minutos estimados para una distancia en metros.
    /// La distancia se redondea a 0.1 km antes de dividir (igual que la tarjeta).
    pub fn estimated_minutes(&self, distance_m: f64) -> u64 {
        let km = round_to_tenth(distance_m.max(0.0) / 1000.0);
        let minutes = (km / self.average_speed_kmh() * 60.0).round();
        minutes as u64
    }

    /// Tiempo estimado formateado: "N min", "Hh Mmin" o "Hh"
    pub fn estimated_time(&self, distance_m: f64) -> String {
        format_duration(self.estimated_minutes(distance_m))
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn format_duration(minutes: u64) -> String {
    if minutes < 60 {
        return format!("{} min", minutes);
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest > 0 {
        format!("{}h {}min", hours, rest)
    } else {
        format!("{}h", hours)
    }
}
