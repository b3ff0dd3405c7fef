use thiserror::Error;

/// Errores de la capa de servicios (HTTP)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Request build error: {0}")]
    Build(String),

    /// Abortada por cambio de selección o por timeout
    #[error("Request aborted")]
    Aborted,
}

impl ApiError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, ApiError::Aborted)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(err) => ApiError::Parse(err.to_string()),
            gloo_net::Error::JsError(err) if err.name == "AbortError" => ApiError::Aborted,
            other => ApiError::Network(other.to_string()),
        }
    }
}
