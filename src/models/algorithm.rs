use serde::{Deserialize, Serialize};

/// Metadatos del algoritmo del servidor (solo para mostrar)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlgorithmInfo {
    #[serde(rename = "algoritmo")]
    pub algorithm: String,
    #[serde(rename = "complexidade_tempo")]
    pub time_complexity: String,
    #[serde(rename = "complexidade_espaco")]
    pub space_complexity: String,
    #[serde(rename = "total_nos")]
    pub total_nodes: u64,
    #[serde(rename = "total_arestas")]
    pub total_edges: u64,
    #[serde(rename = "arestas_randomizadas")]
    pub randomized_edges: u64,
    #[serde(rename = "randomizacao_ativa")]
    pub randomization_active: bool,
    #[serde(rename = "tipo_grafo")]
    pub graph_type: String,
    #[serde(rename = "aplicacao")]
    pub application: String,
    #[serde(rename = "idioma")]
    pub language: String,
    #[serde(rename = "caracteristicas")]
    pub features: Vec<String>,
}

/// Respuesta de GET /api/info_algoritmo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmInfoResponse {
    #[serde(rename = "sucesso", default)]
    pub success: bool,
    #[serde(default)]
    pub info: Option<AlgorithmInfo>,
    #[serde(rename = "mensagem", default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Separador de miles al estilo pt-BR (1.234.567)
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
