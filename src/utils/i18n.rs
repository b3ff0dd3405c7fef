// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Idiomas soportados por la interfaz
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    Pt,
    En,
}

impl Language {
    /// Parsear código de idioma ("PT", "pt-BR", "EN"...). Desconocido = portugués
    pub fn from_code(code: &str) -> Self {
        let code = code.trim().to_uppercase();
        if code.starts_with("EN") {
            Language::En
        } else {
            Language::Pt
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Pt => "PT",
            Language::En => "EN",
        }
    }
}

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: Language) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();

    match lang {
        Language::Pt => {
            // Cabecera / layout
            translations.insert("app_title", "Rotas de Maricá");
            translations.insert("app_subtitle", "Menor caminho com Dijkstra");
            translations.insert("origem", "Origem");
            translations.insert("destino", "Destino");
            translations.insert("buscar", "Buscar");
            translations.insert("buscar_origem_placeholder", "Buscar endereço de origem...");
            translations.insert("buscar_destino_placeholder", "Buscar endereço de destino...");
            translations.insert("origem_nao_selecionada", "Não selecionada");
            translations.insert("destino_nao_selecionado", "Não selecionado");
            translations.insert("origem_definida_status", "Origem definida");
            translations.insert("destino_definido_status", "Destino definido");
            translations.insert("modo_transporte", "Modo de transporte");
            translations.insert("carro", "🚗 Carro");
            translations.insert("caminhada", "🚶‍♂️ Caminhada");
            translations.insert("bicicleta", "🚴‍♂️ Bicicleta");
            translations.insert("limpar", "🗺️ Limpar mapa");
            translations.insert("rota_exemplo", "🧪 Rota de exemplo");
            translations.insert("info_algoritmo", "ℹ️ Algoritmo");
            translations.insert("calculando", "Calculando...");
            translations.insert("calcular_rota", "🧭 Calcular rota");

            // Rota
            translations.insert("rota_calculada", "Rota Calculada");
            translations.insert("comparacao_rotas", "Comparação de rotas");
            translations.insert("distancia", "Distância");
            translations.insert("pontos", "Pontos");
            translations.insert("algoritmo", "Algoritmo");
            translations.insert("clique_opcoes", "Clique para ver opções");
            translations.insert("selecionar", "Selecionar");
            translations.insert("ponto_teste_a", "Ponto de Teste A");
            translations.insert("ponto_teste_b", "Ponto de Teste B");

            // Notificaciones
            translations.insert("nota_origem_definida", "🟢 Origem definida! Clique no destino.");
            translations.insert("nota_destino_definido", "🔴 Destino definido! Calculando rotas...");
            translations.insert("nota_destino_sem_origem", "🔴 Destino definido! Selecione a origem.");
            translations.insert("nota_pontos_definidos", "🟢 Origem definida! Calculando rotas...");
            translations.insert("nota_digite_endereco", "⚠️ Por favor, digite um endereço!");
            translations.insert("nota_selecione_pontos", "⚠️ Por favor, selecione origem e destino!");
            translations.insert("nota_erro_calcular_rota", "❌ Erro ao calcular rota");
            translations.insert("nota_erro_buscar_endereco", "❌ Erro ao buscar endereço");
            translations.insert("nota_endereco_nao_encontrado", "❌ Endereço não encontrado em Maricá");
            translations.insert("nota_mapa_limpo", "🗺️ Mapa limpo! Selecione um novo ponto de origem.");
            translations.insert("nota_pontos_ja_definidos", "Origem e destino já definidos!");
            translations.insert("nota_erro_pontos", "⚠️ Não foi possível carregar os pontos de referência");
            translations.insert("erro_prefixo", "❌ Erro: {}");
            translations.insert("erro_rota_padrao", "Erro ao calcular rota");
            translations.insert("confirmar_redefinir", "Deseja redefinir os pontos e calcular uma nova rota?");

            // Modal del algoritmo
            translations.insert("carregando_info", "Carregando informações do algoritmo...");
            translations.insert("complexidade_temporal", "Complexidade Temporal");
            translations.insert("complexidade_espacial", "Complexidade Espacial");
            translations.insert("tipo_grafo", "Tipo de Grafo");
            translations.insert("aplicacao", "Aplicação");
            translations.insert("estatisticas", "Estatísticas");
            translations.insert("total_nos", "Total de Nós");
            translations.insert("total_arestas", "Total de Arestas");
            translations.insert("arestas_randomizadas", "Arestas Randomizadas");
            translations.insert("randomizacao_ativa", "Randomização Ativa");
            translations.insert("idioma", "Idioma");
            translations.insert("caracteristicas", "Características");
            translations.insert("sim", "✅ Sim");
            translations.insert("nao", "❌ Não");
            translations.insert("erro", "Erro");
            translations.insert("erro_conexao", "Erro de Conexão");
            translations.insert("erro_conexao_detalhe", "Não foi possível conectar ao servidor para obter as informações.");
            translations.insert("erro_info_padrao", "Não foi possível carregar as informações do algoritmo.");
            translations.insert("sobre_algoritmo", "Sobre o Algoritmo");
            translations.insert("sobre_algoritmo_texto", "O algoritmo de Dijkstra encontra o caminho mais curto em grafos com arestas ponderadas. A implementação usa uma fila de prioridade (heap), resultando em complexidade O((V + E) log V).");
            translations.insert("randomizacao", "Randomização");
            translations.insert("randomizacao_texto", "Os pesos das arestas foram randomizados em ±20% do valor original para demonstrar a robustez do algoritmo com diferentes configurações de peso.");
            translations.insert("fechar", "Fechar");
        }
        Language::En => {
            translations.insert("app_title", "Maricá Routes");
            translations.insert("app_subtitle", "Shortest path with Dijkstra");
            translations.insert("origem", "Origin");
            translations.insert("destino", "Destination");
            translations.insert("buscar", "Search");
            translations.insert("buscar_origem_placeholder", "Search origin address...");
            translations.insert("buscar_destino_placeholder", "Search destination address...");
            translations.insert("origem_nao_selecionada", "Not selected");
            translations.insert("destino_nao_selecionado", "Not selected");
            translations.insert("origem_definida_status", "Origin set");
            translations.insert("destino_definido_status", "Destination set");
            translations.insert("modo_transporte", "Transport mode");
            translations.insert("carro", "🚗 Car");
            translations.insert("caminhada", "🚶‍♂️ Walking");
            translations.insert("bicicleta", "🚴‍♂️ Bicycle");
            translations.insert("limpar", "🗺️ Clear map");
            translations.insert("rota_exemplo", "🧪 Sample route");
            translations.insert("info_algoritmo", "ℹ️ Algorithm");
            translations.insert("calculando", "Calculating...");
            translations.insert("calcular_rota", "🧭 Compute route");

            translations.insert("rota_calculada", "Computed Route");
            translations.insert("comparacao_rotas", "Route comparison");
            translations.insert("distancia", "Distance");
            translations.insert("pontos", "Points");
            translations.insert("algoritmo", "Algorithm");
            translations.insert("clique_opcoes", "Click to see options");
            translations.insert("selecionar", "Select");
            translations.insert("ponto_teste_a", "Test Point A");
            translations.insert("ponto_teste_b", "Test Point B");

            translations.insert("nota_origem_definida", "🟢 Origin set! Click the destination.");
            translations.insert("nota_destino_definido", "🔴 Destination set! Computing routes...");
            translations.insert("nota_destino_sem_origem", "🔴 Destination set! Now select the origin.");
            translations.insert("nota_pontos_definidos", "🟢 Origin set! Computing routes...");
            translations.insert("nota_digite_endereco", "⚠️ Please type an address!");
            translations.insert("nota_selecione_pontos", "⚠️ Please select origin and destination!");
            translations.insert("nota_erro_calcular_rota", "❌ Error computing route");
            translations.insert("nota_erro_buscar_endereco", "❌ Error searching address");
            translations.insert("nota_endereco_nao_encontrado", "❌ Address not found in Maricá");
            translations.insert("nota_mapa_limpo", "🗺️ Map cleared! Select a new origin point.");
            translations.insert("nota_pontos_ja_definidos", "Origin and destination already set!");
            translations.insert("nota_erro_pontos", "⚠️ Could not load reference points");
            translations.insert("erro_prefixo", "❌ Error: {}");
            translations.insert("erro_rota_padrao", "Error computing route");
            translations.insert("confirmar_redefinir", "Reset the points and compute a new route?");

            translations.insert("carregando_info", "Loading algorithm information...");
            translations.insert("complexidade_temporal", "Time Complexity");
            translations.insert("complexidade_espacial", "Space Complexity");
            translations.insert("tipo_grafo", "Graph Type");
            translations.insert("aplicacao", "Application");
            translations.insert("estatisticas", "Statistics");
            translations.insert("total_nos", "Total Nodes");
            translations.insert("total_arestas", "Total Edges");
            translations.insert("arestas_randomizadas", "Randomized Edges");
            translations.insert("randomizacao_ativa", "Randomization Active");
            translations.insert("idioma", "Language");
            translations.insert("caracteristicas", "Features");
            translations.insert("sim", "✅ Yes");
            translations.insert("nao", "❌ No");
            translations.insert("erro", "Error");
            translations.insert("erro_conexao", "Connection Error");
            translations.insert("erro_conexao_detalhe", "Could not reach the server to fetch the information.");
            translations.insert("erro_info_padrao", "Could not load the algorithm information.");
            translations.insert("sobre_algoritmo", "About the Algorithm");
            translations.insert("sobre_algoritmo_texto", "Dijkstra's algorithm finds the shortest path in graphs with weighted edges. This implementation uses a priority queue (heap), giving O((V + E) log V) complexity.");
            translations.insert("randomizacao", "Randomization");
            translations.insert("randomizacao_texto", "Edge weights were randomized by ±20% of their original value to show the algorithm's robustness under different weight configurations.");
            translations.insert("fechar", "Close");
        }
    }

    translations
}

/// Función de traducción
///
/// # Arguments
/// * `key` - Clave de traducción
/// * `lang` - Idioma
///
/// # Returns
/// String traducida o la clave si no se encuentra traducción
pub fn t(key: &str, lang: Language) -> String {
    let translations = get_translations(lang);

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    // Fallback: devolver la clave si no hay traducción
    key.to_string()
}

/// Traducción con un único argumento posicional `{}`
pub fn t_with(key: &str, lang: Language, arg: &str) -> String {
    t(key, lang).replacen("{}", arg, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t("no_existe", Language::Pt), "no_existe");
    }

    #[test]
    fn both_languages_share_keys() {
        let pt = get_translations(Language::Pt);
        let en = get_translations(Language::En);
        let mut missing: Vec<_> = pt.keys().filter(|k| !en.contains_key(*k)).collect();
        missing.sort();
        assert!(missing.is_empty(), "faltan en EN: {:?}", missing);
        assert_eq!(pt.len(), en.len());
    }

    #[test]
    fn positional_argument_is_replaced() {
        assert_eq!(
            t_with("erro_prefixo", Language::Pt, "Coordenadas incompletas"),
            "❌ Erro: Coordenadas incompletas"
        );
    }

    #[test]
    fn language_codes() {
        assert_eq!(Language::from_code("en-US"), Language::En);
        assert_eq!(Language::from_code("pt-BR"), Language::Pt);
        assert_eq!(Language::from_code("xx"), Language::Pt);
        assert_eq!(Language::En.code(), "EN");
    }
}
