#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Response body of `POST /api/processar`.
///
/// Any field may be absent; presentation fallbacks live in
/// `state::submission`, not here.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClassifyResponse {
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default)]
    pub resposta_sugerida: Option<String>,
    #[serde(default)]
    pub titulo_resumo: Option<String>,
}

/// One entry of the `GET /api/historico` collection. Owned by the service;
/// the client reads, never mutates.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub categoria: String,
    #[serde(default)]
    pub titulo_resumo: Option<String>,
    pub timestamp: String,
    pub email_original: String,
    pub resposta_sugerida: String,
}
