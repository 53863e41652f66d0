#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use crate::net::types::ClassifyResponse;

/// Fallback category label when the service omits `categoria`.
pub const CATEGORY_FALLBACK: &str = "Erro";

/// Fallback suggested response when the service omits `resposta_sugerida`.
pub const RESPONSE_FALLBACK: &str = "Ocorreu um erro no servidor ou na IA.";

/// Fallback title when the service omits `titulo_resumo`.
pub const TITLE_FALLBACK: &str = "N/A";

/// Category label rendered when the request or parse fails.
pub const NETWORK_FAILURE_CATEGORY: &str = "Falha na Rede";

/// Message rendered when the request or parse fails.
pub const NETWORK_FAILURE_RESPONSE: &str =
    "Não foi possível conectar ao servidor. Verifique sua conexão e tente novamente.";

/// Lifecycle of the single submission trigger.
///
/// The trigger is disabled for the whole `InFlight` window, so at most one
/// classification request is ever outstanding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    InFlight,
}

/// State behind the submit button: current phase plus the last rendered
/// outcome (cleared while a new request is in flight).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmissionState {
    pub phase: SubmitPhase,
    pub result: Option<ResultView>,
}

impl SubmissionState {
    pub fn in_flight(&self) -> bool {
        self.phase == SubmitPhase::InFlight
    }

    /// Enter the in-flight window: trigger disabled, prior result hidden.
    pub fn begin(&mut self) {
        self.phase = SubmitPhase::InFlight;
        self.result = None;
    }

    /// Leave the in-flight window with a rendered outcome, success or not.
    pub fn finish(&mut self, result: ResultView) {
        self.phase = SubmitPhase::Idle;
        self.result = Some(result);
    }
}

/// The one request this attempt will issue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitRequest {
    /// JSON body `{"email_content": ...}` with the trimmed text.
    Text(String),
    /// Multipart body carrying the staged file under the `file` field.
    File,
}

/// Why a submission attempt was blocked before any request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlock {
    /// Neither text nor file supplied.
    Empty,
    /// Both text and file supplied at once.
    Conflict,
}

impl SubmitBlock {
    /// User-facing blocking notification for this rejection.
    pub fn message(self) -> &'static str {
        match self {
            SubmitBlock::Empty => {
                "Por favor, cole o conteúdo do email ou faça upload de um arquivo."
            }
            SubmitBlock::Conflict => {
                "ATENÇÃO: Você colou texto E anexou um arquivo. \
                 Por favor, remova um dos dois para continuar."
            }
        }
    }
}

/// Exclusive-OR validation over the two inputs. Exactly one non-empty input
/// proceeds; both-empty and both-present are rejected without a request.
pub fn validate(text: &str, has_file: bool) -> Result<SubmitRequest, SubmitBlock> {
    let trimmed = text.trim();
    match (trimmed.is_empty(), has_file) {
        (true, false) => Err(SubmitBlock::Empty),
        (false, true) => Err(SubmitBlock::Conflict),
        (false, false) => Ok(SubmitRequest::Text(trimmed.to_owned())),
        (true, true) => Ok(SubmitRequest::File),
    }
}

/// Presentation tone derived from the service category, compared
/// case-insensitively against the two known categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryTone {
    Produtivo,
    Improdutivo,
    Error,
}

impl CategoryTone {
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();
        match lower.as_str() {
            "produtivo" => CategoryTone::Produtivo,
            "improdutivo" => CategoryTone::Improdutivo,
            _ => CategoryTone::Error,
        }
    }

    /// Modifier class applied to the category tag.
    pub fn css_class(self) -> &'static str {
        match self {
            CategoryTone::Produtivo => "produtivo",
            CategoryTone::Improdutivo => "improdutivo",
            CategoryTone::Error => "error",
        }
    }
}

/// Everything the result section renders for one resolved attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultView {
    pub category: String,
    pub response: String,
    pub title: String,
    pub tone: CategoryTone,
}

impl ResultView {
    /// Presentation of a successful round-trip. Absent fields fall back to
    /// fixed literals; an absent category presents with the error tone.
    pub fn from_response(resp: &ClassifyResponse) -> Self {
        let tone = resp
            .categoria
            .as_deref()
            .map_or(CategoryTone::Error, CategoryTone::from_label);
        Self {
            category: resp
                .categoria
                .clone()
                .unwrap_or_else(|| CATEGORY_FALLBACK.to_owned()),
            response: resp
                .resposta_sugerida
                .clone()
                .unwrap_or_else(|| RESPONSE_FALLBACK.to_owned()),
            title: resp
                .titulo_resumo
                .clone()
                .unwrap_or_else(|| TITLE_FALLBACK.to_owned()),
            tone,
        }
    }

    /// Terminal presentation for a transport or parse failure.
    pub fn network_failure() -> Self {
        Self {
            category: NETWORK_FAILURE_CATEGORY.to_owned(),
            response: NETWORK_FAILURE_RESPONSE.to_owned(),
            title: TITLE_FALLBACK.to_owned(),
            tone: CategoryTone::Error,
        }
    }
}
