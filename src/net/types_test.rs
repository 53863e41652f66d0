use super::*;

#[test]
fn classify_response_parses_full_body() {
    let body = serde_json::json!({
        "categoria": "Produtivo",
        "resposta_sugerida": "Segue em anexo.",
        "titulo_resumo": "Pedido de suporte"
    });
    let resp: ClassifyResponse = serde_json::from_value(body).expect("parse");
    assert_eq!(resp.categoria.as_deref(), Some("Produtivo"));
    assert_eq!(resp.resposta_sugerida.as_deref(), Some("Segue em anexo."));
    assert_eq!(resp.titulo_resumo.as_deref(), Some("Pedido de suporte"));
}

#[test]
fn classify_response_tolerates_absent_fields() {
    let resp: ClassifyResponse = serde_json::from_value(serde_json::json!({})).expect("parse");
    assert_eq!(resp, ClassifyResponse::default());
}

#[test]
fn history_entry_parses_with_null_title() {
    let body = serde_json::json!({
        "id": "20260101120000",
        "categoria": "Improdutivo",
        "titulo_resumo": null,
        "timestamp": "01/01/2026 12:00:00",
        "email_original": "Obrigado!",
        "resposta_sugerida": "De nada."
    });
    let entry: HistoryEntry = serde_json::from_value(body).expect("parse");
    assert_eq!(entry.id, "20260101120000");
    assert!(entry.titulo_resumo.is_none());
}

#[test]
fn history_entry_tolerates_missing_title_field() {
    let body = serde_json::json!({
        "id": "1",
        "categoria": "Produtivo",
        "timestamp": "01/01/2026 12:00:00",
        "email_original": "conteudo",
        "resposta_sugerida": "resposta"
    });
    let entry: HistoryEntry = serde_json::from_value(body).expect("parse");
    assert!(entry.titulo_resumo.is_none());
}

#[test]
fn history_parses_as_ordered_sequence() {
    let body = serde_json::json!([
        {
            "id": "2", "categoria": "Produtivo", "titulo_resumo": "B",
            "timestamp": "t2", "email_original": "e2", "resposta_sugerida": "r2"
        },
        {
            "id": "1", "categoria": "Improdutivo", "titulo_resumo": "A",
            "timestamp": "t1", "email_original": "e1", "resposta_sugerida": "r1"
        }
    ]);
    let entries: Vec<HistoryEntry> = serde_json::from_value(body).expect("parse");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, "2");
    assert_eq!(entries[1].id, "1");
}
