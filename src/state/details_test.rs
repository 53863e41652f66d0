use super::*;

fn entries() -> Vec<HistoryEntry> {
    vec![
        HistoryEntry {
            id: "20260101120000".to_owned(),
            categoria: "Produtivo".to_owned(),
            titulo_resumo: Some("Pedido de acesso".to_owned()),
            timestamp: "01/01/2026 12:00:00".to_owned(),
            email_original: "Preciso de acesso ao sistema.".to_owned(),
            resposta_sugerida: "Segue o link de acesso.".to_owned(),
        },
        HistoryEntry {
            id: "20260101130000".to_owned(),
            categoria: "Improdutivo".to_owned(),
            titulo_resumo: None,
            timestamp: "01/01/2026 13:00:00".to_owned(),
            email_original: "Obrigado!".to_owned(),
            resposta_sugerida: "De nada.".to_owned(),
        },
    ]
}

#[test]
fn find_entry_resolves_by_exact_id() {
    let list = entries();
    let found = find_entry(&list, "20260101130000").expect("entry");
    assert_eq!(found.categoria, "Improdutivo");
}

#[test]
fn find_entry_returns_none_for_absent_id() {
    let list = entries();
    assert!(find_entry(&list, "nope").is_none());
    assert!(find_entry(&[], "20260101120000").is_none());
}

#[test]
fn overlay_is_hidden_until_an_entry_is_shown() {
    let mut details = DetailsState::default();
    assert!(!details.visible());

    details.show(entries().remove(0));
    assert!(details.visible());
    assert_eq!(
        details.entry.as_ref().map(|e| e.id.as_str()),
        Some("20260101120000")
    );
}

#[test]
fn close_hides_the_overlay_and_is_idempotent() {
    let mut details = DetailsState::default();
    details.show(entries().remove(0));
    details.close();
    assert!(!details.visible());
    details.close();
    assert!(!details.visible());
}
