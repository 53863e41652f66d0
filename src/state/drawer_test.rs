use super::*;

fn entry(id: &str, titulo: Option<&str>) -> HistoryEntry {
    HistoryEntry {
        id: id.to_owned(),
        categoria: "Produtivo".to_owned(),
        titulo_resumo: titulo.map(str::to_owned),
        timestamp: "01/01/2026 12:00:00".to_owned(),
        email_original: "conteudo".to_owned(),
        resposta_sugerida: "resposta".to_owned(),
    }
}

// =============================================================
// Phase transitions
// =============================================================

#[test]
fn toggle_from_closed_begins_opening() {
    let mut drawer = DrawerState::default();
    assert_eq!(drawer.toggle(), ToggleAction::BeginOpen);
    assert_eq!(drawer.phase, DrawerPhase::Opening);
    assert_eq!(drawer.content, DrawerContent::Loading);
}

#[test]
fn opening_occupies_layout_but_is_not_expanded() {
    let mut drawer = DrawerState::default();
    drawer.toggle();
    assert!(drawer.phase.occupies_layout());
    assert!(!drawer.phase.is_expanded());
}

#[test]
fn expand_applied_moves_opening_to_open() {
    let mut drawer = DrawerState::default();
    drawer.toggle();
    drawer.expand_applied();
    assert_eq!(drawer.phase, DrawerPhase::Open);
    assert!(drawer.phase.is_expanded());
}

#[test]
fn expand_applied_is_a_no_op_outside_opening() {
    let mut drawer = DrawerState::default();
    drawer.expand_applied();
    assert_eq!(drawer.phase, DrawerPhase::Closed);

    drawer.toggle();
    drawer.expand_applied();
    drawer.toggle(); // Open -> Closing
    drawer.expand_applied();
    assert_eq!(drawer.phase, DrawerPhase::Closing);
}

#[test]
fn toggle_from_open_begins_closing_and_drops_expansion() {
    let mut drawer = DrawerState::default();
    drawer.toggle();
    drawer.expand_applied();

    assert_eq!(drawer.toggle(), ToggleAction::BeginClose);
    assert_eq!(drawer.phase, DrawerPhase::Closing);
    assert!(drawer.phase.occupies_layout());
    assert!(!drawer.phase.is_expanded());
}

#[test]
fn toggle_while_opening_also_begins_closing() {
    let mut drawer = DrawerState::default();
    drawer.toggle();
    assert_eq!(drawer.toggle(), ToggleAction::BeginClose);
    assert_eq!(drawer.phase, DrawerPhase::Closing);
}

#[test]
fn collapse_finished_removes_panel_from_layout() {
    let mut drawer = DrawerState::default();
    drawer.toggle();
    drawer.expand_applied();
    drawer.toggle();

    // Layout space is held until the animation-completion signal fires.
    assert!(drawer.phase.occupies_layout());
    drawer.collapse_finished();
    assert_eq!(drawer.phase, DrawerPhase::Closed);
    assert!(!drawer.phase.occupies_layout());
}

#[test]
fn toggle_mid_collapse_reopens_and_ignores_stale_completion() {
    let mut drawer = DrawerState::default();
    drawer.toggle();
    drawer.expand_applied();
    drawer.toggle(); // Closing

    assert_eq!(drawer.toggle(), ToggleAction::BeginOpen);
    assert_eq!(drawer.phase, DrawerPhase::Opening);

    // The collapse transition of the aborted close still completes; it must
    // not yank the re-opened panel out of layout.
    drawer.collapse_finished();
    assert_eq!(drawer.phase, DrawerPhase::Opening);
}

// =============================================================
// Content resolution
// =============================================================

#[test]
fn content_loaded_with_entries_renders_the_list() {
    let mut drawer = DrawerState::default();
    drawer.toggle();
    drawer.content_loaded(Ok(vec![entry("1", Some("Pedido"))]));
    match &drawer.content {
        DrawerContent::Entries(list) => assert_eq!(list.len(), 1),
        other => panic!("expected entries, got {other:?}"),
    }
}

#[test]
fn content_loaded_with_empty_collection_shows_empty_message() {
    let mut drawer = DrawerState::default();
    drawer.toggle();
    drawer.content_loaded(Ok(vec![]));
    assert_eq!(drawer.content, DrawerContent::Empty);
}

#[test]
fn failed_fetch_shows_error_without_blocking_expansion() {
    let mut drawer = DrawerState::default();
    drawer.toggle();
    drawer.content_loaded(Err("connection refused".to_owned()));
    assert_eq!(drawer.content, DrawerContent::Error);

    drawer.expand_applied();
    assert_eq!(drawer.phase, DrawerPhase::Open);
}

#[test]
fn reopening_resets_content_to_loading() {
    let mut drawer = DrawerState::default();
    drawer.toggle();
    drawer.content_loaded(Ok(vec![entry("1", None)]));
    drawer.expand_applied();
    drawer.toggle();
    drawer.collapse_finished();

    drawer.toggle();
    assert_eq!(drawer.content, DrawerContent::Loading);
}

// =============================================================
// Refresh gating and titles
// =============================================================

#[test]
fn refresh_only_when_fully_open() {
    let mut drawer = DrawerState::default();
    assert!(!drawer.wants_refresh());

    drawer.toggle();
    assert!(!drawer.wants_refresh()); // Opening: fetch already in flight

    drawer.expand_applied();
    assert!(drawer.wants_refresh());

    drawer.toggle();
    assert!(!drawer.wants_refresh()); // Closing
}

#[test]
fn entry_title_falls_back_when_absent() {
    assert_eq!(entry_title(&entry("1", Some("Pedido"))), "Pedido");
    assert_eq!(entry_title(&entry("2", None)), ENTRY_TITLE_FALLBACK);
}
