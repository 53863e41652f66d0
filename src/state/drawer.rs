#[cfg(test)]
#[path = "drawer_test.rs"]
mod drawer_test;

use crate::net::types::HistoryEntry;

/// Title fallback for a history entry without `titulo_resumo`.
pub const ENTRY_TITLE_FALLBACK: &str = "Sem Título";

/// List placeholder while the history fetch is in progress.
pub const LOADING_MSG: &str = "Carregando histórico...";

/// List message when the service returns an empty collection.
pub const EMPTY_MSG: &str = "Nenhum histórico encontrado.";

/// List message when the history fetch fails.
pub const FETCH_FAILED_MSG: &str = "Falha ao carregar o histórico.";

/// Animated lifecycle of the collapsible history panel.
///
/// `Opening` and `Closing` both occupy layout space; only `Open` carries the
/// expanded visual state. The Opening → Open step is applied after a minimal
/// scheduling delay so the layout slot exists before the expand transition
/// starts; Closing → Closed waits for the collapse `transitionend` signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl DrawerPhase {
    /// Whether the panel currently takes layout space at all.
    pub fn occupies_layout(self) -> bool {
        self != DrawerPhase::Closed
    }

    /// Whether the expanded visual state (the `open` class) is applied.
    pub fn is_expanded(self) -> bool {
        self == DrawerPhase::Open
    }
}

/// What the drawer body currently renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DrawerContent {
    #[default]
    Loading,
    Entries(Vec<HistoryEntry>),
    Empty,
    Error,
}

/// Effect the presentation layer must perform after a toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    /// Reveal the layout slot, issue the history fetch, and schedule the
    /// expand step.
    BeginOpen,
    /// Start the collapse animation and wait for its completion signal.
    BeginClose,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawerState {
    pub phase: DrawerPhase,
    pub content: DrawerContent,
}

impl DrawerState {
    /// User toggle. A toggle during `Closing` re-opens the drawer, matching
    /// the class-driven behavior of the original panel; the stale collapse
    /// completion is ignored by the `collapse_finished` guard.
    pub fn toggle(&mut self) -> ToggleAction {
        match self.phase {
            DrawerPhase::Closed | DrawerPhase::Closing => {
                self.phase = DrawerPhase::Opening;
                self.content = DrawerContent::Loading;
                ToggleAction::BeginOpen
            }
            DrawerPhase::Opening | DrawerPhase::Open => {
                self.phase = DrawerPhase::Closing;
                ToggleAction::BeginClose
            }
        }
    }

    /// Apply the expanded visual state once the layout slot has settled.
    /// No-op unless the drawer is still `Opening`.
    pub fn expand_applied(&mut self) {
        if self.phase == DrawerPhase::Opening {
            self.phase = DrawerPhase::Open;
        }
    }

    /// Collapse animation completed. No-op unless the drawer is still
    /// `Closing` — the panel may have been re-opened mid-collapse.
    pub fn collapse_finished(&mut self) {
        if self.phase == DrawerPhase::Closing {
            self.phase = DrawerPhase::Closed;
        }
    }

    /// Resolve the pending fetch into rendered content. A failed fetch only
    /// affects the body; it never blocks the Opening → Open transition.
    pub fn content_loaded(&mut self, result: Result<Vec<HistoryEntry>, String>) {
        self.content = match result {
            Ok(entries) if entries.is_empty() => DrawerContent::Empty,
            Ok(entries) => DrawerContent::Entries(entries),
            Err(_) => DrawerContent::Error,
        };
    }

    /// Whether a completed submission should refresh the list. Only a fully
    /// open drawer refreshes; during `Opening` a fetch is already in flight.
    pub fn wants_refresh(&self) -> bool {
        self.phase == DrawerPhase::Open
    }
}

/// Display title for a history entry.
pub fn entry_title(entry: &HistoryEntry) -> &str {
    entry
        .titulo_resumo
        .as_deref()
        .unwrap_or(ENTRY_TITLE_FALLBACK)
}
