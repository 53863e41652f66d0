#[cfg(test)]
#[path = "details_test.rs"]
mod details_test;

use crate::net::types::HistoryEntry;

/// Notification raised when the detail fetch fails or finds no match.
pub const DETAILS_FAILED_MSG: &str =
    "Não foi possível carregar os detalhes do item.";

/// State for the history-entry detail overlay. The overlay is visible
/// exactly when an entry is held.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailsState {
    pub entry: Option<HistoryEntry>,
}

impl DetailsState {
    pub fn visible(&self) -> bool {
        self.entry.is_some()
    }

    /// Populate and reveal the overlay for one resolved entry.
    pub fn show(&mut self, entry: HistoryEntry) {
        self.entry = Some(entry);
    }

    /// Hide the overlay. Holds no other state.
    pub fn close(&mut self) {
        self.entry = None;
    }
}

/// Resolve one entry by identifier. Linear scan; the collection is
/// operationally small.
pub fn find_entry<'a>(entries: &'a [HistoryEntry], id: &str) -> Option<&'a HistoryEntry> {
    entries.iter().find(|entry| entry.id == id)
}
