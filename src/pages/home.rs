//! Single triage page: submission panel, history drawer and detail modal.

use leptos::prelude::*;

use crate::components::details_modal::DetailsModal;
use crate::components::history_drawer::HistoryDrawer;
use crate::components::submit_panel::SubmitPanel;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="triage-page">
            <header class="triage-page__header">
                <h1>"Triagem de Emails"</h1>
                <p class="triage-page__subtitle">
                    "Cole o conteúdo de um email ou envie um arquivo para "
                    "classificá-lo e gerar uma resposta sugerida."
                </p>
            </header>

            <SubmitPanel/>
            <HistoryDrawer/>
            <DetailsModal/>
        </main>
    }
}
