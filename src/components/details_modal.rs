//! Detail overlay for a single history entry.

use leptos::prelude::*;

use crate::state::details::DetailsState;
use crate::state::submission::{CategoryTone, TITLE_FALLBACK};

#[cfg(feature = "csr")]
use crate::net::api;
#[cfg(feature = "csr")]
use crate::state::details::{DETAILS_FAILED_MSG, find_entry};
#[cfg(feature = "csr")]
use crate::util::notify;

/// Fetch the history collection and reveal the overlay for the entry with
/// this identifier. On fetch failure or no match the user is notified and
/// the overlay stays hidden.
pub fn show_details(details: RwSignal<DetailsState>, id: String) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match api::fetch_history().await {
            Ok(entries) => match find_entry(&entries, &id) {
                Some(entry) => details.update(|d| d.show(entry.clone())),
                None => notify::alert(DETAILS_FAILED_MSG),
            },
            Err(err) => {
                log::error!("falha ao carregar os detalhes do item {id}: {err}");
                notify::alert(DETAILS_FAILED_MSG);
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (details, id);
    }
}

/// Modal overlay showing category, original email, suggested response and
/// title summary for one entry.
#[component]
pub fn DetailsModal() -> impl IntoView {
    let details = expect_context::<RwSignal<DetailsState>>();

    let close = move |_| details.update(DetailsState::close);

    view! {
        <Show when=move || details.get().visible()>
            <div class="modal-backdrop" on:click=close>
                <div class="details-modal" on:click=|ev| ev.stop_propagation()>
                    <button class="modal-close" on:click=close title="Fechar">
                        "✕"
                    </button>
                    {move || {
                        details
                            .get()
                            .entry
                            .map(|entry| {
                                let tone = CategoryTone::from_label(&entry.categoria);
                                let title = entry
                                    .titulo_resumo
                                    .unwrap_or_else(|| TITLE_FALLBACK.to_owned());
                                view! {
                                    <div class="details-modal__body">
                                        <span class=format!(
                                            "category-tag {}",
                                            tone.css_class(),
                                        )>{entry.categoria}</span>
                                        <h3 class="details-modal__title">{title}</h3>
                                        <h4>"Email Original"</h4>
                                        <p class="details-modal__original">{entry.email_original}</p>
                                        <h4>"Resposta Sugerida"</h4>
                                        <p class="details-modal__response">{entry.resposta_sugerida}</p>
                                    </div>
                                }
                            })
                    }}
                </div>
            </div>
        </Show>
    }
}
