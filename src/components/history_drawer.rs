//! Collapsible history drawer with lazy content fetch.
//!
//! The drawer body is re-fetched on every open and after any submission
//! that resolves while the drawer is open. Two rapid toggles can race two
//! fetches; the later response's render wins (read-only data, no guard).

use leptos::prelude::*;

use crate::components::details_modal::show_details;
use crate::state::details::DetailsState;
use crate::state::drawer::{
    DrawerContent, DrawerState, EMPTY_MSG, FETCH_FAILED_MSG, LOADING_MSG, ToggleAction,
    entry_title,
};
use crate::state::submission::CategoryTone;

#[cfg(feature = "csr")]
use crate::net::api;

/// Delay before applying the expanded state, so the layout slot settles
/// before the expand transition starts.
#[cfg(feature = "csr")]
const EXPAND_DELAY_MS: u32 = 10;

/// Issue the history fetch and resolve it into drawer content.
///
/// Shows the loading placeholder immediately; a failed fetch only replaces
/// the body with the error message, it never touches the drawer phase.
pub fn load_history(drawer: RwSignal<DrawerState>) {
    drawer.update(|d| d.content = DrawerContent::Loading);
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = api::fetch_history().await;
        if let Err(err) = &result {
            log::error!("falha ao carregar o histórico: {err}");
        }
        drawer.update(|d| d.content_loaded(result));
    });
}

/// Toggle button plus the animated history panel.
#[component]
pub fn HistoryDrawer() -> impl IntoView {
    let drawer = expect_context::<RwSignal<DrawerState>>();
    let details = expect_context::<RwSignal<DetailsState>>();

    let on_toggle = move |_| {
        let mut action = ToggleAction::BeginClose;
        drawer.update(|d| action = d.toggle());

        if action == ToggleAction::BeginOpen {
            load_history(drawer);
            #[cfg(feature = "csr")]
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(EXPAND_DELAY_MS).await;
                drawer.update(DrawerState::expand_applied);
            });
            #[cfg(not(feature = "csr"))]
            drawer.update(DrawerState::expand_applied);
        }
        // BeginClose: the expanded class is dropped reactively; the phase
        // advances on the collapse transitionend signal.
    };

    view! {
        <div class="history-drawer">
            <button class="btn history-toggle" on:click=on_toggle>
                "Histórico"
            </button>

            <Show when=move || drawer.get().phase.occupies_layout()>
                <section
                    class="history-section"
                    class:open=move || drawer.get().phase.is_expanded()
                    on:transitionend=move |_| drawer.update(DrawerState::collapse_finished)
                >
                    <div class="history-list">
                        {move || render_content(drawer.get().content, details)}
                    </div>
                </section>
            </Show>
        </div>
    }
}

fn render_content(content: DrawerContent, details: RwSignal<DetailsState>) -> AnyView {
    match content {
        DrawerContent::Loading => {
            view! { <p class="loading-history">{LOADING_MSG}</p> }.into_any()
        }
        DrawerContent::Empty => view! { <p>{EMPTY_MSG}</p> }.into_any(),
        DrawerContent::Error => view! { <p class="error">{FETCH_FAILED_MSG}</p> }.into_any(),
        DrawerContent::Entries(entries) => entries
            .into_iter()
            .map(|entry| {
                let tone = CategoryTone::from_label(&entry.categoria);
                let title = entry_title(&entry).to_owned();
                let id = entry.id;
                view! {
                    <div class="history-item">
                        <div class="history-item__content">
                            <span class=format!(
                                "history-category {}",
                                tone.css_class(),
                            )>{entry.categoria}</span>
                            <span class="history-title">{title}</span>
                        </div>
                        <div class="history-item__actions">
                            <span class="history-time">{entry.timestamp}</span>
                            <button
                                class="btn details-button"
                                on:click=move |_| show_details(details, id.clone())
                            >
                                "Detalhes"
                            </button>
                        </div>
                    </div>
                }
            })
            .collect::<Vec<_>>()
            .into_any(),
    }
}
