//! Submission panel: pasted-text input, drop zone, trigger and loading state.

use leptos::prelude::*;

use crate::components::drop_zone::DropZone;
use crate::components::result_card::ResultCard;
use crate::state::intake::IntakeState;
use crate::state::submission::{self, SubmissionState};
use crate::util::notify;

#[cfg(feature = "csr")]
use crate::components::drop_zone::FileHandleSlot;
#[cfg(feature = "csr")]
use crate::components::history_drawer::load_history;
#[cfg(feature = "csr")]
use crate::net::api;
#[cfg(feature = "csr")]
use crate::state::drawer::DrawerState;
#[cfg(feature = "csr")]
use crate::state::submission::{ResultView, SubmitRequest};

/// Text input plus trigger for the exclusive-OR submission workflow.
///
/// While a request is in flight the trigger is disabled and the loading
/// indicator replaces any prior result, so at most one classification
/// request is ever outstanding.
#[component]
pub fn SubmitPanel() -> impl IntoView {
    let intake = expect_context::<RwSignal<IntakeState>>();
    let submission_state = expect_context::<RwSignal<SubmissionState>>();
    #[cfg(feature = "csr")]
    let drawer = expect_context::<RwSignal<DrawerState>>();
    #[cfg(feature = "csr")]
    let file_slot = expect_context::<RwSignal<FileHandleSlot>>();

    let on_process = move |_| {
        let (text, has_file) = {
            let state = intake.get();
            (state.text.clone(), state.has_file())
        };

        match submission::validate(&text, has_file) {
            Err(block) => notify::alert(block.message()),
            Ok(request) => {
                submission_state.update(SubmissionState::begin);

                #[cfg(feature = "csr")]
                {
                    let file = file_slot.get().0;
                    leptos::task::spawn_local(async move {
                        let outcome = match request {
                            SubmitRequest::Text(content) => api::classify_text(&content).await,
                            SubmitRequest::File => match file.as_ref() {
                                Some(handle) => api::classify_file(handle).await,
                                None => Err("staged file handle missing".to_owned()),
                            },
                        };

                        let rendered = match outcome {
                            Ok(resp) => ResultView::from_response(&resp),
                            Err(err) => {
                                log::error!("falha ao processar email: {err}");
                                ResultView::network_failure()
                            }
                        };
                        submission_state.update(|s| s.finish(rendered));

                        // Newly created entries appear without reopening.
                        if drawer.get_untracked().wants_refresh() {
                            load_history(drawer);
                        }
                    });
                }
                #[cfg(not(feature = "csr"))]
                {
                    let _ = request;
                }
            }
        }
    };

    view! {
        <section class="submit-panel">
            <textarea
                class="email-input"
                class:conflict=move || intake.get().conflict()
                placeholder="Cole aqui o conteúdo do email..."
                prop:value=move || intake.get().text
                on:input=move |ev| intake.update(|s| s.text = event_target_value(&ev))
            ></textarea>

            <DropZone/>

            <button
                class="btn btn--primary process-button"
                on:click=on_process
                disabled=move || submission_state.get().in_flight()
            >
                "Processar Email"
            </button>

            <Show when=move || submission_state.get().in_flight()>
                <div class="loading-indicator">"Processando..."</div>
            </Show>

            <ResultCard/>
        </section>
    }
}
