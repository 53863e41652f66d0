//! Rendered classification outcome for the latest submission.

use leptos::prelude::*;

use crate::state::submission::SubmissionState;

#[cfg(feature = "csr")]
use crate::util::notify;

/// Confirmation raised after copying the suggested response.
#[cfg(feature = "csr")]
const COPIED_MSG: &str = "Resposta copiada para a área de transferência!";

/// Category tag, title summary and suggested response, shown once a
/// submission attempt has resolved (success or failure alike).
#[component]
pub fn ResultCard() -> impl IntoView {
    let submission = expect_context::<RwSignal<SubmissionState>>();

    let result = move || submission.get().result;

    let on_copy = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(rendered) = submission.get().result {
                if let Some(window) = web_sys::window() {
                    let _ = window.navigator().clipboard().write_text(&rendered.response);
                }
                notify::alert(COPIED_MSG);
            }
        }
    };

    view! {
        <Show when=move || result().is_some()>
            <section class="results-section">
                <h2>"Resultado da Análise"</h2>
                {move || {
                    result().map(|rendered| {
                        let tag_class = format!("category-tag {}", rendered.tone.css_class());
                        view! {
                            <div class="result-card">
                                <span class=tag_class>{rendered.category}</span>
                                <p class="titulo-resumo-output">{rendered.title}</p>
                                <textarea
                                    class="response-result"
                                    readonly=true
                                    prop:value=rendered.response
                                ></textarea>
                                <button class="btn copy-button" on:click=on_copy>
                                    "Copiar Resposta"
                                </button>
                            </div>
                        }
                    })
                }}
            </section>
        </Show>
    }
}
