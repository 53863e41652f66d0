//! Root application component with shared state contexts.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::home::HomePage;
use crate::state::details::DetailsState;
use crate::state::drawer::DrawerState;
use crate::state::intake::IntakeState;
use crate::state::submission::SubmissionState;

/// Root application component.
///
/// Provides the reactive state contexts every child component reads:
/// intake (text + staged file), submission, drawer and detail overlay.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let intake = RwSignal::new(IntakeState::default());
    let submission = RwSignal::new(SubmissionState::default());
    let drawer = RwSignal::new(DrawerState::default());
    let details = RwSignal::new(DetailsState::default());

    provide_context(intake);
    provide_context(submission);
    provide_context(drawer);
    provide_context(details);

    // Raw browser file handle for the staged slot; browser builds only.
    #[cfg(feature = "csr")]
    provide_context(RwSignal::new(
        crate::components::drop_zone::FileHandleSlot::default(),
    ));

    view! {
        <Title text="Triagem de Emails"/>
        <HomePage/>
    }
}
