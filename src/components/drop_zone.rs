//! Drag-and-drop / file-picker surface feeding the single-file intake slot.

use leptos::prelude::*;

use crate::state::intake::IntakeState;

#[cfg(feature = "csr")]
use crate::state::intake::{InjectOutcome, UNSUPPORTED_FILE_MSG};
#[cfg(feature = "csr")]
use crate::util::notify;

/// Holder for the raw browser file handle backing the staged slot.
///
/// Kept out of `IntakeState` so the interaction state stays testable
/// without a browser. Provided as its own context by `app::App`.
#[cfg(feature = "csr")]
#[derive(Clone, Debug, Default)]
pub struct FileHandleSlot(pub Option<web_sys::File>);

/// Drop zone with a hidden file picker and the staged-file status area.
///
/// The surface suppresses default browser navigation on dragover/dragleave/
/// drop and is visually marked as an active target only between dragover
/// and (dragleave | drop).
#[component]
pub fn DropZone() -> impl IntoView {
    let intake = expect_context::<RwSignal<IntakeState>>();
    #[cfg(feature = "csr")]
    let file_slot = expect_context::<RwSignal<FileHandleSlot>>();

    let picker_ref = NodeRef::<leptos::html::Input>::new();

    let on_dragover = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        intake.update(|s| s.drag_active = true);
    };

    let on_dragleave = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        intake.update(|s| s.drag_active = false);
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        intake.update(|s| s.drag_active = false);
        #[cfg(feature = "csr")]
        {
            if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
                stage_file_list(intake, file_slot, picker_ref, &files);
            }
        }
    };

    let on_picker_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            if let Some(files) = input.files() {
                stage_file_list(intake, file_slot, picker_ref, &files);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let on_clear = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        intake.update(IntakeState::clear_file);
        #[cfg(feature = "csr")]
        {
            file_slot.set(FileHandleSlot(None));
            reset_picker(picker_ref);
        }
    };

    view! {
        <div
            class="drop-zone"
            class:conflict=move || intake.get().conflict()
            class:drag-over=move || intake.get().drag_active
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <p class="drop-zone__hint">"Arraste e solte um arquivo .txt ou .pdf aqui, ou"</p>
            <label class="btn drop-zone__picker">
                "Escolher Arquivo"
                <input
                    class="drop-zone__input"
                    type="file"
                    accept=".txt,.pdf"
                    node_ref=picker_ref
                    on:change=on_picker_change
                />
            </label>

            <Show when=move || intake.get().has_file()>
                <div class="file-status-area">
                    <span class="selected-file-name">
                        {move || {
                            intake
                                .get()
                                .staged
                                .map(|file| file.name)
                                .unwrap_or_default()
                        }}
                    </span>
                    <button class="clear-file-button" on:click=on_clear title="Remover arquivo">
                        "✕"
                    </button>
                </div>
            </Show>
        </div>
    }
}

/// Offer a dropped or picked `FileList` to the intake slot. Only the first
/// file is honored; a rejection clears the slot and notifies the user.
#[cfg(feature = "csr")]
fn stage_file_list(
    intake: RwSignal<IntakeState>,
    file_slot: RwSignal<FileHandleSlot>,
    picker_ref: NodeRef<leptos::html::Input>,
    files: &web_sys::FileList,
) {
    let names: Vec<String> = (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| file.name())
        .collect();

    let mut outcome = InjectOutcome::Ignored;
    intake.update(|s| outcome = s.inject_first(&names));

    match outcome {
        InjectOutcome::Staged => {
            file_slot.set(FileHandleSlot(files.get(0)));
        }
        InjectOutcome::Rejected => {
            notify::alert(UNSUPPORTED_FILE_MSG);
            file_slot.set(FileHandleSlot(None));
            reset_picker(picker_ref);
        }
        InjectOutcome::Ignored => {}
    }
}

/// Reset the hidden picker input so the same file can be selected again.
#[cfg(feature = "csr")]
fn reset_picker(picker_ref: NodeRef<leptos::html::Input>) {
    if let Some(input) = picker_ref.get() {
        input.set_value("");
    }
}
