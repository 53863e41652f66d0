//! # triagem-ui
//!
//! Leptos + WASM frontend for the email triage service. The user pastes
//! email text or stages a single `.txt`/`.pdf` file, submits exactly one of
//! the two to `POST /api/processar`, and reviews past submissions through a
//! collapsible history drawer backed by `GET /api/historico`.
//!
//! The interaction core lives in `state/` and is browser-free; everything
//! that touches the DOM or the network is gated behind the `csr` feature,
//! so `cargo test` exercises the state machines natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
