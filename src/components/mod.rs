//! Leptos view components for the triage page.

pub mod details_modal;
pub mod drop_zone;
pub mod history_drawer;
pub mod result_card;
pub mod submit_panel;
