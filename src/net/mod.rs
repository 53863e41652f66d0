//! Wire types and HTTP helpers for the classification service.

pub mod api;
pub mod types;
