//! Small browser-facing helpers.

pub mod notify;
