//! Client-side interaction state.
//!
//! DESIGN
//! ======
//! State is split by concern (`intake`, `submission`, `drawer`, `details`)
//! so individual components can depend on small focused models. Every module
//! here is pure and browser-free: components own the `web-sys` surfaces and
//! drive these models through their transition methods.

pub mod details;
pub mod drawer;
pub mod intake;
pub mod submission;
