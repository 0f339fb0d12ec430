//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`gallery`, `focus`, `contact`, `ui`) and
//! aggregated by `view` so components depend on small focused models while
//! the root owns a single source of truth.

pub mod contact;
pub mod focus;
pub mod gallery;
pub mod ui;
pub mod view;
