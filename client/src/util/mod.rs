//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and display rules
//! from component markup to improve reuse and testability.

pub mod dom;
pub mod floating;
pub mod format;
pub mod markdown;
pub mod modal;
