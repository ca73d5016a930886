//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure list
//! derivation from page and component logic to improve reuse and testability.

pub mod auth;
pub mod greeting;
pub mod pagination;
pub mod ui_persistence;
