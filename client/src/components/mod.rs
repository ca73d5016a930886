//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and read/write shared state from
//! Leptos context providers.

pub mod add_project;
pub mod pagination;
pub mod project_card;
pub mod user_avatar;
