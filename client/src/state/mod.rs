//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `board`) so pages and components depend
//! on small focused models provided through Leptos context.

pub mod auth;
pub mod board;
