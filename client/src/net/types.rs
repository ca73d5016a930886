//! Shared DTOs for users and projects.
//!
//! DESIGN
//! ======
//! These types are plain serde records so the stores can persist them to
//! browser storage and the SSR pass can render them without conversion.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name shown in greetings and the header.
    pub name: String,
    /// Profile image URL, if the user has one.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A project summary as held by the board store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier (UUID string).
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Cover image URL rendered at the top of the project card.
    pub cover_image: String,
    /// Identifier of the owning user.
    pub created_by: String,
}
