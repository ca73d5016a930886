//! Round avatar for the signed-in user.

#[cfg(test)]
#[path = "user_avatar_test.rs"]
mod user_avatar_test;

use leptos::prelude::*;

/// Profile image when one is set, otherwise the name's initial.
#[component]
pub fn UserAvatar(name: String, #[prop(optional)] src: Option<String>) -> impl IntoView {
    match src.filter(|s| !s.trim().is_empty()) {
        Some(src) => view! { <img class="user-avatar" src=src alt=name/> }.into_any(),
        None => view! { <span class="user-avatar user-avatar--initial">{initial(&name)}</span> }.into_any(),
    }
}

/// Uppercase first character of `name`, or `?` for a blank name.
pub fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}
