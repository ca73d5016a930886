//! Login page that signs a display name into the local auth store.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::User;
use crate::routes::DASHBOARD_ROUTE;
use crate::state::auth::AuthState;
use crate::util::auth::sign_in;

/// Build a new user from form input, or `None` when the name is blank.
pub fn user_from_form(name: &str, avatar_url: &str) -> Option<User> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let avatar_url = avatar_url.trim();
    Some(User {
        id: uuid::Uuid::new_v4().to_string(),
        name: name.to_owned(),
        avatar_url: (!avatar_url.is_empty()).then(|| avatar_url.to_owned()),
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let avatar_url = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    // Already signed in (fresh sign-in or restored session): go to the dashboard.
    Effect::new(move || {
        if auth.with(AuthState::is_auth) {
            navigate(DASHBOARD_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(user) = user_from_form(&name.get(), &avatar_url.get()) else {
            info.set("Enter a display name first.".to_owned());
            return;
        };
        sign_in(auth, user);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Projects"</h1>
                <p class="login-card__subtitle">"Sign in to see your projects"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Display name"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            info.set(String::new());
                            name.set(event_target_value(&ev));
                        }
                    />
                    <input
                        class="login-input"
                        type="url"
                        placeholder="Avatar URL (optional)"
                        prop:value=move || avatar_url.get()
                        on:input=move |ev| avatar_url.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
