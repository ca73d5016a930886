//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ProtectedRoute, Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, login::LoginPage, project::ProjectPage};
use crate::routes::LOGIN_ROUTE;
use crate::state::{auth::AuthState, board::BoardState};
use crate::util::auth::{auth_condition, install_session_restore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and board stores and guards project routes on the auth
/// state before their views are constructed.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::restoring());
    let board = RwSignal::new(BoardState::default());
    provide_context(auth);
    provide_context(board);
    install_session_restore(auth);

    let signed_in = move || auth.with(auth_condition);
    let login_path = || LOGIN_ROUTE;

    view! {
        <Stylesheet id="leptos" href="/pkg/project-dashboard.css"/>
        <Title text="Your Projects"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ProtectedRoute
                    path=StaticSegment("")
                    view=DashboardPage
                    condition=signed_in
                    redirect_path=login_path
                    fallback=|| view! { <p class="route-loading">"Loading..."</p> }
                />
                <ProtectedRoute
                    path=(StaticSegment("project"), ParamSegment("id"))
                    view=ProjectPage
                    condition=signed_in
                    redirect_path=login_path
                    fallback=|| view! { <p class="route-loading">"Loading..."</p> }
                />
            </Routes>
        </Router>
    }
}
