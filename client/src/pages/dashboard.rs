//! Dashboard page listing the signed-in user's projects.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route, mounted behind the auth route
//! guard. It derives the visible state from the auth store, the board store,
//! and the `page` query parameter, and writes page changes back to the URL.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::add_project::AddProject;
use crate::components::pagination::Pagination;
use crate::components::project_card::ProjectCard;
use crate::components::user_avatar::UserAvatar;
use crate::net::types::{Project, User};
use crate::routes::{PAGE_QUERY_KEY, dashboard_page_route};
use crate::state::auth::AuthState;
use crate::state::board::BoardState;
use crate::util::auth::sign_out;
use crate::util::greeting::{greet, greeting_at, random_greeting};
use crate::util::pagination::{Paginated, ROWS_PER_PAGE, owned_projects, page_count, paginate, parse_page};

/// Grid contents for a user with at least one project.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardListing {
    pub page: Paginated<Project>,
    /// 0-based page index handed to the pager widget.
    pub selected_page: usize,
    pub page_count: usize,
}

/// What the dashboard renders for the current auth, store, and URL state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardView {
    Unauthenticated,
    Empty { user: User },
    Listing(DashboardListing),
}

/// Derive the dashboard state.
///
/// `raw_page` is the unparsed `page` query value; anything that is not a
/// positive integer behaves like page 1.
pub fn derive_view(auth: &AuthState, projects: &[Project], raw_page: Option<&str>) -> DashboardView {
    let Some(user) = auth.user.as_ref() else {
        return DashboardView::Unauthenticated;
    };
    let owned = owned_projects(projects, &user.id);
    if owned.is_empty() {
        return DashboardView::Empty { user: user.clone() };
    }

    let current_page = parse_page(raw_page);
    let page = paginate(&owned, current_page, ROWS_PER_PAGE);
    DashboardView::Listing(DashboardListing {
        selected_page: current_page - 1,
        page_count: page_count(page.count, ROWS_PER_PAGE),
        page: Paginated { results: page.results.into_iter().cloned().collect(), count: page.count },
    })
}

/// Owned-project count shown next to the heading, when non-zero.
pub fn heading_count(view: &DashboardView) -> Option<usize> {
    match view {
        DashboardView::Listing(listing) => Some(listing.page.count),
        DashboardView::Unauthenticated | DashboardView::Empty { .. } => None,
    }
}

/// 1-based `page` query value for a 0-based pager selection.
pub fn page_for_selection(selected: usize) -> usize {
    selected + 1
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let board = expect_context::<RwSignal<BoardState>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let dashboard = Memo::new(move |_| {
        let raw_page = query.with(|q| q.get(PAGE_QUERY_KEY));
        auth.with(|a| board.with(|b| derive_view(a, &b.projects, raw_page.as_deref())))
    });

    let requested_page = RwSignal::new(None::<usize>);
    let on_page_change = Callback::new(move |selected: usize| {
        requested_page.set(Some(page_for_selection(selected)));
    });
    Effect::new(move || {
        if let Some(page) = requested_page.get() {
            requested_page.set(None);
            log::debug!("dashboard page -> {page}");
            navigate(&dashboard_page_route(page), NavigateOptions::default());
        }
    });

    let self_name = move || auth.with(|a| a.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let on_logout = move |_| sign_out(auth);

    view! {
        <div class="dashboard-page">
            <header class="toolbar dashboard-page__toolbar">
                <h1 class="toolbar__title">
                    "Your Projects"
                    {move || {
                        dashboard
                            .with(heading_count)
                            .map(|n| view! { " " <span class="dashboard-page__count">{format!("({n})")}</span> })
                    }}
                </h1>
                <span class="toolbar__spacer"></span>
                <AddProject/>
                <span class="toolbar__self">{self_name}</span>
                <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>

            {move || match dashboard.get() {
                DashboardView::Unauthenticated => ().into_any(),
                DashboardView::Empty { user } => view! { <EmptyDashboard user=user/> }.into_any(),
                DashboardView::Listing(listing) => {
                    view! { <ProjectGrid listing=listing on_page_change=on_page_change/> }.into_any()
                }
            }}
        </div>
    }
}

/// Greeting and call-to-action for a user without projects.
#[component]
fn EmptyDashboard(user: User) -> impl IntoView {
    // Server and first client render agree on the first greeting.
    let greeting = RwSignal::new(greeting_at(0));
    Effect::new(move || greeting.set(random_greeting()));

    let User { name, avatar_url, .. } = user;
    let greeting_name = name.clone();

    view! {
        <section class="dashboard-page__empty">
            <div class="dashboard-page__greeting">
                <h2>{move || greet(greeting.get(), &greeting_name)}</h2>
                <UserAvatar name=name src=avatar_url.unwrap_or_default()/>
            </div>
            <h2 class="dashboard-page__prompt">"Go ahead and create some projects."</h2>
            <AddProject primary=true/>
        </section>
    }
}

#[component]
fn ProjectGrid(listing: DashboardListing, on_page_change: Callback<usize>) -> impl IntoView {
    let DashboardListing { page, selected_page, page_count } = listing;

    view! {
        <div class="dashboard-page__grid">
            {page.results.into_iter().map(|project| view! { <ProjectCard project=project/> }).collect::<Vec<_>>()}
        </div>
        <div class="dashboard-page__pager">
            <Pagination current_page=selected_page page_count=page_count on_page_change=on_page_change/>
        </div>
    }
}
