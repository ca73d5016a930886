//! Project detail page reached from a dashboard card.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::routes::DASHBOARD_ROUTE;
use crate::state::board::BoardState;

#[component]
pub fn ProjectPage() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let params = use_params_map();

    let project = Memo::new(move |_| {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        board.with(|b| b.find(&id).cloned())
    });

    view! {
        <div class="project-page">
            <a class="btn project-page__back" href=DASHBOARD_ROUTE>
                "‹ Your Projects"
            </a>
            {move || match project.get() {
                Some(p) => {
                    view! {
                        <article class="project-page__detail">
                            <img class="project-page__cover" src=p.cover_image alt=p.title.clone()/>
                            <h1>{p.title}</h1>
                            <p class="project-page__desc">{p.description}</p>
                        </article>
                    }
                        .into_any()
                }
                None => view! { <p class="project-page__missing">"Project not found."</p> }.into_any(),
            }}
        </div>
    }
}
