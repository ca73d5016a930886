//! Card component for one project in the dashboard grid.
//!
//! DESIGN
//! ======
//! The whole tile is a navigation target: a transparent link is stretched
//! over the card so the cover, title, and description all open the project.

#[cfg(test)]
#[path = "project_card_test.rs"]
mod project_card_test;

use leptos::prelude::*;

use crate::net::types::Project;
use crate::routes::project_route;

/// `data-cy` hook on the card's tile link.
pub const PROJECT_CARD_TEST_ID: &str = "project-card";

/// Navigation target and accessible label for a card's tile link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardLink {
    pub href: String,
    pub label: String,
}

pub fn card_link(project: &Project) -> CardLink {
    CardLink { href: project_route(&project.id), label: project.title.clone() }
}

/// A clickable card representing a project.
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let CardLink { href, label } = card_link(&project);
    let Project { title, description, cover_image, .. } = project;

    view! {
        <div class="project-card">
            <div class="project-card__cover">
                <img class="project-card__image" src=cover_image alt=title.clone()/>
            </div>
            <div class="project-card__body">
                <h3 class="project-card__title">{title}</h3>
                <p class="project-card__desc">{description}</p>
            </div>
            <a class="project-card__link" data-cy=PROJECT_CARD_TEST_ID href=href aria-label=label></a>
        </div>
    }
}
