//! "New Project" action: a trigger button plus its create dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered in the dashboard header and again in the empty state. The created
//! project is appended to the shared `BoardState`, owned by the signed-in
//! user, which flips the dashboard out of its empty state.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::board::{BoardState, ProjectDraft};
use crate::util::ui_persistence;

const DRAFT_STORAGE_KEY: &str = "project_dashboard_new_project_draft";

#[component]
pub fn AddProject(#[prop(optional)] primary: bool) -> impl IntoView {
    let show_create = RwSignal::new(false);
    let draft = RwSignal::new(ProjectDraft::default());

    let on_open = move |_| {
        draft.set(ui_persistence::load_json::<ProjectDraft>(DRAFT_STORAGE_KEY).unwrap_or_default());
        show_create.set(true);
    };
    let on_cancel = Callback::new(move |()| show_create.set(false));

    view! {
        <button class="btn add-project" class:btn--primary=primary on:click=on_open>
            "+ New Project"
        </button>
        <Show when=move || show_create.get()>
            <CreateProjectDialog draft=draft on_cancel=on_cancel/>
        </Show>
    }
}

/// Modal dialog for creating a new project.
#[component]
fn CreateProjectDialog(draft: RwSignal<ProjectDraft>, on_cancel: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let board = expect_context::<RwSignal<BoardState>>();
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        draft.with(|d| ui_persistence::save_json(DRAFT_STORAGE_KEY, d));
    });

    let submit = Callback::new(move |()| {
        let Some(owner_id) = auth.with_untracked(|a| a.user.as_ref().map(|u| u.id.clone())) else {
            return;
        };
        let current = draft.get_untracked();
        match board.try_update(|b| b.create_project(&current, &owner_id)) {
            Some(Ok(project)) => {
                log::info!("created project {} for {owner_id}", project.id);
                ui_persistence::remove(DRAFT_STORAGE_KEY);
                draft.set(ProjectDraft::default());
                on_cancel.run(());
            }
            Some(Err(e)) => error.set(Some(e.to_string())),
            None => {}
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Project"</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft.with(|d| d.title.clone())
                        on:input=move |ev| {
                            error.set(None);
                            draft.update(|d| d.title = event_target_value(&ev));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input dialog__input--multiline"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Cover image URL"
                    <input
                        class="dialog__input"
                        type="url"
                        placeholder="https://"
                        prop:value=move || draft.with(|d| d.cover_image.clone())
                        on:input=move |ev| draft.update(|d| d.cover_image = event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__danger">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
