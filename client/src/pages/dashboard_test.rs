use super::*;

fn ada() -> User {
    User { id: "ada".to_owned(), name: "Ada".to_owned(), avatar_url: None }
}

fn projects_for(owner: &str, n: usize) -> Vec<Project> {
    (0..n)
        .map(|i| Project {
            id: format!("{owner}-{i}"),
            title: format!("Project {i}"),
            description: String::new(),
            cover_image: "/cover.png".to_owned(),
            created_by: owner.to_owned(),
        })
        .collect()
}

fn listing(view: DashboardView) -> DashboardListing {
    match view {
        DashboardView::Listing(listing) => listing,
        other => panic!("expected listing, got {other:?}"),
    }
}

#[test]
fn unauthenticated_derives_no_project_data() {
    let projects = projects_for("ada", 5);
    let view = derive_view(&AuthState::default(), &projects, None);
    assert_eq!(view, DashboardView::Unauthenticated);
    assert_eq!(heading_count(&view), None);
}

#[test]
fn no_owned_projects_shows_empty_state_for_user() {
    let others = projects_for("bob", 4);
    let view = derive_view(&AuthState::signed_in(ada()), &others, Some("2"));
    assert_eq!(view, DashboardView::Empty { user: ada() });
    assert_eq!(heading_count(&view), None);
}

#[test]
fn empty_state_greeting_names_the_user() {
    let DashboardView::Empty { user } = derive_view(&AuthState::signed_in(ada()), &[], None) else {
        panic!("expected empty state");
    };
    assert!(greet(greeting_at(0), &user.name).contains("Ada"));
}

#[test]
fn first_page_of_25_when_page_unset() {
    let projects = projects_for("ada", 25);
    let l = listing(derive_view(&AuthState::signed_in(ada()), &projects, None));
    assert_eq!(l.page.results, projects[..12].to_vec());
    assert_eq!(l.page.count, 25);
    assert_eq!(l.page_count, 3);
    assert_eq!(l.selected_page, 0);
}

#[test]
fn page_three_of_25_shows_last_project() {
    let projects = projects_for("ada", 25);
    let l = listing(derive_view(&AuthState::signed_in(ada()), &projects, Some("3")));
    assert_eq!(l.page.results, vec![projects[24].clone()]);
    assert_eq!(l.selected_page, 2);
    assert_eq!(l.page_count, 3);
}

#[test]
fn invalid_page_values_match_page_one() {
    let projects = projects_for("ada", 25);
    let auth = AuthState::signed_in(ada());
    let page_one = derive_view(&auth, &projects, Some("1"));
    for raw in [None, Some("abc"), Some(""), Some("0"), Some("-1")] {
        assert_eq!(derive_view(&auth, &projects, raw), page_one, "raw={raw:?}");
    }
}

#[test]
fn page_beyond_last_keeps_listing_with_empty_slice() {
    let projects = projects_for("ada", 25);
    let l = listing(derive_view(&AuthState::signed_in(ada()), &projects, Some("9")));
    assert!(l.page.results.is_empty());
    assert_eq!(l.page.count, 25);
    assert_eq!(l.page_count, 3);
}

#[test]
fn only_owned_projects_are_counted_and_listed() {
    let mut projects = projects_for("bob", 3);
    projects.extend(projects_for("ada", 2));
    projects.extend(projects_for("bob", 3));
    let view = derive_view(&AuthState::signed_in(ada()), &projects, None);
    assert_eq!(heading_count(&view), Some(2));
    let l = listing(view);
    assert!(l.page.results.iter().all(|p| p.created_by == "ada"));
    assert_eq!(l.page_count, 1);
}

#[test]
fn first_created_project_leaves_empty_state() {
    let mut board = BoardState::default();
    let auth = AuthState::signed_in(ada());
    assert!(matches!(derive_view(&auth, &board.projects, None), DashboardView::Empty { .. }));

    let draft = crate::state::board::ProjectDraft { title: "First".to_owned(), ..Default::default() };
    board.create_project(&draft, "ada").unwrap();
    let l = listing(derive_view(&auth, &board.projects, None));
    assert_eq!(l.page.count, 1);
    assert_eq!(l.page.results[0].title, "First");
}

#[test]
fn page_for_selection_is_one_based() {
    assert_eq!(page_for_selection(0), 1);
    assert_eq!(page_for_selection(2), 3);
}
