use super::*;

fn draft(title: &str) -> ProjectDraft {
    ProjectDraft { title: title.to_owned(), ..ProjectDraft::default() }
}

#[test]
fn board_state_defaults_empty() {
    let s = BoardState::default();
    assert!(s.projects.is_empty());
}

#[test]
fn create_project_appends_owned_project() {
    let mut s = BoardState::default();
    let project = s.create_project(&draft("  Roadmap  "), "u1").unwrap();
    assert_eq!(project.title, "Roadmap");
    assert_eq!(project.created_by, "u1");
    assert_eq!(project.cover_image, PLACEHOLDER_COVER_IMAGE);
    assert_eq!(s.projects, vec![project.clone()]);
    assert_eq!(s.find(&project.id), Some(&project));
}

#[test]
fn create_project_assigns_distinct_ids() {
    let mut s = BoardState::default();
    let a = s.create_project(&draft("A"), "u1").unwrap();
    let b = s.create_project(&draft("B"), "u1").unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn create_project_rejects_blank_title() {
    let mut s = BoardState::default();
    let err = s.create_project(&draft("   "), "u1").unwrap_err();
    assert_eq!(err, ProjectDraftError::EmptyTitle);
    assert!(s.projects.is_empty());
}

#[test]
fn normalized_keeps_explicit_cover_image() {
    let d = ProjectDraft {
        title: "Site".to_owned(),
        description: "  launch plan ".to_owned(),
        cover_image: " https://img.test/c.png ".to_owned(),
    };
    let n = d.normalized().unwrap();
    assert_eq!(n.description, "launch plan");
    assert_eq!(n.cover_image, "https://img.test/c.png");
}

#[test]
fn find_unknown_id_is_none() {
    assert!(BoardState::default().find("missing").is_none());
}
