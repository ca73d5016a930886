#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::board::ProjectDraft;

#[test]
fn load_json_is_none_outside_browser() {
    save_json("draft", &ProjectDraft { title: "x".to_owned(), ..ProjectDraft::default() });
    assert_eq!(load_json::<ProjectDraft>("draft"), None);
    remove("draft");
}
