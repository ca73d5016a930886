use super::*;

#[test]
fn initial_uppercases_first_char() {
    assert_eq!(initial("ada"), "A");
    assert_eq!(initial("  grace"), "G");
}

#[test]
fn initial_blank_name_is_placeholder() {
    assert_eq!(initial("   "), "?");
}
