use super::*;
use PageItem::{Break, Page};

#[test]
fn no_pages_yields_no_items() {
    assert!(page_items(0, 0, 3, 1).is_empty());
}

#[test]
fn small_counts_list_every_page() {
    assert_eq!(page_items(0, 3, 3, 1), vec![Page(0), Page(1), Page(2)]);
    assert_eq!(page_items(4, 5, 3, 1), vec![Page(0), Page(1), Page(2), Page(3), Page(4)]);
}

#[test]
fn window_at_start_breaks_before_last_page() {
    assert_eq!(page_items(0, 10, 3, 1), vec![Page(0), Page(1), Page(2), Break, Page(9)]);
}

#[test]
fn window_in_middle_breaks_on_both_sides() {
    assert_eq!(page_items(5, 10, 3, 1), vec![Page(0), Break, Page(4), Page(5), Page(6), Break, Page(9)]);
}

#[test]
fn window_at_end_breaks_after_first_page() {
    assert_eq!(page_items(9, 10, 3, 1), vec![Page(0), Break, Page(7), Page(8), Page(9)]);
}

#[test]
fn out_of_range_selection_pins_to_last_page() {
    assert_eq!(page_items(42, 10, 3, 1), page_items(9, 10, 3, 1));
}

#[test]
fn adjacent_margin_and_window_do_not_break() {
    assert_eq!(page_items(2, 10, 3, 1), vec![Page(0), Page(1), Page(2), Page(3), Break, Page(9)]);
}
