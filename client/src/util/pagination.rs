//! Ownership filtering and page slicing for the project dashboard.
//!
//! DESIGN
//! ======
//! Page numbers are 1-based and come straight from the `page` query value.
//! Slicing uses independent `(start, end)` bounds: `start = (page - 1) * size`
//! and `end = page * size`, clamped to the list length. A page past the end
//! yields an empty slice rather than snapping back to the last page.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use crate::net::types::Project;

/// Fixed number of project cards per dashboard page.
pub const ROWS_PER_PAGE: usize = 12;

/// One page of results plus the size of the whole filtered set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paginated<T> {
    pub results: Vec<T>,
    pub count: usize,
}

/// Projects whose owner is `owner_id`, in store order.
pub fn owned_projects<'a>(projects: &'a [Project], owner_id: &str) -> Vec<&'a Project> {
    projects.iter().filter(|p| p.created_by == owner_id).collect()
}

/// Parse the raw `page` query value into a 1-based page number.
///
/// Only plain decimal integers are accepted (an optional leading `+` is
/// allowed); hex, exponent, and fractional forms such as `0x2`, `1e1`, or
/// `2.5` are not numbers here. Missing, non-integer, and zero values all map
/// to page 1.
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// Slice `items` for the 1-based `page`. A `page` of 0 is treated as 1.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Paginated<T> {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size);
    let end = page_size.saturating_mul(page).min(items.len());
    let results = items.get(start..end).map(<[T]>::to_vec).unwrap_or_default();
    Paginated { results, count: items.len() }
}

/// Number of pages needed for `count` items.
pub fn page_count(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}
