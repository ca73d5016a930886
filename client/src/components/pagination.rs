//! Page selector rendered under the dashboard grid.
//!
//! The widget is 0-based: `current_page` is the selected index and
//! `on_page_change` receives the newly selected index. Callers translate to
//! the 1-based `page` query value.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

/// Pages shown around the selection.
pub const PAGE_RANGE_DISPLAYED: usize = 3;
/// Pages always shown at either end.
pub const MARGIN_PAGES_DISPLAYED: usize = 1;

/// One entry in the page selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    /// 0-based page index.
    Page(usize),
    /// Collapsed run of hidden pages.
    Break,
}

/// Visible page entries for `page_count` pages with `selected` highlighted.
pub fn page_items(selected: usize, page_count: usize, range: usize, margin: usize) -> Vec<PageItem> {
    if page_count == 0 {
        return Vec::new();
    }
    let range = range.max(1);
    if page_count <= range + 2 * margin {
        return (0..page_count).map(PageItem::Page).collect();
    }

    let selected = selected.min(page_count - 1);
    let mut start = selected.saturating_sub(range / 2);
    let mut end = start + range - 1;
    if end >= page_count {
        end = page_count - 1;
        start = end + 1 - range;
    }

    let mut items = Vec::new();
    for index in 0..page_count {
        let visible = index < margin || index >= page_count - margin || (start..=end).contains(&index);
        if visible {
            items.push(PageItem::Page(index));
        } else if items.last() != Some(&PageItem::Break) {
            items.push(PageItem::Break);
        }
    }
    items
}

#[component]
pub fn Pagination(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] page_count: Signal<usize>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let select = move |index: usize| {
        if index != current_page.get_untracked() && index < page_count.get_untracked() {
            on_page_change.run(index);
        }
    };
    let at_first = move || current_page.get() == 0;
    let at_last = move || current_page.get() + 1 >= page_count.get();

    view! {
        <nav class="pagination" aria-label="Pagination">
            <button
                class="pagination__nav"
                disabled=at_first
                on:click=move |_| {
                    if let Some(prev) = current_page.get_untracked().checked_sub(1) {
                        select(prev);
                    }
                }
            >
                "‹ Previous"
            </button>
            <ul class="pagination__pages">
                {move || {
                    let selected = current_page.get();
                    page_items(selected, page_count.get(), PAGE_RANGE_DISPLAYED, MARGIN_PAGES_DISPLAYED)
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Page(index) => {
                                view! {
                                    <li>
                                        <button
                                            class="pagination__page"
                                            class:pagination__page--active={index == selected}
                                            aria-current={(index == selected).then_some("page")}
                                            on:click=move |_| select(index)
                                        >
                                            {index + 1}
                                        </button>
                                    </li>
                                }
                                    .into_any()
                            }
                            PageItem::Break => view! { <li class="pagination__break">"…"</li> }.into_any(),
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            <button
                class="pagination__nav"
                disabled=at_last
                on:click=move |_| select(current_page.get_untracked() + 1)
            >
                "Next ›"
            </button>
        </nav>
    }
}
