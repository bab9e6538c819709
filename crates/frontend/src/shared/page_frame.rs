//! PageFrame — root wrapper of a page.
//!
//! Sets two metadata attributes on the root DOM element:
//!   - `id`                  — `"{entity}--{category}"`, e.g. `"a001_orders--list"`
//!   - `data-page-category`  — one of the PAGE_CAT_* constants

use leptos::prelude::*;

/// List of records — table with search/pagination.
pub const PAGE_CAT_LIST: &str = "list";

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=page_id class="page" data-page-category=category>
            {children()}
        </div>
    }
}

