use leptos::prelude::*;
use thaw::*;

/// First and last item numbers shown on a 1-based `page`
pub fn showing_range(page: usize, page_size: usize, total: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    let from = page.saturating_sub(1) * page_size + 1;
    let to = (page * page_size).min(total);
    (from, to)
}

pub fn showing_label(page: usize, page_size: usize, total: usize) -> String {
    let (from, to) = showing_range(page, page_size, total);
    format!("Showing {} to {} of {} orders", from, to, total)
}

pub fn is_first_page(page: usize) -> bool {
    page <= 1
}

/// An empty result still counts as one page
pub fn is_last_page(page: usize, total_pages: usize) -> bool {
    page >= total_pages.max(1)
}

/// PaginationControls component - "Showing X to Y of Z" with Previous/Next
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <div class="pagination-info">
                {move || showing_label(current_page.get(), page_size.get(), total_count.get())}
            </div>
            <div class="pagination-buttons">
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    disabled=Signal::derive(move || is_first_page(current_page.get()))
                    on_click=move |_| {
                        let page = current_page.get_untracked();
                        if !is_first_page(page) {
                            on_page_change.run(page - 1);
                        }
                    }
                >
                    "Previous"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    disabled=Signal::derive(move || is_last_page(current_page.get(), total_pages.get()))
                    on_click=move |_| {
                        let page = current_page.get_untracked();
                        if !is_last_page(page, total_pages.get_untracked()) {
                            on_page_change.run(page + 1);
                        }
                    }
                >
                    "Next"
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showing_label() {
        assert_eq!(showing_label(1, 10, 42), "Showing 1 to 10 of 42 orders");
        assert_eq!(showing_label(5, 10, 42), "Showing 41 to 42 of 42 orders");
        assert_eq!(showing_label(2, 10, 20), "Showing 11 to 20 of 20 orders");
        assert_eq!(showing_label(1, 10, 0), "Showing 0 to 0 of 0 orders");
    }

    #[test]
    fn test_page_bounds() {
        assert!(is_first_page(1));
        assert!(!is_first_page(2));

        assert!(is_last_page(5, 5));
        assert!(!is_last_page(4, 5));
        assert!(is_last_page(1, 1));
        assert!(is_last_page(1, 0));
    }
}
