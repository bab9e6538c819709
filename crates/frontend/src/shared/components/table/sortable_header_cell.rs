use crate::shared::list_utils::{sort_class, sort_indicator};
use contracts::shared::sort::{SortConfig, SortKey};
use leptos::prelude::*;

/// Column header that reports clicks as sort requests for its key
#[component]
pub fn SortableHeaderCell(
    sort_key: SortKey,
    /// Active sort of the table
    #[prop(into)]
    sort: Signal<SortConfig>,
    on_sort: Callback<SortKey>,
) -> impl IntoView {
    view! {
        <th class="table__header-cell">
            <button
                type="button"
                class="table__sortable-header"
                on:click=move |_| on_sort.run(sort_key)
            >
                {sort_key.label()}
                <span class=move || sort_class(&sort.get(), sort_key)>
                    {move || sort_indicator(&sort.get(), sort_key)}
                </span>
            </button>
        </th>
    }
}
