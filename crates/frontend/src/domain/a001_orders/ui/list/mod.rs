pub mod details;
pub mod state;

use self::details::OrderDetailsRow;
use self::state::create_state;
use crate::domain::a001_orders::api::{fetch_orders, update_order_status};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{format_currency, SortableHeaderCell};
use crate::shared::components::ui::StatusBadge;
use crate::shared::config::OrdersViewConfig;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::enums::OrderStatus;
use contracts::shared::sort::SortKey;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const TABLE_ID: &str = "a001-orders-table";

#[component]
pub fn OrdersList() -> impl IntoView {
    let config = use_context::<OrdersViewConfig>().unwrap_or_default();
    let notifications = use_notifications();
    let state = create_state(&config);

    let load_orders = move || {
        let Some((token, query)) = state.try_update(|s| (s.begin_load(), s.query())) else {
            return;
        };
        spawn_local(async move {
            match fetch_orders(&query).await {
                Ok(response) => {
                    let count = response.orders.len();
                    let applied = state
                        .try_update(|s| s.apply_loaded(token, response))
                        .unwrap_or(false);
                    if applied {
                        log::debug!("Loaded {} orders (page {})", count, query.page);
                    } else {
                        log::debug!("Discarded stale orders response #{}", token);
                    }
                }
                Err(e) => {
                    match state.try_update(|s| s.apply_load_error(token, &e)).flatten() {
                        Some(message) => {
                            log::warn!("Failed to load orders: {}", e);
                            notifications.error(message);
                        }
                        None => log::debug!("Discarded stale orders error #{}: {}", token, e),
                    }
                }
            }
        });
    };

    // Reload on mount and whenever page, sort or search changes
    let query = Memo::new(move |_| state.with(|s| s.query()));
    Effect::new(move |_| {
        query.track();
        untrack(load_orders);
    });

    let search_query = RwSignal::new(String::new());
    Effect::new(move |_| {
        let v = search_query.get();
        untrack(move || state.update(|s| s.set_search_term(v)));
    });

    let change_status = move |(record_id, status): (String, OrderStatus)| {
        let started = state
            .try_update(|s| s.begin_status_change(&record_id, status.clone()))
            .unwrap_or(false);
        if !started {
            log::debug!("Status save already in flight, ignoring {}", record_id);
            return;
        }
        spawn_local(async move {
            match update_order_status(&record_id, &status).await {
                Ok(()) => {
                    let matched = state
                        .try_update(|s| s.apply_status_change(&record_id, &status))
                        .unwrap_or(false);
                    if !matched {
                        log::debug!("Order {} is no longer on the current page", record_id);
                    }
                    log::debug!("Order {} set to {}", record_id, status);
                    notifications.success("Order status updated successfully");
                }
                Err(e) => {
                    log::warn!("Failed to update order {}: {}", record_id, e);
                    let message = state
                        .try_update(|s| s.reject_status_change(&record_id, &e))
                        .unwrap_or_else(|| e.to_string());
                    notifications.error(message);
                }
            }
        });
    };
    let on_status_change = Callback::new(change_status);

    let toggle_expanded = move |id: &str| state.update(|s| s.toggle_expanded(id));
    let on_sort = Callback::new(move |key: SortKey| state.update(|s| s.toggle_sort(key)));
    let go_to_page = move |new_page: usize| {
        state.update(|s| {
            if new_page < s.page {
                s.previous_page();
            } else if new_page > s.page {
                s.next_page();
            }
        });
    };

    let sort = Signal::derive(move || state.with(|s| s.sort));

    let rows = move || {
        state.with(|s| {
            if s.orders.is_empty() {
                return view! {
                    <tr>
                        <td colspan="6" class="table__empty">"No orders found"</td>
                    </tr>
                }
                .into_any();
            }

            s.orders
                .iter()
                .map(|order| {
                    let expanded = s.is_expanded(&order.id);
                    let shown_status = s.shown_status(order).clone();
                    let saving = s.is_saving(order);
                    let id_row = order.id.clone();
                    let id_button = order.id.clone();

                    view! {
                        <tr
                            class={if expanded { "table__row table__row--expanded" } else { "table__row" }}
                            on:click=move |_| toggle_expanded(&id_row)
                        >
                            <td>
                                <div class="table__id-cell">
                                    {icon(if expanded { "chevron-up" } else { "chevron-down" })}
                                    <span class="table__id">{order.id.clone()}</span>
                                </div>
                            </td>
                            <td>{order.customer.clone()}</td>
                            <td>{order.date.clone()}</td>
                            <td class="table__money">{format_currency(order.amount)}</td>
                            <td><StatusBadge status=order.status.clone() /></td>
                            <td>
                                <button
                                    type="button"
                                    class="button button--ghost button--small"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        toggle_expanded(&id_button);
                                    }
                                >
                                    {if expanded { "Hide" } else { "View" }}
                                </button>
                            </td>
                        </tr>
                        {expanded.then(|| view! {
                            <OrderDetailsRow
                                order=order.clone()
                                shown_status=shown_status
                                saving=saving
                                on_status_change=on_status_change
                            />
                        })}
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    view! {
        <PageFrame page_id="a001_orders--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Orders"
                subtitle="View and manage all customer orders".to_string()
                busy=Signal::derive(move || state.with(|s| s.is_loading && s.is_loaded))
            >
                <div class="search-box">
                    <span class="search-box__icon">{icon("search")}</span>
                    <Input value=search_query placeholder="Search orders..." />
                </div>
                // No handler yet: creating orders happens outside this page
                <Button appearance=ButtonAppearance::Secondary>
                    {icon("plus")}
                    <span>"Create new order"</span>
                </Button>
            </PageHeader>

            <div class="page__content">
                <Show
                    when=move || state.with(|s| s.is_loaded)
                    fallback=|| view! { <div class="page__loading">"Loading orders..."</div> }
                >
                    <div class="table-wrapper">
                        <table id=TABLE_ID class="table__data">
                            <thead>
                                <tr>
                                    {SortKey::all()
                                        .into_iter()
                                        .map(|key| view! {
                                            <SortableHeaderCell sort_key=key sort=sort on_sort=on_sort />
                                        })
                                        .collect_view()}
                                    <th class="table__header-cell">"Status"</th>
                                    <th class="table__header-cell">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>

                        <PaginationControls
                            current_page=Signal::derive(move || state.with(|s| s.page))
                            total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                            total_count=Signal::derive(move || state.with(|s| s.total))
                            page_size=Signal::derive(move || state.with(|s| s.limit))
                            on_page_change=Callback::new(go_to_page)
                        />
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
