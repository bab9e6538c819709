use crate::shared::components::table::format_currency;
use contracts::domain::a001_order::Order;
use contracts::enums::OrderStatus;
use leptos::prelude::*;

const COLUMN_COUNT: &str = "6";

/// Expanded row under an order: items, shipping, payment and the status editor
#[component]
pub fn OrderDetailsRow(
    order: Order,
    /// Status the editor shows: the pending one while a save is in flight,
    /// otherwise the held one
    shown_status: OrderStatus,
    /// A save for this order is in flight
    saving: bool,
    /// Called with `(record_id, new_status)` when another status is picked
    on_status_change: Callback<(String, OrderStatus)>,
) -> impl IntoView {
    let record_id = order.record_id().to_string();
    let current_status = shown_status;
    let selected_code = current_status.code().to_string();
    let item_key_prefix = order.id.clone();

    let items_view = order
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            view! {
                <div class="order-details__line" data-key=format!("{}-item-{}", item_key_prefix, index)>
                    <span>{format!("{} × {}", item.name, item.quantity)}</span>
                    <span class="order-details__muted">{format_currency(item.line_total())}</span>
                </div>
            }
        })
        .collect_view();

    let shipping = order.shipping.clone();
    let payment = order.payment.clone();
    let tracking = shipping.tracking.clone().unwrap_or_else(|| "—".to_string());

    let unknown_option = (!current_status.is_known()).then(|| {
        let code = current_status.code().to_string();
        view! {
            <option value=code.clone() selected=true disabled=true>{code.clone()}</option>
        }
    });

    let status_options = OrderStatus::all()
        .into_iter()
        .map(|status| {
            let code = status.code().to_string();
            let selected = status == current_status;
            view! { <option value=code.clone() selected=selected>{code.clone()}</option> }
        })
        .collect_view();

    let on_change = {
        let current_status = current_status.clone();
        move |ev: leptos::ev::Event| {
            let status = OrderStatus::from_code(&event_target_value(&ev));
            if status != current_status {
                on_status_change.run((record_id.clone(), status));
            }
        }
    };

    view! {
        <tr class="table__row-details">
            <td colspan=COLUMN_COUNT>
                <div class="order-details">
                    <div class="order-details__section">
                        <h3 class="order-details__title">"Order Items"</h3>
                        {items_view}
                        <div class="order-details__line order-details__total">
                            <span>"Total"</span>
                            <span>{format_currency(order.amount)}</span>
                        </div>
                    </div>

                    <div class="order-details__section">
                        <h3 class="order-details__title">"Shipping Details"</h3>
                        <p class="order-details__muted">{shipping.address}</p>
                        <p>"Method: " <span class="order-details__muted">{shipping.method}</span></p>
                        <p>"Tracking: " <span class="order-details__muted">{tracking}</span></p>
                    </div>

                    <div class="order-details__section">
                        <h3 class="order-details__title">"Payment Information"</h3>
                        <p>"Method: " <span class="order-details__muted">{payment.method}</span></p>
                        {payment.last4.map(|last4| view! {
                            <p>"Card ending in: " <span class="order-details__muted">{last4}</span></p>
                        })}
                        {payment.email.map(|email| view! {
                            <p>"PayPal email: " <span class="order-details__muted">{email}</span></p>
                        })}
                        <p>"Status: " <span class="order-details__muted">{payment.status}</span></p>
                    </div>

                    <div class="order-details__section">
                        <h3 class="order-details__title">"Order Status"</h3>
                        <select
                            class="form__select"
                            prop:value=selected_code
                            disabled=saving
                            on:change=on_change
                        >
                            {unknown_option}
                            {status_options}
                        </select>
                    </div>
                </div>
            </td>
        </tr>
    }
}
