use contracts::enums::OrderStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || badge_variant_class(variant.get().as_deref().unwrap_or("neutral"));
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

fn badge_variant_class(variant: &str) -> &'static str {
    match variant {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "error" => "badge--error",
        _ => "badge--neutral",
    }
}

/// Badge colour of an order status: completed is green, processing blue,
/// cancelled red, anything else grey.
pub fn status_variant(status: &OrderStatus) -> &'static str {
    match status {
        OrderStatus::Completed => "success",
        OrderStatus::Processing => "primary",
        OrderStatus::Cancelled => "error",
        OrderStatus::Other(_) => "neutral",
    }
}

/// Read-only order status badge
#[component]
pub fn StatusBadge(status: OrderStatus) -> impl IntoView {
    let variant = status_variant(&status);
    let text = status.code().to_string();

    view! {
        <Badge variant=variant.to_string() class="badge--status".to_string()>
            {text}
        </Badge>
    }
}
