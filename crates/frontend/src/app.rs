use crate::domain::a001_orders::ui::list::OrdersList;
use crate::shared::config::OrdersViewConfig;
use crate::shared::notifications::{NotificationHost, NotificationService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = OrdersViewConfig::default();

    provide_context(config);
    // Transient notifications for load and update outcomes
    provide_context(NotificationService::new(config.notification_timeout_ms));

    view! {
        <main class="app">
            <OrdersList />
        </main>
        <NotificationHost />
    }
}
