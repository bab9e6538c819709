use crate::domain::a001_orders::api::ApiError;
use crate::shared::components::pagination_controls::{is_first_page, is_last_page};
use crate::shared::config::OrdersViewConfig;
use contracts::domain::a001_order::{Order, OrderListQuery, OrderListResponse};
use contracts::enums::OrderStatus;
use contracts::shared::sort::{SortConfig, SortKey};
use leptos::prelude::*;

/// State of the order list page.
///
/// Every transition the page performs lives here so that the component only
/// wires events to these methods. Loads are stamped with a sequence token;
/// a response carrying an older token is dropped.
#[derive(Clone, Debug)]
pub struct OrdersListState {
    pub orders: Vec<Order>,
    pub search_term: String,
    pub sort: SortConfig,
    /// `Order::id` of the row whose detail panel is open
    pub expanded_id: Option<String>,
    /// `(record_id, status)` of a status save that is still in flight
    pub pending_status: Option<(String, OrderStatus)>,
    pub is_loading: bool,
    pub is_loaded: bool,
    // Pagination fields (page is 1-based)
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
    request_seq: u64,
}

impl OrdersListState {
    pub fn new(config: &OrdersViewConfig) -> Self {
        Self {
            orders: Vec::new(),
            search_term: String::new(),
            sort: config.default_sort,
            expanded_id: None,
            pending_status: None,
            is_loading: false,
            is_loaded: false,
            page: 1,
            limit: config.page_size.max(1),
            total: 0,
            total_pages: 0,
            request_seq: 0,
        }
    }

    /// Parameters of the next `GET /api/orders`
    pub fn query(&self) -> OrderListQuery {
        OrderListQuery::new(self.page, self.limit, &self.search_term, self.sort)
    }

    /// Marks a load as started and returns its token
    pub fn begin_load(&mut self) -> u64 {
        self.request_seq += 1;
        self.is_loading = true;
        self.request_seq
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.request_seq
    }

    /// Replaces the list with a fetched page. Returns `false` and leaves the
    /// state untouched when a newer load has been started since.
    pub fn apply_loaded(&mut self, token: u64, response: OrderListResponse) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.orders = response.orders;
        self.total = response.pagination.total;
        self.total_pages = response.pagination.total_pages;
        self.is_loading = false;
        self.is_loaded = true;

        let last = self.last_page();
        if self.page > last {
            self.page = last;
        }
        if let Some(id) = &self.expanded_id {
            if !self.orders.iter().any(|o| &o.id == id) {
                self.expanded_id = None;
            }
        }
        true
    }

    /// A failed load keeps the previously shown orders. Returns the message
    /// to notify with, or `None` when a newer load has been started since.
    pub fn apply_load_error(&mut self, token: u64, error: &ApiError) -> Option<String> {
        if !self.is_current(token) {
            return None;
        }
        self.is_loading = false;
        self.is_loaded = true;
        Some(error.to_string())
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = self.sort.toggled(key);
        self.page = 1;
    }

    pub fn set_search_term(&mut self, term: String) {
        if term == self.search_term {
            return;
        }
        self.search_term = term;
        self.page = 1;
    }

    /// Opens the row's details, or closes them if that row is the open one
    pub fn toggle_expanded(&mut self, id: &str) {
        if self.is_expanded(id) {
            self.expanded_id = None;
        } else {
            self.expanded_id = Some(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_id.as_deref() == Some(id)
    }

    pub fn last_page(&self) -> usize {
        self.total_pages.max(1)
    }

    pub fn can_go_previous(&self) -> bool {
        !is_first_page(self.page)
    }

    pub fn can_go_next(&self) -> bool {
        !is_last_page(self.page, self.total_pages)
    }

    pub fn previous_page(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn next_page(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Starts a status save. Returns `false` when another save is in flight.
    pub fn begin_status_change(&mut self, record_id: &str, status: OrderStatus) -> bool {
        if self.pending_status.is_some() {
            return false;
        }
        self.pending_status = Some((record_id.to_string(), status));
        true
    }

    pub fn is_saving(&self, order: &Order) -> bool {
        matches!(&self.pending_status, Some((id, _)) if id == order.record_id())
    }

    /// Status the editor of `order` shows
    pub fn shown_status<'a>(&'a self, order: &'a Order) -> &'a OrderStatus {
        match &self.pending_status {
            Some((id, status)) if id == order.record_id() => status,
            _ => &order.status,
        }
    }

    /// Drops a rejected save; the rows keep their held status
    pub fn reject_status_change(&mut self, record_id: &str, error: &ApiError) -> String {
        if matches!(&self.pending_status, Some((id, _)) if id == record_id) {
            self.pending_status = None;
        }
        error.to_string()
    }

    /// Applies a status the backend accepted. Only the rows whose
    /// `record_id()` matches are touched; returns whether any matched.
    pub fn apply_status_change(&mut self, record_id: &str, status: &OrderStatus) -> bool {
        if matches!(&self.pending_status, Some((id, _)) if id == record_id) {
            self.pending_status = None;
        }
        let mut matched = false;
        for order in self.orders.iter_mut().filter(|o| o.record_id() == record_id) {
            order.status = status.clone();
            matched = true;
        }
        matched
    }
}

impl Default for OrdersListState {
    fn default() -> Self {
        Self::new(&OrdersViewConfig::default())
    }
}

/// Create state signal
pub fn create_state(config: &OrdersViewConfig) -> RwSignal<OrdersListState> {
    RwSignal::new(OrdersListState::new(config))
}
