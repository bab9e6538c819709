//! View configuration for the order list page.

use contracts::shared::sort::SortConfig;

/// Orders per page requested from the backend
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// How long a notification stays on screen
pub const DEFAULT_NOTIFICATION_TIMEOUT_MS: u32 = 5_000;

/// Notifications beyond this count push the oldest one out
pub const MAX_VISIBLE_NOTIFICATIONS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrdersViewConfig {
    pub page_size: usize,
    pub default_sort: SortConfig,
    pub notification_timeout_ms: u32,
}

impl Default for OrdersViewConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            default_sort: SortConfig::default(),
            notification_timeout_ms: DEFAULT_NOTIFICATION_TIMEOUT_MS,
        }
    }
}
