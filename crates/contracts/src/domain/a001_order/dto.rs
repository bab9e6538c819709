use crate::enums::OrderStatus;
use crate::shared::sort::{SortConfig, SortDirection, SortKey};
use serde::{Deserialize, Serialize};

/// Строка заказа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    /// Unit price
    pub price: f64,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingInfo {
    pub address: String,
    pub method: String,
    pub tracking: Option<String>,
}

/// Payment sub-record. `last4` is set for card payments, `email` for PayPal;
/// whichever fields are present get rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentInfo {
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub status: String,
}

/// Customer order as returned by `GET /api/orders`.
///
/// `amount` comes from the backend as-is and is not recomputed from `items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// Storage identifier, when the backend sends one apart from `id`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    pub customer: String,
    /// Display date, e.g. "6/14/2023"
    pub date: String,
    pub amount: f64,
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub shipping: ShippingInfo,
    #[serde(default)]
    pub payment: PaymentInfo,
}

impl Order {
    /// Identifier used in `PUT /api/orders/{orderId}` and for matching the
    /// updated row afterwards.
    pub fn record_id(&self) -> &str {
        self.order_id.as_deref().unwrap_or(&self.id)
    }
}

/// Query parameters of `GET /api/orders`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListQuery {
    /// 1-based page number
    pub page: usize,
    pub limit: usize,
    pub search: String,
    pub sort_field: SortKey,
    pub sort_order: SortDirection,
}

impl OrderListQuery {
    pub fn new(page: usize, limit: usize, search: &str, sort: SortConfig) -> Self {
        Self {
            page,
            limit,
            search: search.to_string(),
            sort_field: sort.key,
            sort_order: sort.direction,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub total: usize,
    pub total_pages: usize,
}

/// Ответ `GET /api/orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderListResponse {
    pub orders: Vec<Order>,
    pub pagination: PaginationInfo,
}

/// Тело `PUT /api/orders/{orderId}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

/// Error body of any non-2xx response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn card_order() -> serde_json::Value {
        json!({
            "id": "ORD-1001",
            "customer": "John Doe",
            "date": "6/14/2023",
            "amount": 125.99,
            "status": "completed",
            "items": [
                { "name": "Product A", "quantity": 2, "price": 49.99 },
                { "name": "Product B", "quantity": 1, "price": 26.01 }
            ],
            "shipping": {
                "address": "123 Main St, Anytown, USA",
                "method": "Express",
                "tracking": "1Z999AA1234567890"
            },
            "payment": { "method": "Credit Card", "last4": "4242", "status": "Paid" }
        })
    }

    #[test]
    fn test_order_deserialize() {
        let order: Order = serde_json::from_value(card_order()).unwrap();
        assert_eq!(order.id, "ORD-1001");
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.payment.last4.as_deref(), Some("4242"));
        assert_eq!(order.payment.email, None);
        assert!((order.items[0].line_total() - 99.98).abs() < 1e-9);
    }

    #[test]
    fn test_record_id_prefers_order_id() {
        let mut order: Order = serde_json::from_value(card_order()).unwrap();
        assert_eq!(order.record_id(), "ORD-1001");

        order.order_id = Some("64b7f0c2".to_string());
        assert_eq!(order.record_id(), "64b7f0c2");

        let mut raw = card_order();
        raw["orderId"] = json!("abc-1");
        let order: Order = serde_json::from_value(raw).unwrap();
        assert_eq!(order.order_id.as_deref(), Some("abc-1"));
    }

    #[test]
    fn test_sparse_order_defaults() {
        let order: Order = serde_json::from_value(json!({
            "id": "ORD-9",
            "customer": "Nobody",
            "date": "1/1/2024",
            "amount": 0.0,
            "status": "refunded"
        }))
        .unwrap();
        assert!(order.items.is_empty());
        assert_eq!(order.shipping, ShippingInfo::default());
        assert_eq!(order.status, OrderStatus::Other("refunded".to_string()));
    }

    #[test]
    fn test_list_response_shape() {
        let response: OrderListResponse = serde_json::from_value(json!({
            "orders": [card_order()],
            "pagination": { "total": 42, "totalPages": 5 }
        }))
        .unwrap();
        assert_eq!(response.orders.len(), 1);
        assert_eq!(response.pagination.total, 42);
        assert_eq!(response.pagination.total_pages, 5);
    }

    #[test]
    fn test_query_field_names() {
        let query = OrderListQuery::new(2, 10, "doe", SortConfig::default());
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["sortField"], "date");
        assert_eq!(value["sortOrder"], "desc");
        assert_eq!(value["page"], 2);
    }

    #[test]
    fn test_update_request_body() {
        let body = UpdateOrderStatusRequest {
            status: OrderStatus::Completed,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "status": "completed" })
        );
    }

    #[test]
    fn test_error_body_tolerates_missing_field() {
        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.error, None);
        let body: ApiErrorBody = serde_json::from_str(r#"{"error":"Order not found"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("Order not found"));
    }
}
