//! HTTP calls of the order list page

use crate::shared::api_utils::api_url;
use contracts::domain::a001_order::{
    ApiErrorBody, OrderListQuery, OrderListResponse, UpdateOrderStatusRequest,
};
use contracts::enums::OrderStatus;
use gloo_net::http::{Request, Response};
use thiserror::Error;

const FETCH_FALLBACK: &str = "Failed to fetch orders";
const UPDATE_FALLBACK: &str = "Failed to update order status";

/// Failure of an orders API call. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx response; `message` is the backend's `error` field or a fallback
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

/// `/api/orders?page=..&limit=..&search=..&sortField=..&sortOrder=..`
pub fn orders_path(query: &OrderListQuery) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))?;
    Ok(format!("/api/orders?{}", qs))
}

pub fn order_path(record_id: &str) -> String {
    format!("/api/orders/{}", urlencoding::encode(record_id))
}

/// Builds the error of a non-2xx response from its raw body
pub fn error_from_body(status: u16, body: &str, fallback: &str) -> ApiError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string());
    ApiError::Server { status, message }
}

async fn server_error(response: Response, fallback: &str) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error_from_body(status, &body, fallback)
}

/// Fetch one page of orders
pub async fn fetch_orders(query: &OrderListQuery) -> Result<OrderListResponse, ApiError> {
    let url = api_url(&orders_path(query)?);

    let response = Request::get(&url)
        .header("Cache-Control", "no-cache, no-store, must-revalidate")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(server_error(response, FETCH_FALLBACK).await);
    }

    response
        .json::<OrderListResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Set the status of a single order. The response body of a successful
/// update is not used.
pub async fn update_order_status(record_id: &str, status: &OrderStatus) -> Result<(), ApiError> {
    let body = UpdateOrderStatusRequest {
        status: status.clone(),
    };

    let response = Request::put(&api_url(&order_path(record_id)))
        .json(&body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(server_error(response, UPDATE_FALLBACK).await);
    }

    Ok(())
}
