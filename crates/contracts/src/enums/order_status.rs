use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status.
///
/// On the wire the status is a plain lower-case string. Values the backend
/// sends that are not one of the known statuses are kept in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Completed,
    Processing,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    /// Wire code of the status
    pub fn code(&self) -> &str {
        match self {
            OrderStatus::Completed => "completed",
            OrderStatus::Processing => "processing",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Other(raw) => raw.as_str(),
        }
    }

    /// Statuses a user can pick in the status editor
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Completed,
            OrderStatus::Processing,
            OrderStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "completed" => OrderStatus::Completed,
            "processing" => OrderStatus::Processing,
            "cancelled" => OrderStatus::Cancelled,
            other => OrderStatus::Other(other.to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, OrderStatus::Other(_))
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        OrderStatus::from_code(&value)
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        match value {
            OrderStatus::Other(raw) => raw,
            known => known.code().to_string(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
