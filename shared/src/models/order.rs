//! Order Model

use serde::{Deserialize, Serialize};

/// Order status as reported by the backend
///
/// The client only reads these or requests transitions; it never computes the
/// next status itself beyond echoing a server response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    PaymentPending,
    Paid,
    Canceled,
    Expired,
    Shipping,
    Delivered,
}

impl OrderStatus {
    /// CANCELED and EXPIRED are terminal failure states (server restores stock)
    pub fn is_terminal_failure(self) -> bool {
        matches!(self, Self::Canceled | Self::Expired)
    }
}

/// Order record (server shape)
///
/// Display-only fields joined in from the drop catalog live in the
/// application layer, not here; this struct is exactly what the wire carries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub drop_event_id: i64,
    pub sku_id: i64,
    pub status: OrderStatus,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipped_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_no: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_order_shape() {
        let json = r#"{
            "id": 42,
            "userId": 7,
            "dropEventId": 3,
            "skuId": 11,
            "status": "PAYMENT_PENDING",
            "createdAt": "2026-08-25T10:00:00",
            "expiresAt": "2026-08-25T10:05:00"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::PaymentPending);
        assert_eq!(order.user_id, Some(7));
        assert!(order.carrier.is_none());
    }

    #[test]
    fn test_terminal_failure_states() {
        assert!(OrderStatus::Canceled.is_terminal_failure());
        assert!(OrderStatus::Expired.is_terminal_failure());
        assert!(!OrderStatus::Paid.is_terminal_failure());
        assert!(!OrderStatus::Delivered.is_terminal_failure());
    }
}
