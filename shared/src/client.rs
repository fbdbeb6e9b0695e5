//! Client-related types shared between client and server contract
//!
//! Request/response DTOs for API communication. The backend serves camelCase
//! JSON; enum values travel as SCREAMING_SNAKE_CASE strings.

use serde::{Deserialize, Serialize};

use crate::models::OrderStatus;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Signup request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

// =============================================================================
// Order API DTOs
// =============================================================================

/// Create order request body (the idempotency token travels in the
/// `Idempotency-Key` header, not here)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub drop_event_id: i64,
    pub sku_id: i64,
    pub amount: i64,
}

/// Create order response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub id: i64,
    pub status: OrderStatus,
    pub expires_at: String,
}

/// Simulated payment outcome submitted by the client
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayOutcome {
    Succeed,
    Fail,
}

/// Pay order request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayRequest {
    pub result: PayOutcome,
}

/// Pay order response
///
/// `order_status` is the authoritative result; the client overwrites its local
/// status with this value and never infers PAID from the call succeeding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayResponse {
    pub order_id: i64,
    pub order_status: OrderStatus,
    pub payment_status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pay_outcome_wire_strings() {
        assert_eq!(serde_json::to_string(&PayOutcome::Succeed).unwrap(), "\"SUCCEED\"");
        assert_eq!(serde_json::to_string(&PayOutcome::Fail).unwrap(), "\"FAIL\"");
    }

    #[test]
    fn test_pay_response_shape() {
        let json = r#"{"orderId": 42, "orderStatus": "PAID", "paymentStatus": "SUCCEEDED"}"#;
        let resp: PayResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.order_status, OrderStatus::Paid);
    }
}
