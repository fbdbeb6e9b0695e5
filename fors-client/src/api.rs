//! Commerce API surface
//!
//! [`CommerceApi`] abstracts every backend operation the client uses, so the
//! application layer can be driven against a mock in tests. [`HttpClient`] is
//! the production implementation.

use async_trait::async_trait;

use crate::{ClientResult, HttpClient};
use shared::client::{
    CreateOrderRequest, CreateOrderResponse, LoginRequest, PayOutcome, PayRequest, PayResponse,
    SignupRequest,
};
use shared::models::{DropEvent, Order, User};

/// Generate a fresh idempotency token for one order-creation submission.
///
/// A new token per submission means a retried click after a network hiccup is
/// deduplicated by the backend, while a deliberate second attempt is not.
pub fn new_idempotency_key() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Typed view of the commerce backend
#[async_trait]
pub trait CommerceApi: Send + Sync {
    // ========== Auth API ==========

    /// Get the current session identity
    async fn me(&self) -> ClientResult<User>;

    /// Login with email and password (session cookie set by the server)
    async fn login(&self, req: &LoginRequest) -> ClientResult<()>;

    /// Logout, invalidating the server session
    async fn logout(&self) -> ClientResult<()>;

    /// Register a new account
    async fn signup(&self, req: &SignupRequest) -> ClientResult<()>;

    // ========== Drop API ==========

    /// List all drops (without per-SKU stocks)
    async fn list_drops(&self) -> ClientResult<Vec<DropEvent>>;

    /// Get one drop with its stocks
    async fn get_drop(&self, id: i64) -> ClientResult<DropEvent>;

    // ========== Order API ==========

    /// Create an order; `idempotency_key` travels in the `Idempotency-Key` header
    async fn create_order(
        &self,
        idempotency_key: &str,
        req: &CreateOrderRequest,
    ) -> ClientResult<CreateOrderResponse>;

    /// Submit a simulated payment outcome for an order
    async fn pay_order(&self, order_id: i64, outcome: PayOutcome) -> ClientResult<PayResponse>;

    /// List the authenticated user's own orders (server-scoped)
    async fn my_orders(&self) -> ClientResult<Vec<Order>>;

    /// Get one of the authenticated user's orders
    async fn get_order(&self, id: i64) -> ClientResult<Order>;

    // ========== Admin API ==========

    /// List all orders (admin only; server re-enforces the role)
    async fn admin_orders(&self) -> ClientResult<Vec<Order>>;

    /// Transition a PAID order to SHIPPING, returning the updated order
    async fn ship_order(&self, id: i64) -> ClientResult<Order>;
}

#[async_trait]
impl CommerceApi for HttpClient {
    async fn me(&self) -> ClientResult<User> {
        self.get("/api/auth/me").await
    }

    async fn login(&self, req: &LoginRequest) -> ClientResult<()> {
        self.post_unit("/api/auth/login", req).await
    }

    async fn logout(&self) -> ClientResult<()> {
        self.post_empty_unit("/api/auth/logout").await
    }

    async fn signup(&self, req: &SignupRequest) -> ClientResult<()> {
        self.post_unit("/api/auth/signup", req).await
    }

    async fn list_drops(&self) -> ClientResult<Vec<DropEvent>> {
        self.get("/api/drops").await
    }

    async fn get_drop(&self, id: i64) -> ClientResult<DropEvent> {
        self.get(&format!("/api/drops/{id}")).await
    }

    async fn create_order(
        &self,
        idempotency_key: &str,
        req: &CreateOrderRequest,
    ) -> ClientResult<CreateOrderResponse> {
        self.post_with_headers("/api/orders", &[("Idempotency-Key", idempotency_key)], req)
            .await
    }

    async fn pay_order(&self, order_id: i64, outcome: PayOutcome) -> ClientResult<PayResponse> {
        self.post(
            &format!("/api/orders/{order_id}/pay"),
            &PayRequest { result: outcome },
        )
        .await
    }

    async fn my_orders(&self) -> ClientResult<Vec<Order>> {
        self.get("/api/orders/me").await
    }

    async fn get_order(&self, id: i64) -> ClientResult<Order> {
        self.get(&format!("/api/orders/{id}")).await
    }

    async fn admin_orders(&self) -> ClientResult<Vec<Order>> {
        self.get("/api/admin/orders").await
    }

    async fn ship_order(&self, id: i64) -> ClientResult<Order> {
        self.post_empty(&format!("/api/admin/orders/{id}/ship")).await
    }
}
