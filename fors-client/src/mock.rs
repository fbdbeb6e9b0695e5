//! Mock commerce API for tests (enabled with the `mock` feature)
//!
//! In-memory [`CommerceApi`] implementation with scriptable responses and
//! call counters, so view-model behavior can be asserted without a network:
//! which endpoints were hit, how often, and with what arguments.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::CommerceApi;
use crate::error::{ClientError, ClientResult};
use shared::client::{
    CreateOrderRequest, CreateOrderResponse, LoginRequest, PayOutcome, PayResponse, SignupRequest,
};
use shared::models::{DropEvent, Order, OrderStatus, User};

/// Arguments recorded for every call made against the mock
#[derive(Debug, Default)]
pub struct Calls {
    pub me: usize,
    pub login: usize,
    pub logout: usize,
    pub signup: usize,
    pub list_drops: usize,
    pub get_drop: Vec<i64>,
    pub create_order: Vec<(String, CreateOrderRequest)>,
    pub pay_order: Vec<(i64, PayOutcome)>,
    pub my_orders: usize,
    pub get_order: Vec<i64>,
    pub admin_orders: usize,
    pub ship_order: Vec<i64>,
}

#[derive(Debug, Default)]
struct State {
    user: Option<User>,
    drops: Vec<DropEvent>,
    orders: Vec<Order>,
    fail_login: bool,
    fail_drops: bool,
    fail_orders: bool,
    fail_create: bool,
    create_responses: VecDeque<CreateOrderResponse>,
    pay_responses: VecDeque<PayResponse>,
    next_order_id: i64,
    calls: Calls,
}

/// Scriptable in-memory commerce backend
#[derive(Debug, Default)]
pub struct MockApi {
    state: Mutex<State>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Scripting ==========

    pub fn set_user(&self, user: Option<User>) {
        self.state.lock().unwrap().user = user;
    }

    pub fn set_drops(&self, drops: Vec<DropEvent>) {
        self.state.lock().unwrap().drops = drops;
    }

    pub fn set_orders(&self, orders: Vec<Order>) {
        self.state.lock().unwrap().orders = orders;
    }

    pub fn fail_login(&self, fail: bool) {
        self.state.lock().unwrap().fail_login = fail;
    }

    pub fn fail_drops(&self, fail: bool) {
        self.state.lock().unwrap().fail_drops = fail;
    }

    pub fn fail_orders(&self, fail: bool) {
        self.state.lock().unwrap().fail_orders = fail;
    }

    pub fn fail_create(&self, fail: bool) {
        self.state.lock().unwrap().fail_create = fail;
    }

    /// Queue an explicit create-order response (otherwise one is synthesized)
    pub fn push_create_response(&self, resp: CreateOrderResponse) {
        self.state.lock().unwrap().create_responses.push_back(resp);
    }

    /// Queue an explicit pay response (otherwise one is synthesized from the
    /// submitted outcome)
    pub fn push_pay_response(&self, resp: PayResponse) {
        self.state.lock().unwrap().pay_responses.push_back(resp);
    }

    /// Inspect the recorded calls
    pub fn with_calls<R>(&self, f: impl FnOnce(&Calls) -> R) -> R {
        f(&self.state.lock().unwrap().calls)
    }

    fn err() -> ClientError {
        ClientError::Internal("mock failure".to_string())
    }
}

#[async_trait]
impl CommerceApi for MockApi {
    async fn me(&self) -> ClientResult<User> {
        let mut state = self.state.lock().unwrap();
        state.calls.me += 1;
        state.user.clone().ok_or(ClientError::Unauthorized)
    }

    async fn login(&self, _req: &LoginRequest) -> ClientResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.login += 1;
        if state.fail_login {
            return Err(ClientError::Validation("bad credentials".to_string()));
        }
        Ok(())
    }

    async fn logout(&self) -> ClientResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.logout += 1;
        state.user = None;
        Ok(())
    }

    async fn signup(&self, _req: &SignupRequest) -> ClientResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.signup += 1;
        if state.fail_login {
            return Err(ClientError::Validation("email taken".to_string()));
        }
        Ok(())
    }

    async fn list_drops(&self) -> ClientResult<Vec<DropEvent>> {
        let mut state = self.state.lock().unwrap();
        state.calls.list_drops += 1;
        if state.fail_drops {
            return Err(Self::err());
        }
        Ok(state.drops.clone())
    }

    async fn get_drop(&self, id: i64) -> ClientResult<DropEvent> {
        let mut state = self.state.lock().unwrap();
        state.calls.get_drop.push(id);
        if state.fail_drops {
            return Err(Self::err());
        }
        state
            .drops
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("drop {id}")))
    }

    async fn create_order(
        &self,
        idempotency_key: &str,
        req: &CreateOrderRequest,
    ) -> ClientResult<CreateOrderResponse> {
        let mut state = self.state.lock().unwrap();
        state
            .calls
            .create_order
            .push((idempotency_key.to_string(), req.clone()));
        if state.fail_create {
            return Err(Self::err());
        }
        if let Some(resp) = state.create_responses.pop_front() {
            return Ok(resp);
        }
        state.next_order_id += 1;
        Ok(CreateOrderResponse {
            id: 1000 + state.next_order_id,
            status: OrderStatus::PaymentPending,
            expires_at: "2026-08-25T10:05:00".to_string(),
        })
    }

    async fn pay_order(&self, order_id: i64, outcome: PayOutcome) -> ClientResult<PayResponse> {
        let mut state = self.state.lock().unwrap();
        state.calls.pay_order.push((order_id, outcome));
        if let Some(resp) = state.pay_responses.pop_front() {
            return Ok(resp);
        }
        Ok(match outcome {
            PayOutcome::Succeed => PayResponse {
                order_id,
                order_status: OrderStatus::Paid,
                payment_status: "SUCCEEDED".to_string(),
            },
            PayOutcome::Fail => PayResponse {
                order_id,
                order_status: OrderStatus::PaymentPending,
                payment_status: "FAILED".to_string(),
            },
        })
    }

    async fn my_orders(&self) -> ClientResult<Vec<Order>> {
        let mut state = self.state.lock().unwrap();
        state.calls.my_orders += 1;
        if state.fail_orders {
            return Err(Self::err());
        }
        Ok(state.orders.clone())
    }

    async fn get_order(&self, id: i64) -> ClientResult<Order> {
        let mut state = self.state.lock().unwrap();
        state.calls.get_order.push(id);
        if state.fail_orders {
            return Err(Self::err());
        }
        state
            .orders
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("order {id}")))
    }

    async fn admin_orders(&self) -> ClientResult<Vec<Order>> {
        let mut state = self.state.lock().unwrap();
        state.calls.admin_orders += 1;
        if state.fail_orders {
            return Err(Self::err());
        }
        Ok(state.orders.clone())
    }

    async fn ship_order(&self, id: i64) -> ClientResult<Order> {
        let mut state = self.state.lock().unwrap();
        state.calls.ship_order.push(id);
        let order = state
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| ClientError::NotFound(format!("order {id}")))?;
        order.status = OrderStatus::Shipping;
        Ok(order.clone())
    }
}
