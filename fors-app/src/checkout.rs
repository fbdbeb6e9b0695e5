//! Checkout flow
//!
//! Order creation and simulated payment for one selected drop variant.
//! Every transition after Create is driven solely by server responses: the
//! displayed status is always the status the backend returned, never a value
//! inferred from a call having succeeded.

use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::debug;

use fors_client::{CreateOrderRequest, PayOutcome, new_idempotency_key};
use shared::models::{DropEvent, OrderStatus};

use crate::context::AppContext;
use crate::orders::OrderDisplay;

/// Where the flow currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutPhase {
    /// No order yet
    #[default]
    Idle,
    /// Creation request in flight
    Creating,
    /// Order exists, awaiting a payment attempt
    Pending,
    /// Payment request in flight
    Paying,
    /// Server reported PAID
    Paid,
    /// Server reported a terminal state (canceled or expired)
    Closed,
}

/// The order being checked out, merged with drop display fields known at
/// creation time. Display data is denormalized once here and never re-derived
/// from the order alone.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub id: i64,
    pub status: OrderStatus,
    pub expires_at: String,
    pub display: OrderDisplay,
}

/// Checkout view-model
pub struct Checkout {
    ctx: Arc<AppContext>,
    phase: CheckoutPhase,
    order: Option<OrderDraft>,
}

impl Checkout {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        Self {
            ctx,
            phase: CheckoutPhase::Idle,
            order: None,
        }
    }

    pub fn phase(&self) -> CheckoutPhase {
        self.phase
    }

    pub fn order(&self) -> Option<&OrderDraft> {
        self.order.as_ref()
    }

    /// Create an order for the selected variant.
    ///
    /// Entry guard: a SKU must be selected and the drop must be LIVE with
    /// stock remaining for that SKU; otherwise a toast is raised and no
    /// request is sent. Each submission carries a fresh idempotency token so
    /// a retried click cannot double-reserve.
    pub async fn create(&mut self, drop: &DropEvent, selected_sku: Option<i64>) {
        if self.phase != CheckoutPhase::Idle {
            debug!(phase = ?self.phase, "create rejected, order already in progress");
            self.ctx.notifier().error("An order is already in progress");
            return;
        }
        let Some(sku_id) = selected_sku else {
            self.ctx.notifier().error("Select a size first");
            return;
        };
        if !drop.purchasable(sku_id) {
            self.ctx.notifier().error("This drop is not available");
            return;
        }

        self.phase = CheckoutPhase::Creating;
        let key = new_idempotency_key();
        let req = CreateOrderRequest {
            drop_event_id: drop.id,
            sku_id,
            amount: drop.price,
        };

        match self.ctx.api().create_order(&key, &req).await {
            Ok(resp) => {
                debug!(order_id = resp.id, status = ?resp.status, "order created");
                self.phase = match resp.status {
                    OrderStatus::Paid => CheckoutPhase::Paid,
                    s if s.is_terminal_failure() => CheckoutPhase::Closed,
                    _ => CheckoutPhase::Pending,
                };
                self.order = Some(OrderDraft {
                    id: resp.id,
                    status: resp.status,
                    expires_at: resp.expires_at,
                    display: OrderDisplay::from_drop(drop, sku_id),
                });
                self.ctx.notifier().success("Order created");
            }
            Err(err) => {
                debug!(%err, "order creation failed");
                self.phase = CheckoutPhase::Idle;
                self.ctx.notifier().error("Failed to create order");
            }
        }
    }

    /// Submit a simulated payment outcome.
    ///
    /// Only legal once the creation response has been applied; the local
    /// status is overwritten with the server-reported one. A failed payment
    /// leaves the order PAYMENT_PENDING for another attempt.
    pub async fn pay(&mut self, outcome: PayOutcome) {
        if self.phase != CheckoutPhase::Pending {
            debug!(phase = ?self.phase, "pay rejected outside Pending");
            return;
        }
        let Some(order_id) = self.order.as_ref().map(|o| o.id) else {
            return;
        };

        self.phase = CheckoutPhase::Paying;
        match self.ctx.api().pay_order(order_id, outcome).await {
            Ok(resp) => {
                debug!(order_id, status = ?resp.order_status, "payment response");
                if let Some(order) = self.order.as_mut() {
                    order.status = resp.order_status;
                }
                self.phase = match resp.order_status {
                    OrderStatus::Paid => {
                        self.ctx.notifier().success("Payment complete");
                        CheckoutPhase::Paid
                    }
                    s if s.is_terminal_failure() => {
                        self.ctx.notifier().error("Order is no longer payable");
                        CheckoutPhase::Closed
                    }
                    _ => {
                        self.ctx.notifier().error("Payment failed, try again");
                        CheckoutPhase::Pending
                    }
                };
            }
            Err(err) => {
                debug!(%err, order_id, "payment request failed");
                self.phase = CheckoutPhase::Pending;
                self.ctx.notifier().error("Payment failed, try again");
            }
        }
    }

    /// Informational time-left text for the payment window. Expiry itself is
    /// enforced by the backend; nothing here transitions the order.
    pub fn expiry_hint(&self, now: NaiveDateTime) -> Option<String> {
        let order = self.order.as_ref()?;
        let expires = NaiveDateTime::parse_from_str(&order.expires_at, "%Y-%m-%dT%H:%M:%S%.f").ok()?;
        let remaining = expires.signed_duration_since(now);
        if remaining.num_seconds() <= 0 {
            return Some("Payment window closed".to_string());
        }
        let mins = remaining.num_minutes();
        let secs = remaining.num_seconds() % 60;
        Some(format!("Pay within {mins}m {secs}s"))
    }
}
