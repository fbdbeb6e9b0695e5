//! Admin order console
//!
//! Privileged view over all orders with status filtering, free-text search
//! and the PAID -> SHIPPING transition. The route guard in front of this view
//! is a UX convenience only; the server re-enforces the admin role on every
//! endpoint this calls.

use std::sync::Arc;

use tracing::debug;

use shared::models::{Order, OrderStatus};

use crate::context::AppContext;

/// Admin console view-model
pub struct AdminConsole {
    ctx: Arc<AppContext>,
    orders: Vec<Order>,
    epoch: u64,
    /// Shipment form inputs. Collected for the operator but not transmitted:
    /// the ship endpoint currently takes no body.
    /// TODO: send carrier/tracking once the backend contract accepts them.
    pub carrier_input: String,
    pub tracking_input: String,
}

impl AdminConsole {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        Self {
            ctx,
            orders: Vec::new(),
            epoch: 0,
            carrier_input: String::new(),
            tracking_input: String::new(),
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Fetch all orders
    pub async fn load(&mut self) {
        self.epoch += 1;
        let epoch = self.epoch;
        let result = self.ctx.api().admin_orders().await;
        if epoch != self.epoch {
            debug!(epoch, "discarding stale admin order list");
            return;
        }
        match result {
            Ok(orders) => self.orders = orders,
            Err(err) => {
                debug!(%err, "admin order list fetch failed");
                self.ctx.notifier().error("Failed to load orders");
            }
        }
    }

    /// Status filter plus case-insensitive substring search over order id
    /// and user id. An empty query matches everything.
    pub fn filtered(&self, status: Option<OrderStatus>, query: &str) -> Vec<&Order> {
        let query = query.trim().to_lowercase();
        self.orders
            .iter()
            .filter(|o| status.is_none_or(|s| o.status == s))
            .filter(|o| {
                if query.is_empty() {
                    return true;
                }
                o.id.to_string().to_lowercase().contains(&query)
                    || o.user_id
                        .is_some_and(|uid| uid.to_string().to_lowercase().contains(&query))
            })
            .collect()
    }

    /// The shipment action is only available for PAID orders
    pub fn can_ship(order: &Order) -> bool {
        order.status == OrderStatus::Paid
    }

    /// Request the PAID -> SHIPPING transition and patch the local row from
    /// the server's returned order.
    pub async fn ship(&mut self, order_id: i64) {
        let Some(idx) = self.orders.iter().position(|o| o.id == order_id) else {
            return;
        };
        if !Self::can_ship(&self.orders[idx]) {
            self.ctx.notifier().error("Only paid orders can be shipped");
            return;
        }

        match self.ctx.api().ship_order(order_id).await {
            Ok(updated) => {
                debug!(order_id, status = ?updated.status, "order shipped");
                self.orders[idx] = updated;
                self.ctx.notifier().success("Order marked as shipping");
            }
            Err(err) => {
                debug!(%err, order_id, "ship request failed");
                self.ctx.notifier().error("Failed to ship order");
            }
        }
    }
}
