//! Order history / detail view-model
//!
//! Lists the authenticated user's orders (server-scoped) with a local status
//! filter, and resolves a single order by id. Each order is enriched with
//! display data from its drop via a read-time join; within one list load the
//! drop detail endpoint is hit at most once per unique drop id.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use shared::models::{DropEvent, Order, OrderStatus};

use crate::context::AppContext;
use crate::util::parse_id;

/// Denormalized drop display fields attached to an order purely for
/// rendering; never serialized back to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDisplay {
    pub drop_name: String,
    pub drop_brand: String,
    pub drop_image_url: String,
    pub amount: i64,
    pub size_label: String,
}

impl OrderDisplay {
    pub fn from_drop(drop: &DropEvent, sku_id: i64) -> Self {
        let size_label = drop
            .stock(sku_id)
            .and_then(|s| s.size_label.clone())
            .unwrap_or_else(|| format!("SKU {sku_id}"));
        Self {
            drop_name: drop.name.clone(),
            drop_brand: drop.brand.clone(),
            drop_image_url: drop.image_url.clone(),
            amount: drop.price,
            size_label,
        }
    }
}

/// An order plus its display enrichment (None when the drop fetch failed)
#[derive(Debug, Clone)]
pub struct OrderView {
    pub order: Order,
    pub display: Option<OrderDisplay>,
}

/// Linear status timeline: Created, Paid, Shipping, Delivered. A step is
/// active if the order has reached it or any later step in normal flow.
/// CANCELED/EXPIRED short-circuit into a terminal failure display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeline {
    /// Number of leading steps that are active (1..=4)
    Steps { reached: usize },
    Failed(OrderStatus),
}

/// Display names for the timeline steps, in order
pub const TIMELINE_STEPS: [&str; 4] = ["Created", "Paid", "Shipping", "Delivered"];

impl Timeline {
    pub fn for_status(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Canceled | OrderStatus::Expired => Timeline::Failed(status),
            OrderStatus::PaymentPending => Timeline::Steps { reached: 1 },
            OrderStatus::Paid => Timeline::Steps { reached: 2 },
            OrderStatus::Shipping => Timeline::Steps { reached: 3 },
            OrderStatus::Delivered => Timeline::Steps { reached: 4 },
        }
    }

    /// Whether step `idx` (0-based into [`TIMELINE_STEPS`]) renders active
    pub fn is_step_active(self, idx: usize) -> bool {
        match self {
            Timeline::Steps { reached } => idx < reached,
            Timeline::Failed(_) => false,
        }
    }
}

/// Order history view-model
pub struct OrderHistory {
    ctx: Arc<AppContext>,
    orders: Vec<OrderView>,
    detail: Option<OrderView>,
    epoch: u64,
}

impl OrderHistory {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        Self {
            ctx,
            orders: Vec::new(),
            detail: None,
            epoch: 0,
        }
    }

    pub fn orders(&self) -> &[OrderView] {
        &self.orders
    }

    pub fn detail(&self) -> Option<&OrderView> {
        self.detail.as_ref()
    }

    /// Local status filter; `None` is the ALL tab. Order-preserving.
    pub fn filtered(&self, status: Option<OrderStatus>) -> Vec<&OrderView> {
        self.orders
            .iter()
            .filter(|v| status.is_none_or(|s| v.order.status == s))
            .collect()
    }

    /// Fetch the user's orders and enrich them with drop display data
    pub async fn load(&mut self) {
        self.epoch += 1;
        let epoch = self.epoch;

        let orders = match self.ctx.api().my_orders().await {
            Ok(orders) => orders,
            Err(err) => {
                debug!(%err, "order list fetch failed");
                self.ctx.notifier().error("Failed to load orders");
                return;
            }
        };

        let views = self.enrich(orders).await;
        if epoch != self.epoch {
            debug!(epoch, "discarding stale order list");
            return;
        }
        self.orders = views;
    }

    /// Load one order by the raw id from the route. A non-numeric id is
    /// rejected locally before any request is made.
    pub async fn load_detail(&mut self, raw_id: &str) {
        let Some(id) = parse_id(raw_id) else {
            self.ctx.notifier().error("Invalid order id");
            return;
        };

        match self.ctx.api().get_order(id).await {
            Ok(order) => {
                let mut views = self.enrich(vec![order]).await;
                self.detail = views.pop();
            }
            Err(err) => {
                debug!(%err, id, "order detail fetch failed");
                self.ctx.notifier().error("Failed to load order");
            }
        }
    }

    /// Read-time join against the catalog, cached per drop id for the
    /// duration of one load. A failed drop fetch leaves that order without
    /// display data; the order row itself still renders.
    async fn enrich(&self, orders: Vec<Order>) -> Vec<OrderView> {
        let mut drops: HashMap<i64, Option<DropEvent>> = HashMap::new();
        let mut views = Vec::with_capacity(orders.len());

        for order in orders {
            if !drops.contains_key(&order.drop_event_id) {
                let fetched = match self.ctx.api().get_drop(order.drop_event_id).await {
                    Ok(drop) => Some(drop),
                    Err(err) => {
                        warn!(%err, drop_id = order.drop_event_id, "enrichment fetch failed");
                        None
                    }
                };
                drops.insert(order.drop_event_id, fetched);
            }
            let display = drops
                .get(&order.drop_event_id)
                .and_then(|d| d.as_ref())
                .map(|d| OrderDisplay::from_drop(d, order.sku_id));
            views.push(OrderView { order, display });
        }
        views
    }
}
