//! Shared fixtures for the view-model integration tests
#![allow(dead_code)]

use std::sync::Arc;

use fors_app::AppContext;
use fors_client::mock::MockApi;
use shared::models::{DropEvent, DropStatus, DropStock, Order, OrderStatus, User, UserRole};

pub fn ctx(api: Arc<MockApi>) -> Arc<AppContext> {
    Arc::new(AppContext::new(api))
}

pub fn user(id: i64, role: UserRole) -> User {
    User {
        id,
        email: format!("user{id}@fors.test"),
        role,
    }
}

pub fn live_drop(id: i64) -> DropEvent {
    DropEvent {
        id,
        name: format!("Drop {id}"),
        brand: "FORS".to_string(),
        price: 209_000,
        image_url: format!("https://cdn.fors.test/{id}.jpg"),
        description: "Limited release".to_string(),
        status: DropStatus::Live,
        starts_at: "2026-08-25T10:00:00".to_string(),
        ends_at: "2026-08-25T12:00:00".to_string(),
        remaining_qty: 5,
        stocks: vec![
            DropStock {
                sku_id: id * 10 + 1,
                size_label: Some("260".to_string()),
                remaining_qty: 3,
            },
            DropStock {
                sku_id: id * 10 + 2,
                size_label: Some("270".to_string()),
                remaining_qty: 2,
            },
        ],
    }
}

pub fn order(id: i64, user_id: i64, drop_event_id: i64, status: OrderStatus) -> Order {
    Order {
        id,
        user_id: Some(user_id),
        drop_event_id,
        sku_id: drop_event_id * 10 + 1,
        status,
        created_at: "2026-08-25T10:00:00".to_string(),
        expires_at: Some("2026-08-25T10:05:00".to_string()),
        paid_at: None,
        shipped_at: None,
        delivered_at: None,
        carrier: None,
        tracking_no: None,
    }
}
