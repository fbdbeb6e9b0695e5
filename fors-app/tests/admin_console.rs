//! Admin console: filtering, search and the shipment transition

mod common;

use std::sync::Arc;

use fors_app::AdminConsole;
use fors_client::mock::MockApi;
use shared::models::OrderStatus;

use common::{ctx, order};

#[tokio::test]
async fn test_search_matches_order_and_user_id_substrings() {
    let api = Arc::new(MockApi::new());
    api.set_orders(vec![
        order(42, 7, 1, OrderStatus::Paid),
        order(420, 8, 1, OrderStatus::PaymentPending),
        order(9, 142, 1, OrderStatus::Delivered),
        order(10, 8, 1, OrderStatus::Paid),
    ]);
    let mut console = AdminConsole::new(ctx(api));
    console.load().await;

    let hits: Vec<i64> = console
        .filtered(None, "42")
        .iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(hits, vec![42, 420, 9]);

    // empty query matches everything
    assert_eq!(console.filtered(None, "").len(), 4);
    // status filter composes with search
    assert_eq!(console.filtered(Some(OrderStatus::Paid), "42").len(), 1);
}

#[tokio::test]
async fn test_ship_only_available_for_paid_orders() {
    let api = Arc::new(MockApi::new());
    api.set_orders(vec![
        order(1, 7, 1, OrderStatus::Paid),
        order(2, 7, 1, OrderStatus::PaymentPending),
        order(3, 7, 1, OrderStatus::Shipping),
    ]);
    let mut console = AdminConsole::new(ctx(api.clone()));
    console.load().await;

    assert!(AdminConsole::can_ship(&console.orders()[0]));
    assert!(!AdminConsole::can_ship(&console.orders()[1]));
    assert!(!AdminConsole::can_ship(&console.orders()[2]));

    // shipping a non-PAID order is rejected locally, no request sent
    console.ship(2).await;
    api.with_calls(|calls| assert!(calls.ship_order.is_empty()));
    assert_eq!(console.orders()[1].status, OrderStatus::PaymentPending);
}

#[tokio::test]
async fn test_ship_patches_row_from_server_response() {
    let api = Arc::new(MockApi::new());
    api.set_orders(vec![order(1, 7, 1, OrderStatus::Paid)]);
    let c = ctx(api.clone());
    let mut console = AdminConsole::new(c.clone());
    console.load().await;

    console.ship(1).await;

    assert_eq!(console.orders()[0].status, OrderStatus::Shipping);
    api.with_calls(|calls| assert_eq!(calls.ship_order, vec![1]));
    assert_eq!(c.notifier().visible().len(), 1);
}
