//! Checkout flow: order creation and simulated payment

mod common;

use std::sync::Arc;

use fors_app::notify::ToastKind;
use fors_app::{Checkout, CheckoutPhase};
use fors_client::mock::MockApi;
use shared::client::{CreateOrderResponse, PayOutcome, PayResponse};
use shared::models::{DropStatus, OrderStatus};

use common::{ctx, live_drop};

#[tokio::test]
async fn test_no_sku_selected_sends_no_request() {
    let api = Arc::new(MockApi::new());
    let ctx = ctx(api.clone());
    let mut checkout = Checkout::new(ctx.clone());

    checkout.create(&live_drop(1), None).await;

    assert_eq!(checkout.phase(), CheckoutPhase::Idle);
    assert!(checkout.order().is_none());
    api.with_calls(|calls| assert!(calls.create_order.is_empty()));

    let toasts = ctx.notifier().visible();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Error);
}

#[tokio::test]
async fn test_guard_rejects_non_live_and_sold_out() {
    let api = Arc::new(MockApi::new());
    let ctx = ctx(api.clone());
    let mut checkout = Checkout::new(ctx.clone());

    let mut ended = live_drop(1);
    ended.status = DropStatus::Ended;
    checkout.create(&ended, Some(11)).await;
    assert_eq!(checkout.phase(), CheckoutPhase::Idle);

    let mut sold_out = live_drop(1);
    sold_out.stocks[0].remaining_qty = 0;
    checkout.create(&sold_out, Some(11)).await;
    assert_eq!(checkout.phase(), CheckoutPhase::Idle);

    api.with_calls(|calls| assert!(calls.create_order.is_empty()));
    assert_eq!(ctx.notifier().visible().len(), 2);
}

#[tokio::test]
async fn test_create_merges_drop_display_fields() {
    let api = Arc::new(MockApi::new());
    let mut checkout = Checkout::new(ctx(api.clone()));
    let drop = live_drop(3);

    checkout.create(&drop, Some(31)).await;

    assert_eq!(checkout.phase(), CheckoutPhase::Pending);
    let order = checkout.order().unwrap();
    assert_eq!(order.status, OrderStatus::PaymentPending);
    assert_eq!(order.display.drop_name, "Drop 3");
    assert_eq!(order.display.drop_brand, "FORS");
    assert_eq!(order.display.amount, 209_000);
    assert_eq!(order.display.size_label, "260");

    api.with_calls(|calls| {
        assert_eq!(calls.create_order.len(), 1);
        let (_, req) = &calls.create_order[0];
        assert_eq!(req.drop_event_id, 3);
        assert_eq!(req.sku_id, 31);
        assert_eq!(req.amount, 209_000);
    });
}

#[tokio::test]
async fn test_each_submission_carries_fresh_idempotency_key() {
    let api = Arc::new(MockApi::new());
    let ctx = ctx(api.clone());
    let drop = live_drop(1);

    let mut first = Checkout::new(ctx.clone());
    first.create(&drop, Some(11)).await;
    let mut second = Checkout::new(ctx);
    second.create(&drop, Some(11)).await;

    api.with_calls(|calls| {
        assert_eq!(calls.create_order.len(), 2);
        assert_ne!(calls.create_order[0].0, calls.create_order[1].0);
        assert!(!calls.create_order[0].0.is_empty());
    });
}

#[tokio::test]
async fn test_pay_success_uses_server_reported_status() {
    let api = Arc::new(MockApi::new());
    let mut checkout = Checkout::new(ctx(api.clone()));
    checkout.create(&live_drop(1), Some(11)).await;

    checkout.pay(PayOutcome::Succeed).await;

    assert_eq!(checkout.phase(), CheckoutPhase::Paid);
    assert_eq!(checkout.order().unwrap().status, OrderStatus::Paid);
    api.with_calls(|calls| {
        assert_eq!(calls.pay_order.len(), 1);
        assert_eq!(calls.pay_order[0].1, PayOutcome::Succeed);
    });
}

#[tokio::test]
async fn test_pay_fail_leaves_order_pending_with_error_toast() {
    let api = Arc::new(MockApi::new());
    let ctx = ctx(api.clone());
    let mut checkout = Checkout::new(ctx.clone());
    checkout.create(&live_drop(1), Some(11)).await;
    let toasts_before = ctx.notifier().visible().len();

    checkout.pay(PayOutcome::Fail).await;

    assert_eq!(checkout.phase(), CheckoutPhase::Pending);
    assert_eq!(checkout.order().unwrap().status, OrderStatus::PaymentPending);
    let toasts = ctx.notifier().visible();
    assert_eq!(toasts.len(), toasts_before + 1);
    assert_eq!(toasts.last().unwrap().kind, ToastKind::Error);

    // another attempt is allowed
    checkout.pay(PayOutcome::Succeed).await;
    assert_eq!(checkout.phase(), CheckoutPhase::Paid);
}

#[tokio::test]
async fn test_pay_echoes_alternate_server_outcome() {
    // a "successful" pay call can still report the order expired; the client
    // must echo that, not assume PAID
    let api = Arc::new(MockApi::new());
    api.push_pay_response(PayResponse {
        order_id: 1001,
        order_status: OrderStatus::Expired,
        payment_status: "FAILED".to_string(),
    });
    let mut checkout = Checkout::new(ctx(api));
    checkout.create(&live_drop(1), Some(11)).await;

    checkout.pay(PayOutcome::Succeed).await;

    assert_eq!(checkout.phase(), CheckoutPhase::Closed);
    assert_eq!(checkout.order().unwrap().status, OrderStatus::Expired);
}

#[tokio::test]
async fn test_pay_is_rejected_before_creation_response() {
    let api = Arc::new(MockApi::new());
    let mut checkout = Checkout::new(ctx(api.clone()));

    checkout.pay(PayOutcome::Succeed).await;

    api.with_calls(|calls| assert!(calls.pay_order.is_empty()));
    assert_eq!(checkout.phase(), CheckoutPhase::Idle);
}

#[tokio::test]
async fn test_create_failure_returns_to_idle() {
    let api = Arc::new(MockApi::new());
    api.fail_create(true);
    let ctx = ctx(api.clone());
    let mut checkout = Checkout::new(ctx.clone());

    checkout.create(&live_drop(1), Some(11)).await;

    assert_eq!(checkout.phase(), CheckoutPhase::Idle);
    assert!(checkout.order().is_none());
    assert_eq!(ctx.notifier().visible().len(), 1);

    // the flow can be retried after a failure, with a new token
    api.fail_create(false);
    checkout.create(&live_drop(1), Some(11)).await;
    assert_eq!(checkout.phase(), CheckoutPhase::Pending);
    api.with_calls(|calls| {
        assert_eq!(calls.create_order.len(), 2);
        assert_ne!(calls.create_order[0].0, calls.create_order[1].0);
    });
}

#[tokio::test]
async fn test_create_echoes_already_paid_idempotent_replay() {
    // the backend may answer an idempotent retry with the existing PAID order
    let api = Arc::new(MockApi::new());
    api.push_create_response(CreateOrderResponse {
        id: 77,
        status: OrderStatus::Paid,
        expires_at: "2026-08-25T10:05:00".to_string(),
    });
    let mut checkout = Checkout::new(ctx(api));

    checkout.create(&live_drop(1), Some(11)).await;

    assert_eq!(checkout.phase(), CheckoutPhase::Paid);
    assert_eq!(checkout.order().unwrap().id, 77);
}
