//! The mark-as-paid flow: a pending order confirmed as paid flips status,
//! raises a success toast, and the open detail view reflects the change.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ranchtui::domain::OrderStatus;
use ranchtui::handlers::{self, actions};
use ranchtui::model::navigation::{OrdersMode, Tab};
use ranchtui::model::{Model, ToastKind};

fn key(model: &mut Model, code: KeyCode) {
    handlers::handle_key(model, KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_ord_002_mark_paid_via_confirm() {
    let mut model = Model::new();
    assert_eq!(
        model.catalog.orders.get("ORD-002").unwrap().status,
        OrderStatus::Pending
    );

    actions::request_mark_paid(&mut model, "ORD-002");
    actions::execute_confirm(&mut model);

    assert_eq!(
        model.catalog.orders.get("ORD-002").unwrap().status,
        OrderStatus::Paid
    );
    let toast = model.ui.toast.as_ref().unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
    assert!(toast.message.contains("ORD-002"));
    assert!(toast.message.contains("pagada"));
}

#[test]
fn test_detail_view_reflects_new_status() {
    let mut model = Model::new();
    model.nav.open_tab(Tab::Orders);

    // Filter down to ORD-002 and open its detail.
    model.nav.search_query = "ORD-002".to_string();
    key(&mut model, KeyCode::Enter);
    assert_eq!(model.nav.orders_mode, OrdersMode::Detail);
    assert_eq!(model.nav.detail_order.as_deref(), Some("ORD-002"));

    // Mark paid from the detail view: p, then confirm.
    key(&mut model, KeyCode::Char('p'));
    assert!(model.ui.confirm.is_some());
    key(&mut model, KeyCode::Enter);

    // The detail view reads through the repository, so the displayed
    // record is already paid.
    let shown = model
        .nav
        .detail_order
        .as_deref()
        .and_then(|id| model.catalog.orders.get(id))
        .unwrap();
    assert_eq!(shown.status, OrderStatus::Paid);
}

#[test]
fn test_cancel_order_raises_error_toast() {
    let mut model = Model::new();
    actions::request_cancel_order(&mut model, "ORD-002");
    actions::execute_confirm(&mut model);

    assert_eq!(
        model.catalog.orders.get("ORD-002").unwrap().status,
        OrderStatus::Cancelled
    );
    assert_eq!(model.ui.toast.as_ref().unwrap().kind, ToastKind::Error);
}

#[test]
fn test_paid_order_cannot_be_marked_again_from_keyboard() {
    let mut model = Model::new();
    model.nav.open_tab(Tab::Orders);
    model.nav.search_query = "ORD-001".to_string();
    key(&mut model, KeyCode::Char('p'));
    assert!(model.ui.confirm.is_none(), "ORD-001 is already paid");
}

#[test]
fn test_cancelled_order_cannot_be_cancelled_again() {
    let mut model = Model::new();
    model.nav.open_tab(Tab::Orders);
    model.nav.search_query = "ORD-004".to_string();
    key(&mut model, KeyCode::Char('x'));
    assert!(model.ui.confirm.is_none(), "ORD-004 is already cancelled");
}
