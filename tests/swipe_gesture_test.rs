//! Swipe gesture properties, driven end-to-end through the mouse handler:
//! threshold snapping, panel widths, vertical-intent abort, and the
//! one-open-card rule.

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ranchtui::handlers;
use ranchtui::logic::swipe::{
    SwipeCaps, SwipeSide, SwipeTracker, CARD_ACTION_WIDTH, ORDER_ACTION_WIDTH, POINTS_PER_CELL,
    SWIPE_THRESHOLD,
};
use ranchtui::model::navigation::Tab;
use ranchtui::model::{Model, RowHit};

fn mouse(model: &mut Model, kind: MouseEventKind, column: u16, row: u16) {
    handlers::handle_mouse(
        model,
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        },
    );
}

fn pending_order_hit() -> RowHit {
    RowHit {
        id: "ORD-002".to_string(),
        x: 0,
        y: 0,
        width: 70,
        height: 4,
        caps: SwipeCaps::BOTH,
        action_width: ORDER_ACTION_WIDTH,
    }
}

#[test]
fn test_release_past_threshold_rests_at_panel_width() {
    let mut tracker = SwipeTracker::begin(0, 0, None, SwipeCaps::BOTH, ORDER_ACTION_WIDTH);
    tracker.update(SWIPE_THRESHOLD + 5, 0);
    let outcome = tracker.release(ORDER_ACTION_WIDTH);
    assert_eq!(outcome.side, Some(SwipeSide::Left));
    assert_eq!(outcome.offset, 120, "order panel is 120 points wide");

    let mut tracker = SwipeTracker::begin(0, 0, None, SwipeCaps::BOTH, CARD_ACTION_WIDTH);
    tracker.update(-(SWIPE_THRESHOLD + 5), 0);
    let outcome = tracker.release(CARD_ACTION_WIDTH);
    assert_eq!(outcome.side, Some(SwipeSide::Right));
    assert_eq!(outcome.offset, -100, "product panel is 100 points wide");
}

#[test]
fn test_release_under_threshold_returns_to_zero() {
    let mut tracker = SwipeTracker::begin(0, 0, None, SwipeCaps::BOTH, ORDER_ACTION_WIDTH);
    tracker.update(SWIPE_THRESHOLD - 1, 0);
    let outcome = tracker.release(ORDER_ACTION_WIDTH);
    assert_eq!(outcome.side, None);
    assert_eq!(outcome.offset, 0);
}

#[test]
fn test_mouse_drag_crossing_threshold_opens_order_card() {
    let mut model = Model::new();
    model.nav.open_tab(Tab::Orders);
    model.ui.row_hits = vec![pending_order_hit()];

    // 9 cells * 10 points = 90 points of travel.
    mouse(&mut model, MouseEventKind::Down(MouseButton::Left), 5, 1);
    mouse(&mut model, MouseEventKind::Drag(MouseButton::Left), 14, 1);
    mouse(&mut model, MouseEventKind::Up(MouseButton::Left), 14, 1);

    assert_eq!(
        model.ui.active_swipe.side_of("ORD-002"),
        Some(SwipeSide::Left)
    );
}

#[test]
fn test_vertical_scroll_intent_never_moves_horizontally() {
    let mut tracker = SwipeTracker::begin(100, 100, None, SwipeCaps::BOTH, ORDER_ACTION_WIDTH);
    // Early movement dominated by y.
    assert_eq!(tracker.update(103, 130), 0);
    // A later large horizontal move stays ignored.
    assert_eq!(tracker.update(250, 130), 0);
    assert!(tracker.aborted());
}

#[test]
fn test_only_one_card_open_per_list() {
    let mut model = Model::new();
    model.nav.open_tab(Tab::Orders);
    let mut second = pending_order_hit();
    second.id = "ORD-001".to_string();
    second.y = 4;
    model.ui.row_hits = vec![pending_order_hit(), second];

    mouse(&mut model, MouseEventKind::Down(MouseButton::Left), 5, 1);
    mouse(&mut model, MouseEventKind::Drag(MouseButton::Left), 15, 1);
    mouse(&mut model, MouseEventKind::Up(MouseButton::Left), 15, 1);
    assert!(model.ui.active_swipe.side_of("ORD-002").is_some());

    mouse(&mut model, MouseEventKind::Down(MouseButton::Left), 40, 5);
    mouse(&mut model, MouseEventKind::Drag(MouseButton::Left), 30, 5);
    mouse(&mut model, MouseEventKind::Up(MouseButton::Left), 30, 5);

    assert!(
        model.ui.active_swipe.side_of("ORD-002").is_none(),
        "first card snapped shut"
    );
    assert_eq!(
        model.ui.active_swipe.side_of("ORD-001"),
        Some(SwipeSide::Right)
    );
}

#[test]
fn test_panel_click_fires_action_through_confirm_gate() {
    let mut model = Model::new();
    model.nav.open_tab(Tab::Orders);
    model.ui.row_hits = vec![pending_order_hit()];
    model.ui.active_swipe.open("ORD-002", SwipeSide::Left);

    let panel_cells = (ORDER_ACTION_WIDTH / POINTS_PER_CELL) as u16;
    mouse(
        &mut model,
        MouseEventKind::Down(MouseButton::Left),
        panel_cells - 1,
        1,
    );

    // The swipe action still routes through the confirmation dialog.
    assert!(model.ui.confirm.is_some());
    assert_eq!(
        model.catalog.orders.get("ORD-002").unwrap().status,
        ranchtui::domain::OrderStatus::Pending
    );
}

#[test]
fn test_non_pending_orders_cannot_swipe_open() {
    let mut tracker = SwipeTracker::begin(0, 0, None, SwipeCaps::NONE, ORDER_ACTION_WIDTH);
    assert_eq!(tracker.update(200, 0), 0, "both sides gated shut");
    let outcome = tracker.release(ORDER_ACTION_WIDTH);
    assert_eq!(outcome.side, None);
}
