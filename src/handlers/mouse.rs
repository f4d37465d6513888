//! Mouse Input Handler
//!
//! Drag gestures over list cards feed the swipe tracker; clicks on a
//! revealed action panel fire its action. Cell coordinates are scaled to
//! gesture points before they reach the tracker, so the open threshold and
//! panel widths match the tracker's units. When gestures are disabled the
//! whole handler is bypassed and lists rely on their persistent hotkeys.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::handlers::actions;
use crate::logic::swipe::{SwipeSide, SwipeTracker, POINTS_PER_CELL};
use crate::model::{DragState, Model, RowHit};

pub fn handle_mouse(model: &mut Model, event: MouseEvent) {
    if !model.ui.mouse_gestures {
        return;
    }
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => on_down(model, event.column, event.row),
        MouseEventKind::Drag(MouseButton::Left) => on_drag(model, event.column, event.row),
        MouseEventKind::Up(MouseButton::Left) => on_up(model),
        MouseEventKind::ScrollUp => on_scroll(model, -1),
        MouseEventKind::ScrollDown => on_scroll(model, 1),
        _ => {}
    }
}

fn hit_at(model: &Model, column: u16, row: u16) -> Option<RowHit> {
    model
        .ui
        .row_hits
        .iter()
        .find(|hit| hit.contains(column, row))
        .cloned()
}

fn on_down(model: &mut Model, column: u16, row: u16) {
    if model.has_modal() {
        return;
    }
    let Some(hit) = hit_at(model, column, row) else {
        return;
    };

    // A click on the revealed panel of an open card fires its action.
    if let Some(side) = model.ui.active_swipe.side_of(&hit.id) {
        let panel_cells = (hit.action_width / POINTS_PER_CELL) as u16;
        match side {
            SwipeSide::Left if column < hit.x + panel_cells => {
                actions::swipe_primary(model, &hit.id);
                return;
            }
            SwipeSide::Right if column >= (hit.x + hit.width).saturating_sub(panel_cells) => {
                actions::swipe_secondary(model, &hit.id);
                return;
            }
            // Clicking the content of an open card snaps it shut.
            _ => {
                model.ui.active_swipe.close();
                return;
            }
        }
    }

    let tracker = SwipeTracker::begin(
        i32::from(column) * POINTS_PER_CELL,
        i32::from(row) * POINTS_PER_CELL,
        None,
        hit.caps,
        hit.action_width,
    );
    model.ui.drag = Some(DragState {
        row_id: hit.id,
        tracker,
        action_width: hit.action_width,
    });
}

fn on_drag(model: &mut Model, column: u16, row: u16) {
    if let Some(drag) = model.ui.drag.as_mut() {
        drag.tracker.update(
            i32::from(column) * POINTS_PER_CELL,
            i32::from(row) * POINTS_PER_CELL,
        );
    }
}

fn on_up(model: &mut Model) {
    let Some(drag) = model.ui.drag.take() else {
        return;
    };
    let outcome = drag.tracker.release(drag.action_width);
    match outcome.side {
        Some(side) => {
            // One open card per list; the registry closes the previous one.
            model.ui.active_swipe.open(&drag.row_id, side);
        }
        None => {
            if model.ui.active_swipe.side_of(&drag.row_id).is_some() {
                model.ui.active_swipe.close();
            }
        }
    }
}

fn on_scroll(model: &mut Model, delta: i32) {
    // The modal lock suppresses background scrolling while an overlay is up.
    if model.has_modal() {
        return;
    }
    let key = if delta < 0 {
        crossterm::event::KeyCode::Up
    } else {
        crossterm::event::KeyCode::Down
    };
    super::keyboard::handle_key(
        model,
        crossterm::event::KeyEvent::new(key, crossterm::event::KeyModifiers::NONE),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::swipe::{SwipeCaps, ORDER_ACTION_WIDTH};
    use crate::model::navigation::Tab;
    use crossterm::event::KeyModifiers;

    fn order_hit(id: &str, y: u16) -> RowHit {
        RowHit {
            id: id.to_string(),
            x: 0,
            y,
            width: 60,
            height: 4,
            caps: SwipeCaps::BOTH,
            action_width: ORDER_ACTION_WIDTH,
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_drag_past_threshold_opens_card() {
        let mut model = Model::new();
        model.nav.open_tab(Tab::Orders);
        model.ui.row_hits = vec![order_hit("ORD-002", 0)];

        handle_mouse(&mut model, mouse(MouseEventKind::Down(MouseButton::Left), 10, 1));
        // 9 cells of travel = 90 points, past the 80-point threshold.
        handle_mouse(&mut model, mouse(MouseEventKind::Drag(MouseButton::Left), 19, 1));
        handle_mouse(&mut model, mouse(MouseEventKind::Up(MouseButton::Left), 19, 1));

        assert_eq!(model.ui.active_swipe.side_of("ORD-002"), Some(SwipeSide::Left));
    }

    #[test]
    fn test_short_drag_snaps_back() {
        let mut model = Model::new();
        model.nav.open_tab(Tab::Orders);
        model.ui.row_hits = vec![order_hit("ORD-002", 0)];

        handle_mouse(&mut model, mouse(MouseEventKind::Down(MouseButton::Left), 10, 1));
        handle_mouse(&mut model, mouse(MouseEventKind::Drag(MouseButton::Left), 14, 1));
        handle_mouse(&mut model, mouse(MouseEventKind::Up(MouseButton::Left), 14, 1));

        assert!(model.ui.active_swipe.side_of("ORD-002").is_none());
    }

    #[test]
    fn test_opening_second_card_closes_first() {
        let mut model = Model::new();
        model.nav.open_tab(Tab::Orders);
        model.ui.row_hits = vec![order_hit("ORD-002", 0), order_hit("ORD-001", 4)];

        handle_mouse(&mut model, mouse(MouseEventKind::Down(MouseButton::Left), 10, 1));
        handle_mouse(&mut model, mouse(MouseEventKind::Drag(MouseButton::Left), 20, 1));
        handle_mouse(&mut model, mouse(MouseEventKind::Up(MouseButton::Left), 20, 1));
        assert!(model.ui.active_swipe.side_of("ORD-002").is_some());

        handle_mouse(&mut model, mouse(MouseEventKind::Down(MouseButton::Left), 30, 5));
        handle_mouse(&mut model, mouse(MouseEventKind::Drag(MouseButton::Left), 20, 5));
        handle_mouse(&mut model, mouse(MouseEventKind::Up(MouseButton::Left), 20, 5));

        assert!(model.ui.active_swipe.side_of("ORD-002").is_none());
        assert!(model.ui.active_swipe.side_of("ORD-001").is_some());
    }

    #[test]
    fn test_panel_click_requests_confirmation() {
        let mut model = Model::new();
        model.nav.open_tab(Tab::Orders);
        model.ui.row_hits = vec![order_hit("ORD-002", 0)];
        model.ui.active_swipe.open("ORD-002", SwipeSide::Left);

        // Click inside the 12-cell left panel.
        handle_mouse(&mut model, mouse(MouseEventKind::Down(MouseButton::Left), 3, 1));
        assert!(model.ui.confirm.is_some());
        assert!(!model.ui.active_swipe.is_open());
    }

    #[test]
    fn test_gestures_disabled_bypasses_everything() {
        let mut model = Model::new();
        model.ui.mouse_gestures = false;
        model.nav.open_tab(Tab::Orders);
        model.ui.row_hits = vec![order_hit("ORD-002", 0)];

        handle_mouse(&mut model, mouse(MouseEventKind::Down(MouseButton::Left), 10, 1));
        handle_mouse(&mut model, mouse(MouseEventKind::Drag(MouseButton::Left), 30, 1));
        handle_mouse(&mut model, mouse(MouseEventKind::Up(MouseButton::Left), 30, 1));
        assert!(!model.ui.active_swipe.is_open());
        assert!(model.ui.drag.is_none());
    }

    #[test]
    fn test_vertical_drag_leaves_card_closed() {
        let mut model = Model::new();
        model.nav.open_tab(Tab::Orders);
        model.ui.row_hits = vec![order_hit("ORD-002", 0)];

        handle_mouse(&mut model, mouse(MouseEventKind::Down(MouseButton::Left), 10, 1));
        // Two rows of vertical travel = 20 points, clearly vertical intent.
        handle_mouse(&mut model, mouse(MouseEventKind::Drag(MouseButton::Left), 10, 3));
        handle_mouse(&mut model, mouse(MouseEventKind::Drag(MouseButton::Left), 30, 3));
        handle_mouse(&mut model, mouse(MouseEventKind::Up(MouseButton::Left), 30, 3));
        assert!(!model.ui.active_swipe.is_open());
    }
}
