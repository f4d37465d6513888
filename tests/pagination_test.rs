//! Pagination properties: ceil(N/P) pages, boundary controls disabled at
//! the edges, and the cursor clamped when a filter shrinks the results.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ranchtui::handlers;
use ranchtui::logic::pagination::{page_count, GALLERY_PAGE_SIZE, LIST_PAGE_SIZE};
use ranchtui::model::navigation::Tab;
use ranchtui::model::Model;
use ranchtui::view;

fn key(model: &mut Model, code: KeyCode) {
    handlers::handle_key(model, KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_page_count_is_ceil_of_items_over_size() {
    for (total, size, expected) in [
        (15, GALLERY_PAGE_SIZE, 2),
        (12, GALLERY_PAGE_SIZE, 1),
        (13, GALLERY_PAGE_SIZE, 2),
        (9, LIST_PAGE_SIZE, 2),
        (8, LIST_PAGE_SIZE, 1),
        (0, LIST_PAGE_SIZE, 0),
    ] {
        assert_eq!(page_count(total, size), expected, "{total}/{size}");
    }
}

#[test]
fn test_gallery_next_disabled_on_last_page() {
    let mut model = Model::new();
    model.nav.open_tab(Tab::Gallery);

    let first = view::media_page(&model);
    assert_eq!(first.pages, 2);
    assert!(first.has_next());
    assert!(!first.has_prev());

    key(&mut model, KeyCode::Right);
    let second = view::media_page(&model);
    assert_eq!(second.page, 1);
    assert!(!second.has_next());
    assert!(second.has_prev());

    // Next is disallowed past the last page.
    key(&mut model, KeyCode::Right);
    assert_eq!(view::media_page(&model).page, 1);
}

#[test]
fn test_shop_pages_with_nine_products() {
    let mut model = Model::new();
    model.nav.open_tab(Tab::Shop);

    let first = view::product_page(&model);
    assert_eq!(first.total, 9);
    assert_eq!(first.pages, 2);
    assert_eq!(first.items.len(), 8);

    key(&mut model, KeyCode::Right);
    let second = view::product_page(&model);
    assert_eq!(second.items.len(), 1);
    assert!(!second.has_next());
}

#[test]
fn test_filter_shrink_clamps_page_in_view() {
    let mut model = Model::new();
    model.nav.open_tab(Tab::Gallery);
    key(&mut model, KeyCode::Right);
    assert_eq!(model.nav.gallery.page, 1);

    // Typing a filter resets the cursor; the view clamps regardless.
    key(&mut model, KeyCode::Char('/'));
    key(&mut model, KeyCode::Char('v'));
    let page = view::media_page(&model);
    assert_eq!(page.page, 0);
    assert!(page.total < 12);
}

#[test]
fn test_selection_stays_inside_page() {
    let mut model = Model::new();
    model.nav.open_tab(Tab::Orders);
    for _ in 0..10 {
        key(&mut model, KeyCode::Down);
    }
    let page = view::order_page(&model);
    assert!(model.nav.orders.selected < page.items.len());
}
