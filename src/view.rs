//! View selectors: filtered, paginated snapshots of the catalog for the
//! screen that is currently visible. Handlers and renderers share these so
//! the row under the cursor is always the row on screen.

use crate::domain::{Category, Media, Order, Product};
use crate::logic::filter;
use crate::logic::pagination::{self, GALLERY_PAGE_SIZE, LIST_PAGE_SIZE};
use crate::model::Model;

/// One page of a filtered list plus its page math.
#[derive(Debug, Clone)]
pub struct PageView<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub pages: usize,
    pub total: usize,
}

impl<T> PageView<T> {
    pub fn has_next(&self) -> bool {
        self.pages > 0 && self.page + 1 < self.pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }
}

fn paged<T: Clone>(filtered: Vec<&T>, page: usize, page_size: usize) -> PageView<T> {
    let total = filtered.len();
    let page = pagination::clamp_page(page, total, page_size);
    let items = pagination::page_slice(&filtered, page, page_size)
        .iter()
        .map(|r| (*r).clone())
        .collect();
    PageView {
        items,
        page,
        pages: pagination::page_count(total, page_size),
        total,
    }
}

pub fn media_page(model: &Model) -> PageView<Media> {
    let filtered = filter::filter_media(model.catalog.media.all(), &model.nav.search_query);
    paged(filtered, model.nav.gallery.page, GALLERY_PAGE_SIZE)
}

pub fn product_page(model: &Model) -> PageView<Product> {
    let filtered = filter::filter_products(model.catalog.products.all(), &model.nav.search_query);
    paged(filtered, model.nav.shop.page, LIST_PAGE_SIZE)
}

pub fn order_page(model: &Model) -> PageView<Order> {
    let filtered = filter::filter_orders(model.catalog.orders.all(), &model.nav.search_query);
    paged(filtered, model.nav.orders.page, LIST_PAGE_SIZE)
}

pub fn categories(model: &Model) -> Vec<Category> {
    filter::filter_categories(model.catalog.categories.all(), &model.nav.search_query)
        .into_iter()
        .cloned()
        .collect()
}

/// Id of the row the cursor rests on in the current gallery page.
pub fn selected_media_id(model: &Model) -> Option<String> {
    let page = media_page(model);
    page.items
        .get(model.nav.gallery.selected)
        .map(|m| m.id.clone())
}

pub fn selected_product_id(model: &Model) -> Option<String> {
    let page = product_page(model);
    page.items
        .get(model.nav.shop.selected)
        .map(|p| p.id.clone())
}

pub fn selected_order_id(model: &Model) -> Option<String> {
    let page = order_page(model);
    page.items
        .get(model.nav.orders.selected)
        .map(|o| o.id.clone())
}

pub fn selected_category_id(model: &Model) -> Option<String> {
    categories(model)
        .get(model.nav.categories.selected)
        .map(|c| c.id.clone())
}

pub fn selected_user_id(model: &Model) -> Option<String> {
    model
        .catalog
        .users
        .all()
        .get(model.nav.users.selected)
        .map(|u| u.id.clone())
}

pub fn selected_charge_id(model: &Model) -> Option<String> {
    model
        .catalog
        .extra_charges
        .all()
        .get(model.nav.charges.selected)
        .map(|c| c.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_page_math_matches_seed() {
        let model = Model::new();
        let page = order_page(&model);
        assert_eq!(page.total, 5);
        assert_eq!(page.pages, 1);
        assert!(!page.has_next());
        assert!(!page.has_prev());
    }

    #[test]
    fn test_media_pagination_two_pages() {
        let mut model = Model::new();
        let first = media_page(&model);
        assert_eq!(first.total, 15);
        assert_eq!(first.pages, 2);
        assert_eq!(first.items.len(), 12);
        assert!(first.has_next());

        model.nav.gallery.page = 1;
        let second = media_page(&model);
        assert_eq!(second.items.len(), 3);
        assert!(!second.has_next());
        assert!(second.has_prev());
    }

    #[test]
    fn test_filter_resets_out_of_range_page() {
        let mut model = Model::new();
        model.nav.gallery.page = 1;
        model.nav.search_query = "atardecer".to_string();
        let page = media_page(&model);
        assert_eq!(page.page, 0);
        assert_eq!(page.total, 1);
    }

    #[test]
    fn test_selected_order_follows_filter() {
        let mut model = Model::new();
        model.nav.search_query = "querétaro".to_string();
        model.nav.orders.selected = 0;
        assert_eq!(selected_order_id(&model).as_deref(), Some("ORD-002"));
    }
}
