//! Client-side search filters.
//!
//! Every list view filters its repository snapshot with a case-insensitive
//! substring match over a few fields. An empty query matches everything.
//! Gallery and shop results are ordered newest first before filtering, the
//! same order the list views display.

use crate::domain::{Category, Media, Order, Product};

fn matches_any(query: &str, fields: &[&str]) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Orders match on id, customer name, and customer state.
pub fn filter_orders<'a>(orders: &'a [Order], query: &str) -> Vec<&'a Order> {
    orders
        .iter()
        .filter(|o| matches_any(query, &[&o.id, &o.customer, &o.customer_state]))
        .collect()
}

/// Products match on name and ring number, newest first.
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let mut found: Vec<&Product> = products
        .iter()
        .filter(|p| {
            matches_any(
                query,
                &[&p.name, p.ring_number.as_deref().unwrap_or_default()],
            )
        })
        .collect();
    found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    found
}

/// Media match on title, description, kind label, category, and subcategory,
/// newest first.
pub fn filter_media<'a>(media: &'a [Media], query: &str) -> Vec<&'a Media> {
    let mut found: Vec<&Media> = media
        .iter()
        .filter(|m| {
            matches_any(
                query,
                &[
                    &m.title,
                    &m.description,
                    m.kind.label(),
                    &m.category,
                    &m.subcategory,
                ],
            )
        })
        .collect();
    found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    found
}

/// Categories match on name only.
pub fn filter_categories<'a>(categories: &'a [Category], query: &str) -> Vec<&'a Category> {
    categories
        .iter()
        .filter(|c| matches_any(query, &[&c.name]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::demo_catalog;

    #[test]
    fn test_empty_query_matches_everything() {
        let catalog = demo_catalog();
        assert_eq!(
            filter_orders(catalog.orders.all(), "").len(),
            catalog.orders.len()
        );
        assert_eq!(
            filter_media(catalog.media.all(), "").len(),
            catalog.media.len()
        );
    }

    #[test]
    fn test_orders_match_by_id_case_insensitive() {
        let catalog = demo_catalog();
        let found = filter_orders(catalog.orders.all(), "ord-002");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "ORD-002");
    }

    #[test]
    fn test_orders_match_by_customer_state() {
        let catalog = demo_catalog();
        let found = filter_orders(catalog.orders.all(), "querétaro");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].customer, "Juan Pérez");
    }

    #[test]
    fn test_products_match_by_ring_number() {
        let catalog = demo_catalog();
        let found = filter_products(catalog.products.all(), "KL-0");
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_products_sorted_newest_first() {
        let catalog = demo_catalog();
        let found = filter_products(catalog.products.all(), "");
        for pair in found.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[test]
    fn test_media_match_by_subcategory() {
        let catalog = demo_catalog();
        let found = filter_media(catalog.media.all(), "caballos");
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let catalog = demo_catalog();
        assert!(filter_orders(catalog.orders.all(), "zzzzz").is_empty());
        assert!(filter_categories(catalog.categories.all(), "zzzzz").is_empty());
    }
}
