//! Page math for list views.
//!
//! Pages are zero-indexed internally; the pagination bar renders them
//! one-based. Page size is fixed per view (8 for shop and orders, 12 for
//! the gallery).

/// Items per page in the gallery grid.
pub const GALLERY_PAGE_SIZE: usize = 12;
/// Items per page in shop and order lists.
pub const LIST_PAGE_SIZE: usize = 8;

/// Number of pages needed for `total` items: ceil(total / page_size).
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Clamp a page index so it stays addressable after the item count shrank.
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    let pages = page_count(total, page_size);
    if pages == 0 {
        0
    } else {
        page.min(pages - 1)
    }
}

/// Slice of `items` shown on `page`.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Whether the "next" control is enabled.
pub fn has_next(page: usize, total: usize, page_size: usize) -> bool {
    let pages = page_count(total, page_size);
    pages > 0 && page + 1 < pages
}

/// Whether the "previous" control is enabled.
pub fn has_prev(page: usize) -> bool {
    page > 0
}
