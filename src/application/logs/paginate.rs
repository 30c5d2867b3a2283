// src/application/logs/paginate.rs

/// One page of a filtered result set.
#[derive(Debug, Clone)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Slice a filtered collection into one page.
///
/// `total_pages` is at least 1 even for an empty collection; the requested
/// page is clamped into `[1, total_pages]`.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Paged<T> {
    let page_size = page_size.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total);
    let items = if start >= total {
        Vec::new()
    } else {
        items[start..end].to_vec()
    };
    Paged {
        items,
        page,
        page_size,
        total,
        total_pages,
    }
}
