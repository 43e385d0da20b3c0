/// Offset pagination over newest-first listings
///
/// Page numbers start at 1. Requests below 1 are clamped to the first page,
/// requests past the end produce an empty page rather than an error.

use serde::Serialize;

/// One page of an ordered listing plus the total it was cut from
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// Records on this page, in listing order
    pub items: Vec<T>,

    /// 1-based page number actually served
    pub page: i64,

    /// Maximum number of records per page
    pub per_page: i64,

    /// Number of records across all pages
    pub total: i64,
}

impl<T> Page<T> {
    /// Builds a page from already-fetched items
    pub fn new(items: Vec<T>, page: i64, per_page: i64, total: i64) -> Self {
        Self {
            items,
            page,
            per_page,
            total,
        }
    }

    /// Number of pages needed to show every record (0 when empty)
    pub fn pages(&self) -> i64 {
        if self.total <= 0 || self.per_page <= 0 {
            0
        } else {
            (self.total + self.per_page - 1) / self.per_page
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages()
    }

    pub fn prev_page(&self) -> Option<i64> {
        self.has_prev().then(|| self.page - 1)
    }

    pub fn next_page(&self) -> Option<i64> {
        self.has_next().then(|| self.page + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Clamps a requested page number to the first page
pub fn normalize_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Row offset of the first record of `page`
pub fn page_offset(page: i64, per_page: i64) -> i64 {
    (page.max(1) - 1).saturating_mul(per_page)
}
