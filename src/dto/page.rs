use serde::Serialize;

use crate::model::page::Page;

/// Paginated list body: total count, relative next/previous links, and the
/// items of the current window.
#[derive(Debug, Serialize)]
pub struct PaginatedDto<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> PaginatedDto<T> {
    /// Wraps one page of results, deriving the next/previous links from the
    /// request path and the page window. Links are relative; the previous
    /// link omits `offset` when it points at the start of the collection.
    pub fn from_page(path: &str, page: Page<T>) -> Self {
        let next = if page.offset + page.limit < page.count {
            Some(format!(
                "{}?limit={}&offset={}",
                path,
                page.limit,
                page.offset + page.limit
            ))
        } else {
            None
        };

        let previous = if page.offset > 0 {
            let previous_offset = page.offset.saturating_sub(page.limit);
            if previous_offset == 0 {
                Some(format!("{}?limit={}", path, page.limit))
            } else {
                Some(format!(
                    "{}?limit={}&offset={}",
                    path, page.limit, previous_offset
                ))
            }
        } else {
            None
        };

        Self {
            count: page.count,
            next,
            previous,
            results: page.items,
        }
    }
}
