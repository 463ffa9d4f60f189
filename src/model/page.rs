//! Limit/offset pagination primitives shared by all list endpoints.

/// Default number of items returned when the client does not pass `limit`.
pub const DEFAULT_LIMIT: u64 = 4;

/// Upper bound on `limit`; larger client values are clamped down to this.
pub const MAX_LIMIT: u64 = 8;

/// A validated pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u64,
    pub offset: u64,
}

impl PageRequest {
    /// Builds a window from raw query parameters, clamping the limit to
    /// [`MAX_LIMIT`]. A missing or zero limit falls back to [`DEFAULT_LIMIT`].
    pub fn from_query(limit: Option<u64>, offset: Option<u64>) -> Self {
        let limit = match limit {
            Some(0) | None => DEFAULT_LIMIT,
            Some(value) => value.min(MAX_LIMIT),
        };
        Self {
            limit,
            offset: offset.unwrap_or(0),
        }
    }
}

/// One page of results plus the total count for the unpaginated query.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub count: u64,
    pub limit: u64,
    pub offset: u64,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            count: self.count,
            limit: self.limit,
            offset: self.offset,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_when_no_parameters() {
        let page = PageRequest::from_query(None, None);

        assert_eq!(page.limit, DEFAULT_LIMIT);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn clamps_limit_to_upper_bound() {
        let page = PageRequest::from_query(Some(100), Some(16));

        assert_eq!(page.limit, MAX_LIMIT);
        assert_eq!(page.offset, 16);
    }

    #[test]
    fn zero_limit_falls_back_to_default() {
        let page = PageRequest::from_query(Some(0), None);

        assert_eq!(page.limit, DEFAULT_LIMIT);
    }
}
