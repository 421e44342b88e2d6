//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Query parameters for paginated list requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-indexed).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    20
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl PageRequest {
    /// Creates a page request, clamping page and size to at least 1.
    #[must_use]
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Returns the query pairs sent to the backend.
    #[must_use]
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ]
    }
}

/// Paginated list envelope returned by the backend.
///
/// Endpoints without pagination return a bare JSON array; both shapes
/// deserialize into this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageResponse<T> {
    /// `{ "count": .., "next": .., "previous": .., "results": [..] }`
    Paged {
        /// Total number of items across all pages.
        count: u64,
        /// URL of the next page, if any.
        next: Option<String>,
        /// URL of the previous page, if any.
        previous: Option<String>,
        /// The items in the current page.
        results: Vec<T>,
    },
    /// A plain list.
    Plain(Vec<T>),
}

impl<T> PageResponse<T> {
    /// Returns the items of this page.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Paged { results, .. } => results,
            Self::Plain(items) => items,
        }
    }

    /// Returns the total number of items across all pages.
    #[must_use]
    pub fn total(&self) -> u64 {
        match self {
            Self::Paged { count, .. } => *count,
            Self::Plain(items) => items.len() as u64,
        }
    }

    /// Returns true if the backend reported another page.
    #[must_use]
    pub fn has_next(&self) -> bool {
        matches!(self, Self::Paged { next: Some(_), .. })
    }
}
