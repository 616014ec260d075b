//! Shared list, pagination and season types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Paging and free-text filter accepted by every list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseListQuery {
    /// Page number, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_per_page: Option<u32>,
    /// Free-text filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl BaseListQuery {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page number.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size.
    pub fn items_per_page(mut self, items: u32) -> Self {
        self.items_per_page = Some(items);
        self
    }

    /// Sets the free-text filter.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }
}

/// Pagination block of a [`ListResponse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Total number of items across all pages.
    pub total_items: u64,
    /// Total number of pages.
    pub total_pages: u32,
    /// Current page.
    pub current_page: u32,
    /// Page size.
    pub items_per_page: u32,
    /// Whether a next page exists.
    pub has_next_page: bool,
    /// Whether a previous page exists.
    pub has_prev_page: bool,
}

/// Paginated list envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Pagination metadata.
    pub pagination: PaginationMeta,
}

impl<T> ListResponse<T> {
    /// True when the server reports a further page.
    pub fn has_next_page(&self) -> bool {
        self.pagination.has_next_page
    }
}

/// Season summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonPartial {
    /// Season ID.
    pub id: String,
    /// Display name, e.g. `2024/25 Season`.
    pub name: String,
    /// First day of the season.
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    /// Last day of the season.
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
}
