//! Limit/offset pagination for list calls.

use domain::{DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use serde::{Deserialize, Serialize};

/// List query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_limit")]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

fn default_limit() -> u64 {
    DEFAULT_LIST_LIMIT
}

impl ListParams {
    pub fn new(limit: u64, offset: u64) -> Self {
        Self { limit, offset }
    }

    /// Limit clamped to `1..=MAX_LIST_LIMIT`
    pub fn limit(&self) -> u64 {
        self.limit.clamp(1, MAX_LIST_LIMIT)
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
            offset: 0,
        }
    }
}

/// Paginated response wrapper
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    pub limit: u64,
    pub offset: u64,
    pub total: u64,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, params: &ListParams, total: u64) -> Self {
        Self {
            data,
            meta: PaginationMeta {
                limit: params.limit(),
                offset: params.offset(),
                total,
            },
        }
    }

    /// Transform every item, keeping the metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}
