//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Unified error handling
//! - The tagged success/failure response envelope
//! - Pagination parameters
//! - Configuration structures

pub mod config;
pub mod error;
pub mod pagination;
pub mod response;

pub use config::*;
pub use error::{AppError, AppResult, ErrorBody, OptionExt};
pub use pagination::{ListParams, Paginated, PaginationMeta};
pub use response::ActionResponse;
