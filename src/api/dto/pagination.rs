//! Pagination query parameters and list envelopes.

use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::{DisplayFromStr, serde_as};
use utoipa::{IntoParams, ToSchema};

use crate::error::AppError;

pub const DEFAULT_PAGE_SIZE: u32 = 25;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Pagination query parameters.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// 1-based page number (default 1).
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[param(minimum = 1)]
    pub page: Option<u32>,

    /// Items per page (default 25, at most 100).
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: Option<u32>,
}

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub page_size: u32,
    pub offset: i64,
    pub limit: i64,
}

impl PaginationParams {
    /// Validates pagination parameters and converts to database offset/limit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the page is 0 or the page size is
    /// outside `1..=100`.
    pub fn validate_and_get_offset_limit(&self) -> Result<PageWindow, AppError> {
        let page = self.page.unwrap_or(1);
        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        if page == 0 {
            return Err(AppError::bad_request(
                "Page must be greater than 0",
                json!({"page": page}),
            ));
        }

        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(AppError::bad_request(
                format!("Page size must be between 1 and {MAX_PAGE_SIZE}"),
                json!({"page_size": page_size}),
            ));
        }

        Ok(PageWindow {
            page,
            page_size,
            offset: (page as i64 - 1) * page_size as i64,
            limit: page_size as i64,
        })
    }
}

/// Paginated list envelope.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    /// Number of matching active records across all pages.
    pub total: i64,
}

impl<T> ListResponse<T> {
    /// Maps a page of entities into their DTOs.
    pub fn from_page<E>(window: PageWindow, items: Vec<E>, total: i64) -> Self
    where
        T: From<E>,
    {
        Self {
            items: items.into_iter().map(T::from).collect(),
            page: window.page,
            page_size: window.page_size,
            total,
        }
    }
}
