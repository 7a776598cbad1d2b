//! Extract optional paging from `page` and `pagesize` query parameters.

use crate::error::AppError;
use crate::sql::{Page, DEFAULT_PAGE_SIZE};
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use std::collections::HashMap;

/// `Some` only when `page` is an integer >= 1; any other `page` means "all rows".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination(pub Option<Page>);

impl Pagination {
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, AppError> {
        let Some(number) = params
            .get("page")
            .and_then(|s| s.trim().parse::<i64>().ok())
            .filter(|n| *n >= 1)
        else {
            return Ok(Pagination(None));
        };
        let size = match params.get("pagesize").map(|s| s.trim()).filter(|s| !s.is_empty()) {
            Some(s) => s
                .parse::<u32>()
                .ok()
                .filter(|n| *n >= 1)
                .ok_or_else(|| AppError::BadRequest(format!("pagesize must be a positive integer, got '{}'", s)))?,
            None => DEFAULT_PAGE_SIZE,
        };
        Ok(Pagination(Some(Page::new(u32::try_from(number).unwrap_or(u32::MAX), size))))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        Pagination::from_params(&params)
    }
}
