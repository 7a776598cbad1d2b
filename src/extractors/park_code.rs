//! Park code from the `:parkid` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use regex::Regex;
use std::sync::OnceLock;

fn park_code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9]{1,16}$").expect("static pattern"))
}

/// Validate a park code (e.g. "noca"): 1-16 ASCII alphanumerics.
pub fn validate_park_code(raw: &str) -> Result<String, AppError> {
    let code = raw.trim();
    if code.is_empty() {
        return Err(AppError::BadRequest("park id not specified".into()));
    }
    if !park_code_pattern().is_match(code) {
        return Err(AppError::BadRequest(format!("invalid park id '{}'", code)));
    }
    Ok(code.to_string())
}

/// Validate a comma-separated list of park codes (e.g. "acad,yell") as the NPS API accepts.
/// Each item must be a valid code; the list is returned normalized without whitespace.
pub fn validate_park_codes(raw: &str) -> Result<String, AppError> {
    if raw.trim().is_empty() {
        return Err(AppError::BadRequest("park id not specified".into()));
    }
    let codes = raw
        .split(',')
        .map(|item| {
            if item.trim().is_empty() {
                Err(AppError::BadRequest(format!("invalid park id list '{}'", raw.trim())))
            } else {
                validate_park_code(item)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(codes.join(","))
}

#[derive(Clone, Debug)]
pub struct ParkCode(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for ParkCode
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        validate_park_code(&raw).map(ParkCode)
    }
}
