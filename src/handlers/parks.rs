//! Park-level handlers: NPS details passthrough, search, listing.

use crate::error::AppError;
use crate::extractors::{validate_park_codes, Pagination};
use crate::response::{results, Results};
use crate::service::ParkService;
use crate::sql::ParkSearch;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

/// GET /parkdetails?parkid=acad or ?parkid=acad,yell
///
/// Relays the NPS API body unmodified. A missing `parkid` is a 400, never a hung request.
pub async fn park_details(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, AppError> {
    let raw = params.get("parkid").map(String::as_str).unwrap_or_default();
    let park_codes = validate_park_codes(raw)?;
    let body = state.nps.park_details(&park_codes).await?;
    Ok(Json(body))
}

/// GET /search/parks?state=UT&parkname=canyon&speciesmorethan=100&airportsmorethan=2&evsmorethan=3
pub async fn search_parks(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    Pagination(page): Pagination,
) -> Result<Json<Results<Value>>, AppError> {
    let filter = parse_search(&params)?;
    let rows = ParkService::search(&state.pool, &filter, page).await?;
    Ok(results(rows))
}

/// GET /parks, optionally ?page=2&pagesize=5
pub async fn all_parks(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> Result<Json<Results<Value>>, AppError> {
    let rows = ParkService::list(&state.pool, page).await?;
    Ok(results(rows))
}

fn parse_search(params: &HashMap<String, String>) -> Result<ParkSearch, AppError> {
    let text = |key: &str| {
        params
            .get(key)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };
    Ok(ParkSearch {
        state: text("state"),
        name: text("parkname"),
        min_species: parse_threshold(params, "speciesmorethan")?,
        min_airports: parse_threshold(params, "airportsmorethan")?,
        min_ev_stations: parse_threshold(params, "evsmorethan")?,
    })
}

fn parse_threshold(params: &HashMap<String, String>, key: &str) -> Result<i64, AppError> {
    match params.get(key).map(|s| s.trim()).filter(|s| !s.is_empty()) {
        None => Ok(0),
        Some(s) => s
            .parse::<i64>()
            .ok()
            .filter(|n| *n >= 0)
            .ok_or_else(|| AppError::BadRequest(format!("{} must be a non-negative integer, got '{}'", key, s))),
    }
}
