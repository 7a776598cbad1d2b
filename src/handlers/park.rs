//! Per-park handlers keyed by the `:parkid` path segment.

use crate::error::AppError;
use crate::extractors::ParkCode;
use crate::response::{results, Results};
use crate::service::ParkService;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde_json::Value;

type ParkRows = Result<Json<Results<Value>>, AppError>;

/// GET /airports/:parkid
pub async fn airports_by_park(State(state): State<AppState>, ParkCode(code): ParkCode) -> ParkRows {
    Ok(results(ParkService::airports_near(&state.pool, &code).await?))
}

/// GET /evstations/:parkid
pub async fn ev_stations_by_park(State(state): State<AppState>, ParkCode(code): ParkCode) -> ParkRows {
    Ok(results(ParkService::ev_stations_near(&state.pool, &code).await?))
}

/// GET /species/:parkid
pub async fn species_categories_by_park(State(state): State<AppState>, ParkCode(code): ParkCode) -> ParkRows {
    Ok(results(ParkService::species_categories(&state.pool, &code).await?))
}

/// GET /speciesnativeness/:parkid
pub async fn species_nativeness_by_park(State(state): State<AppState>, ParkCode(code): ParkCode) -> ParkRows {
    Ok(results(ParkService::species_nativeness(&state.pool, &code).await?))
}

/// GET /uniquespecies/:parkid
pub async fn unique_species_by_park(State(state): State<AppState>, ParkCode(code): ParkCode) -> ParkRows {
    Ok(results(ParkService::unique_species(&state.pool, &code).await?))
}
