//! Read queries against the parks database.

use super::rows::row_to_json;
use crate::error::AppError;
use crate::sql::{
    search_parks, select_airports_near, select_ev_stations_near, select_parks, select_species_categories,
    select_species_nativeness, select_unique_species, Page, ParkSearch, QueryBuf,
};
use serde_json::Value;
use sqlx::MySqlPool;

pub struct ParkService;

impl ParkService {
    /// All parks, or one page of them.
    pub async fn list(pool: &MySqlPool, page: Option<Page>) -> Result<Vec<Value>, AppError> {
        Self::query_many(pool, &select_parks(page)).await
    }

    pub async fn search(pool: &MySqlPool, filter: &ParkSearch, page: Option<Page>) -> Result<Vec<Value>, AppError> {
        Self::query_many(pool, &search_parks(filter, page)).await
    }

    pub async fn airports_near(pool: &MySqlPool, park_code: &str) -> Result<Vec<Value>, AppError> {
        Self::query_many(pool, &select_airports_near(park_code)).await
    }

    pub async fn ev_stations_near(pool: &MySqlPool, park_code: &str) -> Result<Vec<Value>, AppError> {
        Self::query_many(pool, &select_ev_stations_near(park_code)).await
    }

    pub async fn species_categories(pool: &MySqlPool, park_code: &str) -> Result<Vec<Value>, AppError> {
        Self::query_many(pool, &select_species_categories(park_code)).await
    }

    pub async fn species_nativeness(pool: &MySqlPool, park_code: &str) -> Result<Vec<Value>, AppError> {
        Self::query_many(pool, &select_species_nativeness(park_code)).await
    }

    pub async fn unique_species(pool: &MySqlPool, park_code: &str) -> Result<Vec<Value>, AppError> {
        Self::query_many(pool, &select_unique_species(park_code)).await
    }

    async fn query_many(pool: &MySqlPool, q: &QueryBuf) -> Result<Vec<Value>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = p.bind_to(query);
        }
        let rows = query.fetch_all(pool).await?;
        Ok(rows.iter().map(row_to_json).collect())
    }
}
