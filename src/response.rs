//! Standard response envelope.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct Results<T> {
    pub results: Vec<T>,
}

/// `{"results": [...]}` with status 200.
pub fn results<T: Serialize>(rows: Vec<T>) -> Json<Results<T>> {
    Json(Results { results: rows })
}
