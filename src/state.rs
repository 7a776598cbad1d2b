//! Shared application state for all routes, created once at startup.

use crate::service::NpsClient;
use sqlx::MySqlPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: MySqlPool,
    pub nps: NpsClient,
}
