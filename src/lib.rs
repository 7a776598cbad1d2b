//! Parks finder: read-only REST API over the national parks database.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;

pub use config::{load, resolve, Settings};
pub use error::{AppError, ConfigError};
pub use routes::{app, common_routes, park_routes};
pub use service::{NpsClient, ParkService};
pub use state::AppState;
