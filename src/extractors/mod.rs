//! Request extractors shared by the park handlers.

pub mod pagination;
pub mod park_code;
pub use pagination::Pagination;
pub use park_code::{validate_park_code, validate_park_codes, ParkCode};
