//! Service layer: query execution and upstream calls.

pub mod nps;
pub mod parks;
mod rows;
pub use nps::NpsClient;
pub use parks::ParkService;
