//! HTTP handlers for the park routes.

pub mod park;
pub mod parks;
pub mod welcome;
pub use park::*;
pub use parks::*;
pub use welcome::*;
