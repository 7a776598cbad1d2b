//! Settings: JSON config file plus environment overrides.

mod loader;
mod types;

pub use loader::{load, read_file_config, resolve, DEFAULT_CONFIG_FILE};
pub use types::*;
