//! Store configuration: TOML schema, loading and validation.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::StoreConfig;
