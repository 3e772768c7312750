//! Configuration file management.

mod manager;

pub use manager::{
    BackendConfig, ConfigFile, ConfigManager, GtransConfig, ResolveOptions, ResolvedConfig,
    resolve_config,
};
