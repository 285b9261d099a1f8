//! Configuration file management.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, DscConfig, ResolveOptions, ResolvedConfig,
    resolve_config,
};
