//! Configuration module for agentgen
//!
//! Configuration hierarchy:
//! 1. Environment variables (AGENTGEN_*)
//! 2. Asset directory config (`agentgen.toml`)
//! 3. User config (`<config dir>/agentgen/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load, load_with_warnings, with_env_overrides, with_overrides_from, ConfigError,
    ConfigWarning, PROJECT_CONFIG_FILE,
};
pub use types::{ExtractConfig, GeneratorConfig, ImageConfig, NetworkToolConfig};
