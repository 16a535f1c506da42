//! fingerbox Settings Crate
//!
//! Box job files: defaults, JSON/TOML persistence, validation and
//! normalization of user units into box maker parameters.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, BoxJobConfig, DimensionSettings, LayoutSettings, MaterialSettings,
    OutputFormat, OutputSettings, DEFAULT_CONFIG_FILE,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
