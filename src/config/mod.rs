#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliCommand, CliConfig};
pub use toml_config::TomlConfig;

pub const DEFAULT_BASE_PATH: &str = ".";
pub const DEFAULT_ACTIVITY_LOG: &str = "log.txt";
