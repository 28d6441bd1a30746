#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{BatchArgs, CliConfig, Command, GenerateArgs, OutputFormat};
pub use toml_config::TomlConfig;
