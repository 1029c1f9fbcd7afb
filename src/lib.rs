pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(test)]
mod test_support;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command, OutputFormat};

pub use adapters::http::{shared_client, shared_client_from_env, ReqwestApiClient};
pub use config::{toml_config::TomlConfig, ClientConfig};
pub use core::services::BlogServices;
pub use utils::error::{ApiError, ApiResult, BlogError, Result};
