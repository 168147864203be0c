use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

fn default_db_max_connections() -> u32 {
  5
}

fn default_db_acquire_timeout() -> u64 {
  3
}

fn default_session_ttl() -> u64 {
  86_400
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  pub server: ServerConfig,
  pub database: DatabaseConfig,
  pub security: SecurityConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
  pub url: String,
  #[serde(default = "default_db_max_connections")]
  pub max_connections: u32,
  #[serde(default = "default_db_acquire_timeout")]
  pub acquire_timeout_seconds: u64,
}

/// Security configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
  /// How long an established session stays valid
  #[serde(default = "default_session_ttl")]
  pub session_ttl_seconds: u64,
}

impl Config {
  /// Load configuration from files and environment variables
  ///
  /// Sources, later overriding earlier:
  /// 1. config/default.toml
  /// 2. config/local.toml (if present)
  /// 3. config/{RUN_MODE}.toml (if present)
  /// 4. Environment variables with the LOANBOOK_ prefix, double-underscore
  ///    separated: `LOANBOOK_SERVER__PORT=8080`,
  ///    `LOANBOOK_DATABASE__URL=sqlite://loanbook.db`
  pub fn load() -> Result<Self, ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    let config = ConfigBuilder::builder()
      .add_source(File::with_name("config/default").required(true))
      .add_source(File::with_name("config/local").required(false))
      .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
      .add_source(
        Environment::with_prefix("LOANBOOK")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?;

    config.try_deserialize()
  }
}
