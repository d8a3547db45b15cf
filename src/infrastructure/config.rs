use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, fmt};

/// Database URL that selects the in-process store instead of PostgreSQL
pub const IN_MEMORY_DATABASE_URL: &str = "memory://";

// Default value functions
fn default_host() -> String {
  "0.0.0.0".to_string()
}

fn default_port() -> u16 {
  3000
}

fn default_max_connections() -> u32 {
  5
}

fn default_db_connect_timeout() -> u64 {
  5
}

fn default_db_acquire_timeout() -> u64 {
  3
}

/// Main application configuration
///
/// Loaded once in `main` and handed to the components that need it.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  #[serde(default)]
  pub server: ServerConfig,
  pub database: DatabaseConfig,
  #[serde(default)]
  pub security: SecurityConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host: default_host(),
      port: default_port(),
    }
  }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
  pub url: String,
  #[serde(default = "default_max_connections")]
  pub max_connections: u32,
  #[serde(default = "default_db_connect_timeout")]
  pub connect_timeout_seconds: u64,
  #[serde(default = "default_db_acquire_timeout")]
  pub acquire_timeout_seconds: u64,
}

impl DatabaseConfig {
  /// True when `url` asks for the in-process store
  pub fn is_in_memory(&self) -> bool {
    self.url == IN_MEMORY_DATABASE_URL
  }
}

/// Security configuration
#[derive(Clone, Default, Deserialize)]
pub struct SecurityConfig {
  /// HMAC secret used to sign identity tokens
  #[serde(default)]
  pub jwt_secret: String,
}

// Keep the signing secret out of logs
impl fmt::Debug for SecurityConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SecurityConfig")
      .field("jwt_secret", &"***")
      .finish()
  }
}

impl Config {
  /// Load configuration from files and environment variables
  ///
  /// Sources, later ones overriding earlier ones:
  /// 1. config/default.toml (optional)
  /// 2. config/{RUN_MODE}.toml (optional, RUN_MODE defaults to "development")
  /// 3. config/local.toml (optional)
  /// 4. Environment variables with the MOVIEAPP_ prefix, e.g.
  ///    `MOVIEAPP_SERVER__PORT=8080`, `MOVIEAPP_DATABASE__URL=postgres://...`
  /// 5. `PORT`, `JWT_SECRET` and `DATABASE_URL`
  ///
  /// # Errors
  ///
  /// Returns a `ConfigError` if a source is malformed, a value has the wrong
  /// type, or the token signing secret is missing.
  pub fn load() -> Result<Self, ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    let config = ConfigBuilder::builder()
      .add_source(File::with_name("config/default").required(false))
      .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
      .add_source(File::with_name("config/local").required(false))
      .add_source(
        Environment::with_prefix("MOVIEAPP")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .set_override_option("server.port", env::var("PORT").ok())?
      .set_override_option("security.jwt_secret", env::var("JWT_SECRET").ok())?
      .set_override_option("database.url", env::var("DATABASE_URL").ok())?
      .build()?;

    let config: Config = config.try_deserialize()?;
    config.validate()?;
    Ok(config)
  }

  /// Checks values that deserialization alone cannot
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.security.jwt_secret.trim().is_empty() {
      return Err(ConfigError::Message(
        "security.jwt_secret must be set (JWT_SECRET or MOVIEAPP_SECURITY__JWT_SECRET)".to_string(),
      ));
    }

    if self.database.url.is_empty() {
      return Err(ConfigError::Message(
        "database.url must be set (DATABASE_URL or MOVIEAPP_DATABASE__URL)".to_string(),
      ));
    }

    Ok(())
  }
}
