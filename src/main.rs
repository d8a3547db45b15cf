use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movieapp::{
  adapters::http::{AccountRouteDependencies, RequestIdMiddleware, configure_api},
  domain::accounts::{
    ports::{TokenIssuer, UserRepository},
    services::AccountService,
  },
  infrastructure::{
    config::{Config, DatabaseConfig},
    persistence::{memory::InMemoryUserRepository, postgres::PostgresUserRepository},
    security::{Argon2PasswordHasher, JwtTokenIssuer},
  },
};

/// Connects to PostgreSQL and applies pending migrations
async fn connect_database(database: &DatabaseConfig) -> std::io::Result<sqlx::PgPool> {
  let db_pool = tokio::time::timeout(
    Duration::from_secs(database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(database.max_connections)
      .acquire_timeout(Duration::from_secs(database.acquire_timeout_seconds))
      .connect(&database.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      database.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Database connection timed out after {} seconds",
        database.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to connect to database: {}", e);
    match e {
      sqlx::Error::Io(_) => std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "Could not connect to database. Is PostgreSQL running?",
      ),
      _ => std::io::Error::other(format!("Database error: {}", e)),
    }
  })?;

  tracing::info!("Database connection pool created");

  tracing::info!("Running database migrations");
  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .map_err(|e| {
      tracing::error!("Failed to run database migrations: {}", e);
      std::io::Error::other(format!("Migration error: {}", e))
    })?;
  tracing::info!("Database migrations completed");

  Ok(db_pool)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "movieapp=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting MovieApp API");

  let config = Config::load().map_err(|e| {
    tracing::error!("Failed to load configuration: {}", e);
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
  })?;
  tracing::info!("Configuration loaded successfully");

  let user_repo: Arc<dyn UserRepository> = if config.database.is_in_memory() {
    tracing::warn!("Using in-memory user store; data is lost on restart");
    Arc::new(InMemoryUserRepository::new())
  } else {
    let db_pool = connect_database(&config.database).await?;
    Arc::new(PostgresUserRepository::new(db_pool))
  };

  let password_hasher = Arc::new(Argon2PasswordHasher::new().map_err(|e| {
    tracing::error!("Failed to initialize password hasher: {}", e);
    std::io::Error::other(e.to_string())
  })?);
  let token_issuer: Arc<dyn TokenIssuer> =
    Arc::new(JwtTokenIssuer::new(&config.security.jwt_secret));

  let account_service = Arc::new(AccountService::new(user_repo, password_hasher));
  let dependencies = AccountRouteDependencies::new(account_service, token_issuer);

  let bind_address = (config.server.host.clone(), config.server.port);
  tracing::info!(
    "Starting HTTP server on {}:{}",
    config.server.host,
    config.server.port
  );

  HttpServer::new(move || {
    let dependencies = dependencies.clone();

    App::new()
      .wrap(Logger::default())
      .wrap(RequestIdMiddleware::new())
      .wrap(Cors::permissive())
      .configure(|cfg| configure_api(cfg, dependencies))
  })
  .bind(bind_address)?
  .run()
  .await
}
