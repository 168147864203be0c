use actix_web::{App, HttpServer, middleware::Logger};
use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use loanbook::{
  adapters::http::{TemplateEngine, WebRouteDependencies, configure_web_routes},
  application::auth::{
    ApproveBorrowerUseCase, ListPendingBorrowersUseCase, LoginUserUseCase, LogoutUserUseCase,
    RegisterAccountUseCase, RejectBorrowerUseCase,
  },
  application::lending::{ApplyForLoanUseCase, ListLoansUseCase, ListOwnLoansUseCase},
  domain::auth::services::{AccountService, AuthService},
  domain::lending::services::LendingService,
  infrastructure::{
    config::Config,
    persistence::sqlite::{SqliteAccountRepository, SqliteLoanRepository},
    security::Argon2CredentialHasher,
    session::InMemorySessionStore,
  },
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "loanbook=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting Loanbook application");

  let config = Config::load().context("Failed to load configuration")?;
  tracing::info!("Configuration loaded successfully");

  // Set up the SQLite pool; the database file is created on first run
  tracing::info!("Connecting to database: {}", config.database.url);

  let connect_options = SqliteConnectOptions::from_str(&config.database.url)
    .context("Invalid database URL")?
    .create_if_missing(true);

  let db_pool = SqlitePoolOptions::new()
    .max_connections(config.database.max_connections)
    .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
    .connect_with(connect_options)
    .await
    .context("Failed to connect to database")?;

  tracing::info!("Database connection pool created");

  tracing::info!("Running database migrations");
  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .context("Failed to run database migrations")?;
  tracing::info!("Database migrations completed");

  // Initialize repositories and security services
  let account_repo = Arc::new(SqliteAccountRepository::new(db_pool.clone()));
  let loan_repo = Arc::new(SqliteLoanRepository::new(db_pool.clone()));
  let password_hasher = Arc::new(Argon2CredentialHasher::new());
  let session_store = Arc::new(InMemorySessionStore::new(chrono::Duration::seconds(
    config.security.session_ttl_seconds as i64,
  )));

  // Initialize domain services
  let account_service = Arc::new(AccountService::new(
    account_repo.clone(),
    loan_repo.clone(),
    password_hasher.clone(),
  ));
  let auth_service = Arc::new(AuthService::new(
    account_repo.clone(),
    password_hasher,
    session_store,
  ));
  let lending_service = Arc::new(LendingService::new(loan_repo.clone()));

  // Initialize use cases
  let register_use_case = Arc::new(RegisterAccountUseCase::new(account_service.clone()));
  let login_use_case = Arc::new(LoginUserUseCase::new(auth_service.clone()));
  let logout_use_case = Arc::new(LogoutUserUseCase::new(auth_service.clone()));
  let approve_use_case = Arc::new(ApproveBorrowerUseCase::new(account_service.clone()));
  let reject_use_case = Arc::new(RejectBorrowerUseCase::new(account_service.clone()));
  let pending_use_case = Arc::new(ListPendingBorrowersUseCase::new(account_service.clone()));
  let apply_use_case = Arc::new(ApplyForLoanUseCase::new(
    account_service.clone(),
    lending_service.clone(),
  ));
  let loans_use_case = Arc::new(ListLoansUseCase::new(
    lending_service.clone(),
    account_repo.clone(),
  ));
  let own_loans_use_case = Arc::new(ListOwnLoansUseCase::new(
    account_service.clone(),
    lending_service.clone(),
  ));

  // Initialize template engine
  let templates = TemplateEngine::new().context("Failed to initialize template engine")?;
  tracing::info!("Template engine initialized");

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  HttpServer::new(move || {
    App::new()
      .wrap(Logger::default())
      .configure(|cfg| {
        configure_web_routes(
          cfg,
          WebRouteDependencies {
            templates: templates.clone(),
            auth_service: auth_service.clone(),
            register_use_case: register_use_case.clone(),
            login_use_case: login_use_case.clone(),
            logout_use_case: logout_use_case.clone(),
            approve_use_case: approve_use_case.clone(),
            reject_use_case: reject_use_case.clone(),
            pending_use_case: pending_use_case.clone(),
            apply_use_case: apply_use_case.clone(),
            loans_use_case: loans_use_case.clone(),
            own_loans_use_case: own_loans_use_case.clone(),
          },
        )
      })
      .service(actix_files::Files::new("/static", "./static"))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await?;

  Ok(())
}
