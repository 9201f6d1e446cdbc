//! # hbnbd — hbnb API daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (`hbnb.toml`, env vars)
//! - Initialize logging from the configured filter
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use hbnb_adapter_http_axum::state::AppState;
use hbnb_adapter_storage_sqlite_sqlx::{
    SqlitePlaceRepository, SqliteReviewRepository, SqliteStateRepository, SqliteUserRepository,
};
use hbnb_app::services::place_service::PlaceService;
use hbnb_app::services::review_service::ReviewService;
use hbnb_app::services::state_service::StateService;
use hbnb_app::services::user_service::UserService;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    // Logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.logging.filter)?)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database
    let db = hbnb_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();
    tracing::info!(url = config.database_url(), "database ready");

    // Repositories
    let state_repo = SqliteStateRepository::new(pool.clone());
    let user_repo = SqliteUserRepository::new(pool.clone());
    let place_repo = SqlitePlaceRepository::new(pool.clone());
    let review_repo = SqliteReviewRepository::new(pool);

    // Services
    let state_service = StateService::new(state_repo);
    let user_service = UserService::new(user_repo.clone());
    let place_service = PlaceService::new(place_repo.clone(), user_repo.clone());
    let review_service = ReviewService::new(review_repo, place_repo, user_repo);

    // HTTP
    let state = AppState::new(state_service, user_service, place_service, review_service);
    let app = hbnb_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "hbnbd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shutdown complete");
    Ok(())
}

/// Resolve on SIGINT, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received SIGINT, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
