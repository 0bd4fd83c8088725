//! Student registry server entry point
//!
//! Loads configuration, connects the database pool, runs migrations and
//! serves the read-only query API.

mod config;

use anyhow::Context;
use axum::Router;
use clap::Parser;
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use std::path::PathBuf;
use std::sync::Arc;
use student_service::domain::Service;
use student_service::infra::storage::migrations::Migrator;
use student_service::infra::storage::repositories::{
    SeaOrmGroupRepository, SeaOrmStudentRepository,
};
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::AppConfig;

/// Student registry HTTP server
#[derive(Debug, Parser)]
#[command(name = "registry-server", version, about)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the bind address from the configuration
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut app_config =
        AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(bind) = cli.bind {
        app_config.server.bind_addr = bind;
    }

    // One long-lived pool for the whole process; sessions are acquired
    // per request and released on every exit path.
    let mut options = ConnectOptions::new(app_config.database.url.clone());
    options.max_connections(app_config.database.max_connections);
    let db = Arc::new(
        Database::connect(options)
            .await
            .context("failed to connect to the database")?,
    );

    if app_config.database.migrate {
        Migrator::up(&*db, None)
            .await
            .context("failed to run migrations")?;
        info!("database migrations completed");
    }

    let group_repo = Arc::new(SeaOrmGroupRepository::new(db.clone()));
    let student_repo = Arc::new(SeaOrmStudentRepository::new(db));
    let service = Arc::new(Service::new(group_repo, student_repo));

    let app = Router::new()
        .merge(student_service::api::rest::routes::router(service))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&app_config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", app_config.server.bind_addr))?;
    info!(addr = %app_config.server.bind_addr, "starting registry-server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!(error = %error, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(error) => {
                tracing::error!(error = %error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
