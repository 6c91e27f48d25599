//! Todo web server.
//!
//! Reads configuration from the environment (and a `.env` file when
//! present), connects the configured store, and serves the todo routes until
//! Ctrl+C or SIGTERM.

use std::process::ExitCode;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;
use todo_app::config::{AppConfig, ConfigError, StorageMode};
use todo_app::telemetry;
use todo_app::todo::adapters::memory::InMemoryTodoRepository;
use todo_app::todo::adapters::postgres::{PostgresTodoRepository, build_pool};
use todo_app::todo::ports::{TodoRepository, TodoRepositoryError};
use todo_app::view::{RenderError, TodoRenderer};
use todo_app::web::{AppState, router};

#[derive(Debug, Error)]
enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("store initialisation failed: {0}")]
    Repository(#[from] TodoRepositoryError),
    #[error("template initialisation failed: {0}")]
    Render(#[from] RenderError),
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv_result = dotenvy::dotenv();
    telemetry::init();
    if let Err(err) = dotenv_result
        && !err.not_found()
    {
        tracing::warn!(error = %err, "failed to read .env file");
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "todo server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::from_env()?;
    tracing::info!(
        storage_mode = ?config.storage_mode,
        bind_address = %config.bind_address,
        "configuration loaded"
    );

    let repository = connect_repository(&config).await?;
    let state = AppState::new(repository, TodoRenderer::new()?);

    let listener = TcpListener::bind(config.bind_address).await?;
    tracing::info!(address = %config.bind_address, "todo server listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("todo server stopped");
    Ok(())
}

async fn connect_repository(config: &AppConfig) -> Result<Arc<dyn TodoRepository>, StartupError> {
    let repository: Arc<dyn TodoRepository> = match config.storage_mode {
        StorageMode::InMemory => {
            tracing::warn!("using in-memory storage; tasks are lost on restart");
            Arc::new(InMemoryTodoRepository::new())
        }
        StorageMode::Postgres => {
            let url = config
                .database_url
                .clone()
                .ok_or(ConfigError::MissingDatabaseUrl)?;
            let pool_size = config.pool_size;
            let pool = tokio::task::spawn_blocking(move || build_pool(&url, pool_size)).await??;
            let postgres = PostgresTodoRepository::new(pool);
            postgres.ensure_schema().await?;
            tracing::info!(pool_size, "connected to PostgreSQL");
            Arc::new(postgres)
        }
    };
    Ok(repository)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!(%error, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
