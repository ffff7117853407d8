//! Taxi Fleet Service - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use taxi_fleet::infrastructure::driven_adapters::config::{AppConfig, LogFormat};
use taxi_fleet::infrastructure::driven_adapters::database::{create_pool, run_migrations};
use taxi_fleet::infrastructure::driven_adapters::{
    Argon2PasswordHasher, MiniJinjaRenderer, PostgresCarRepository, PostgresDriverRepository,
    PostgresManufacturerRepository,
};
use taxi_fleet::infrastructure::driving_adapters::web::{app, Adapters, AppState};

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "taxi_fleet=debug,tower_http=debug".into());

    let (pretty, json) = match format {
        LogFormat::Pretty => (Some(fmt::layer()), None),
        LogFormat::Json => (None, Some(fmt::layer().json())),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_tracing(config.logging.format);
    tracing::info!("Configuration loaded successfully");

    let pool = create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    run_migrations(&pool).await?;
    tracing::info!("Database migrations completed");

    let adapters = Adapters {
        manufacturers: Arc::new(PostgresManufacturerRepository::new(pool.clone())),
        drivers: Arc::new(PostgresDriverRepository::new(pool.clone())),
        cars: Arc::new(PostgresCarRepository::new(pool)),
        password_hasher: Arc::new(Argon2PasswordHasher::new(&config.password)?),
        renderer: Arc::new(MiniJinjaRenderer::new()?),
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let router = app(AppState::new(&config, adapters));

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl+C");
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
                tracing::error!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
