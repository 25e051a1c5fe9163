use anyhow::Context;
use classroll::logging::init_logging;
use classroll::router::init_router;
use classroll::state::AppState;
use classroll_config::{CorsConfig, DatabaseConfig, JwtConfig, ServerConfig};
use classroll_db::{PgStore, init_db_pool};
use dotenvy::dotenv;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let server_config = ServerConfig::from_env()?;
    let database_config = DatabaseConfig::from_env()?;
    let jwt_config = JwtConfig::from_env()?;
    let cors_config = CorsConfig::from_env();

    let pool = init_db_pool(&database_config)
        .await
        .context("Failed to connect to database")?;

    if server_config.run_migrations {
        sqlx::migrate!()
            .run(&pool)
            .await
            .context("Failed to run database migrations")?;
        info!("Database migrations applied");
    }

    let state = AppState::new(PgStore::new(pool), jwt_config, cors_config);
    let app = init_router(state);

    let addr = server_config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running on http://{}", addr);
    info!("Scalar UI available at http://{}/scalar", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
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

    info!("Shutdown signal received, draining connections");
}
