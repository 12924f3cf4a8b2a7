use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use charlearn_api::config::ServerConfig;
use charlearn_api::router::build_app_router;
use charlearn_api::state::AppState;
use charlearn_importer::{FixedDelay, Importer};
use charlearn_jikan::JikanApi;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "charlearn_api=debug,charlearn_importer=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    config
        .import
        .settings
        .validate()
        .expect("Invalid import settings");
    tracing::info!(
        host = %config.host,
        port = %config.port,
        static_dir = %config.static_dir.display(),
        "Loaded server configuration",
    );

    // --- Database ---
    let pool = charlearn_db::create_pool(&config.database_url)
        .await
        .expect("Failed to open character database");
    tracing::info!(url = %config.database_url, "Database connection pool created");

    charlearn_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    charlearn_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Importer ---
    let jikan = JikanApi::new(config.import.jikan_base_url.clone());
    let importer = Importer::new(
        Arc::new(jikan),
        Arc::new(FixedDelay(config.import.page_delay)),
        config.import.settings.clone(),
    );
    tracing::info!(
        base_url = %config.import.jikan_base_url,
        target = config.import.settings.target,
        page_size = config.import.settings.page_size,
        page_delay_ms = config.import.page_delay.as_millis() as u64,
        "Importer configured",
    );

    // --- App state ---
    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        importer,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Server stopped accepting connections, closing database");
    pool.close().await;
    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
