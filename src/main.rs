//! Stockroom server binary.
//!
//! Loads configuration from the environment, opens (or initializes) the
//! two store files, and serves the inventory and account APIs.

use stockroom::accounts::AccountStore;
use stockroom::api::{self, AppState};
use stockroom::config::Config;
use stockroom::inventory::ProductStore;

#[tokio::main]
async fn main() {
    // .env is optional; real environment variables win.
    let _ = dotenvy::dotenv();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "stockroom=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env().expect("failed to load configuration");

    for file in [&config.inventory_file, &config.users_file] {
        if let Some(dir) = file.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir).expect("failed to create data directory");
            }
        }
    }

    let inventory =
        ProductStore::open(&config.inventory_file).expect("failed to open inventory store");
    let accounts = AccountStore::open(&config.users_file).expect("failed to open account store");
    tracing::info!(
        products = inventory.len(),
        accounts = accounts.len(),
        "stores loaded"
    );

    let app = api::router(AppState::new(inventory, accounts));

    let addr = config.socket_addr();
    tracing::info!("stockroom listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
