use std::net::SocketAddr;
use std::sync::Arc;

use shoplist_api::{app, AppState};
use shoplist_store::MemoryItemStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shoplist_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = shoplist_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting shopping list API on port {}", config.server.port);

    let app_state = AppState {
        items: Arc::new(MemoryItemStore::new()),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
