//! tally server binary.
//!
//! Routes:
//! - `GET /:key/count.svg?background=&text=` - increment + SVG strip
//! - `GET /:key/` - count as JSON, read-only
//! - `GET /health`, `GET /metrics`, `GET /`

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use tally_server::store::{CounterStore, FileCounterStore, MemoryCounterStore};
use tally_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load().expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    let store: Arc<dyn CounterStore> = if cfg.store.path.is_empty() {
        tracing::warn!("no store path configured, counts will not survive a restart");
        Arc::new(MemoryCounterStore::new())
    } else {
        let store = FileCounterStore::open(&cfg.store.path)
            .await
            .expect("store open failed");
        Arc::new(store)
    };
    tracing::info!(kind = store.kind(), "counter store ready");

    let state = app_state::AppState::new(cfg, store).expect("state init failed");
    let app = router::build_router(state);

    tracing::info!(%listen, "tally-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
