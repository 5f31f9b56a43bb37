//! Entry point for the Org Engine binary.
//!
//! Running this binary starts an HTTP server that exposes the
//! organisation directory and its derived metrics.  The snapshot file
//! location may be specified via the `ORG_SNAPSHOT_PATH` environment
//! variable (set it to an empty string to disable persistence); the
//! bind address via `ORG_BIND_ADDR`.

use std::sync::Arc;

use org_engine::snapshot::{JsonSnapshotStore, SnapshotStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let addr = std::env::var("ORG_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let snapshot_path =
        std::env::var("ORG_SNAPSHOT_PATH").unwrap_or_else(|_| "org_directory.json".to_string());
    let snapshots: Option<Arc<dyn SnapshotStore>> = if snapshot_path.is_empty() {
        None
    } else {
        Some(Arc::new(JsonSnapshotStore::new(snapshot_path)))
    };

    org_engine::api::serve(&addr, snapshots).await
}
