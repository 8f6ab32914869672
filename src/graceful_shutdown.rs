use std::sync::Arc;

use actix_web::dev::ServerHandle;
use tokio::signal;
use tracing::{error, warn};

use crate::AppStore;

/// Resolves on Ctrl+C or SIGTERM. A listener that cannot be installed is
/// logged and never resolves, leaving the other one in charge.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("🛑 Ctrl+C received, initiating shutdown...")
        },
        _ = terminate => {
            warn!("🛑 SIGTERM received, initiating shutdown...");
        }
    }
}

/// Waits for a shutdown signal, then stops the server gracefully.
pub async fn stop_on_signal(handle: ServerHandle) {
    shutdown_signal().await;
    handle.stop(true).await;
}

/// Ends the store's lifetime once the server no longer holds it.
pub fn dispose_store(store: Arc<AppStore>) {
    match Arc::try_unwrap(store) {
        Ok(store) => store.dispose(),
        Err(store) => warn!(
            references = Arc::strong_count(&store),
            "Store still referenced at shutdown; skipping dispose"
        ),
    }
}
