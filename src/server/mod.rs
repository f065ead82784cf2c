//! HTTP surface: the WhatsApp webhook and the storefront REST routes.
//!
//! Handlers are thin; they translate requests into service calls and map
//! results onto statuses. The webhook POST acknowledges every JSON body so
//! the provider never retries a delivery that was already processed.

pub mod error;
pub mod routes;
pub mod state;

use std::io;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::{net::TcpListener, signal::ctrl_c};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub use error::ApiError;
pub use state::AppState;

/// Path of the WhatsApp webhook.
pub const WEBHOOK_PATH: &str = "/api/whatsapp-webhook";

/// Builds the application router.
#[must_use]
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            WEBHOOK_PATH,
            get(routes::verify_webhook).post(routes::receive_webhook),
        )
        .route(
            "/api/orders",
            post(routes::place_order).patch(routes::change_order_status),
        )
        .route("/api/products", post(routes::create_product))
        .route("/api/admin/command-logs", get(routes::list_command_logs))
        .route("/api/admin/messages", get(routes::list_messages))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `0.0.0.0:<port>` and serves until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns the I/O error when the port cannot be bound or the server fails.
pub async fn serve(state: Arc<AppState>, port: u16) -> io::Result<()> {
    let address = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let interrupt = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(err) => {
                error!(error = %err, "failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => {},
        () = terminate => {},
    }
}
