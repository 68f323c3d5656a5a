// Bastion — HTTP Server Module
//
// Exposes the account store over an HTTP JSON boundary: registration and
// login endpoints plus optional static asset serving. Handlers do shape
// validation and status mapping only; account semantics live in the store.

mod error;
mod handlers;
mod models;

pub use error::ApiError;
pub use models::{AuthRequest, ErrorResponse, MessageResponse, RegisterResponse};

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::routing::post;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::store::SqliteAccountStore;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SqliteAccountStore>,
}

/// Assemble the application router. Static assets, when configured, are
/// served as the fallback so the API routes always win.
pub fn router(state: AppState, static_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route("/api/register", post(handlers::register))
        .route("/api/login", post(handlers::login));

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

/// HTTP server for Bastion.
pub struct HttpServer {
    addr: SocketAddr,
    state: AppState,
    static_dir: Option<PathBuf>,
}

impl HttpServer {
    /// Create a new server around an already-opened store.
    pub fn new(
        addr: SocketAddr,
        store: Arc<SqliteAccountStore>,
        static_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            addr,
            state: AppState { store },
            static_dir,
        }
    }

    /// Start the server. This runs until the process is terminated.
    pub async fn run(self) -> crate::Result<()> {
        let app = router(self.state, self.static_dir.as_deref());

        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        tracing::info!(addr = %self.addr, "Bastion HTTP server listening");

        axum::serve(listener, app).await?;
        Ok(())
    }
}
