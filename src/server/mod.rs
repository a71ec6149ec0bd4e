//! HTTP/JSON API over the log store.
//!
//! - `GET /` — banner
//! - `GET /api/logs` — list all records
//! - `GET /api/logs/{id}` — one record
//! - `POST /api/logs` — create, `201 {"message", "log"}`
//! - `PUT /api/logs/{id}` — partial update
//! - `DELETE /api/logs/{id}` — delete, `204`
//!
//! The store sits behind one mutex. Each request runs its whole store
//! operation, including the durable write, while holding it, on a blocking
//! worker thread.

mod error;
mod handlers;
pub mod telemetry;

use crate::core::store::LogStore;
use crate::errors::{AppError, AppResult};
use axum::Router;
use axum::routing::get;
use std::sync::{Arc, Mutex};

/// Shared application state for all handlers.
#[derive(Clone)]
pub(crate) struct AppState {
    store: Arc<Mutex<LogStore>>,
}

impl AppState {
    /// Run `op` against the store inside the critical section.
    pub(crate) async fn with_store<F, T>(&self, op: F) -> AppResult<T>
    where
        F: FnOnce(&mut LogStore) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);

        tokio::task::spawn_blocking(move || {
            let mut guard = store
                .lock()
                .map_err(|_| AppError::Other("log store lock poisoned".into()))?;
            op(&mut guard)
        })
        .await
        .map_err(|e| AppError::Other(format!("store task failed: {e}")))?
    }
}

/// HTTP server backed by a [`LogStore`].
pub struct LogServer {
    router: Router,
}

impl LogServer {
    pub fn new(store: LogStore) -> Self {
        tracing::info!(
            records = store.len(),
            backend = %store.location(),
            "log store ready"
        );

        let state = AppState {
            store: Arc::new(Mutex::new(store)),
        };

        Self {
            router: Self::build_router(state),
        }
    }

    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::root))
            .route(
                "/api/logs",
                get(handlers::list_logs).post(handlers::create_log),
            )
            .route(
                "/api/logs/{id}",
                get(handlers::get_log)
                    .put(handlers::update_log)
                    .delete(handlers::delete_log),
            )
            .with_state(state)
    }

    /// Return the inner [`Router`] (useful for testing with `tower::ServiceExt`).
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Serve the API until `shutdown` completes, then drain in-flight requests.
    pub async fn serve_with_shutdown(
        self,
        addr: &str,
        shutdown: impl std::future::Future<Output = ()> + Send + 'static,
    ) -> Result<(), std::io::Error> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(addr, "time log API listening");
        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
    }
}
