//! Test server lifecycle management
//!
//! Each test gets an isolated server with its own SQLite catalog file.

use songvault_server::artist_store::SqliteArtistStore;
use songvault_server::server::server::make_app;
use songvault_server::server::{RequestsLoggingLevel, ServerConfig};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Test server instance with an isolated catalog database.
///
/// The temp directory lives as long as the server handle; the serve task is
/// aborted on drop.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    _temp_dir: TempDir,
    serve_handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Spawns a new test server on a random port.
    ///
    /// # Panics
    ///
    /// Panics if the catalog database cannot be created or the port cannot
    /// be bound.
    pub async fn spawn() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = SqliteArtistStore::new(temp_dir.path().join("catalog.db"))
            .expect("Failed to open test catalog database");

        let app = make_app(
            ServerConfig {
                requests_logging_level: RequestsLoggingLevel::None,
                ..Default::default()
            },
            Arc::new(store),
        );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test port");
        let addr = listener.local_addr().unwrap();

        let serve_handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        TestServer {
            base_url: format!("http://{}", addr),
            _temp_dir: temp_dir,
            serve_handle,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.serve_handle.abort();
    }
}
