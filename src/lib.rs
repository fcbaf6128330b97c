//! Songvault Catalog Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod artist_store;
pub mod catalog;
pub mod server;

// Re-export commonly used types for convenience
pub use artist_store::{ArtistStore, InMemoryArtistStore, SqliteArtistStore};
pub use catalog::{CatalogError, CatalogMutator, CatalogStats};
pub use server::{run_server, RequestsLoggingLevel};
