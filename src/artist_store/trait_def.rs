//! ArtistStore trait definition.
//!
//! Abstracts the document store so the engines can run against either the
//! SQLite-backed store or the in-memory store used in tests.

use crate::catalog::ArtistDocument;
use anyhow::Result;

/// Storage backend for artist documents.
///
/// The store owns document timestamps: `created_at` is set on first save,
/// `updated_at` is bumped on every save. Callers never control them.
pub trait ArtistStore: Send + Sync {
    /// All documents in the catalog, in insertion order.
    fn get_all(&self) -> Result<Vec<ArtistDocument>>;

    /// The document whose artist name matches exactly, if any.
    fn find_by_artist_name(&self, artist_name: &str) -> Result<Option<ArtistDocument>>;

    /// The document containing a song with the given id anywhere in its
    /// albums, if any.
    fn find_by_song_id(&self, song_id: &str) -> Result<Option<ArtistDocument>>;

    /// Insert or replace a document by id. Returns the stored document with
    /// its store-managed timestamps.
    fn save(&self, document: &ArtistDocument) -> Result<ArtistDocument>;

    /// Delete a document by id. Deleting an absent id is a no-op.
    fn delete(&self, id: &str) -> Result<()>;
}
