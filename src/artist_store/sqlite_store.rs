//! SQLite-backed artist document store.
//!
//! Each artist document is persisted as one row with its album tree
//! serialized to JSON. The catalog is expected to stay small, so song-id
//! resolution is a full scan over the documents rather than an index.

use super::trait_def::ArtistStore;
use crate::catalog::{Album, ArtistDocument};
use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS artists (
    id TEXT PRIMARY KEY,
    artist_name TEXT NOT NULL UNIQUE,
    artist_image_url TEXT NOT NULL,
    albums TEXT NOT NULL,
    created_at INTEGER NOT NULL,
    updated_at INTEGER NOT NULL
);
";

/// SQLite implementation of [`ArtistStore`].
#[derive(Clone)]
pub struct SqliteArtistStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteArtistStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path.as_ref())
            .context("Failed to open catalog database")?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.execute_batch(SCHEMA)
            .context("Failed to create catalog schema")?;
        info!("Catalog database ready at {:?}", db_path.as_ref());
        Ok(SqliteArtistStore {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("Catalog database mutex poisoned"))
    }
}

fn row_to_document(row: &Row) -> rusqlite::Result<(ArtistDocument, String)> {
    let id: String = row.get("id")?;
    let artist_name: String = row.get("artist_name")?;
    let artist_image_url: String = row.get("artist_image_url")?;
    let albums_json: String = row.get("albums")?;
    let created_at: i64 = row.get("created_at")?;
    let updated_at: i64 = row.get("updated_at")?;

    let document = ArtistDocument {
        id,
        artist_name,
        artist_image_url,
        albums: Vec::new(),
        created_at: timestamp(created_at),
        updated_at: timestamp(updated_at),
    };
    Ok((document, albums_json))
}

fn timestamp(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

fn parse_albums(albums_json: &str) -> Result<Vec<Album>> {
    serde_json::from_str(albums_json).context("Malformed albums JSON in catalog row")
}

impl ArtistStore for SqliteArtistStore {
    fn get_all(&self) -> Result<Vec<ArtistDocument>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, artist_name, artist_image_url, albums, created_at, updated_at
             FROM artists ORDER BY created_at, id",
        )?;
        let rows = stmt.query_map([], row_to_document)?;

        let mut documents = Vec::new();
        for row in rows {
            let (mut document, albums_json) = row?;
            document.albums = parse_albums(&albums_json)?;
            documents.push(document);
        }
        Ok(documents)
    }

    fn find_by_artist_name(&self, artist_name: &str) -> Result<Option<ArtistDocument>> {
        let conn = self.lock()?;
        let found = conn
            .query_row(
                "SELECT id, artist_name, artist_image_url, albums, created_at, updated_at
                 FROM artists WHERE artist_name = ?1",
                params![artist_name],
                row_to_document,
            )
            .optional()?;

        match found {
            Some((mut document, albums_json)) => {
                document.albums = parse_albums(&albums_json)?;
                Ok(Some(document))
            }
            None => Ok(None),
        }
    }

    fn find_by_song_id(&self, song_id: &str) -> Result<Option<ArtistDocument>> {
        // Full scan. The documents are few and small, and song ids are only
        // resolvable by unwinding the album tree anyway.
        for document in self.get_all()? {
            let contains = document
                .albums
                .iter()
                .any(|album| album.songs.iter().any(|song| song.song_id == song_id));
            if contains {
                return Ok(Some(document));
            }
        }
        Ok(None)
    }

    fn save(&self, document: &ArtistDocument) -> Result<ArtistDocument> {
        let albums_json = serde_json::to_string(&document.albums)?;
        let now = Utc::now().timestamp();

        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO artists (id, artist_name, artist_image_url, albums, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)
             ON CONFLICT(id) DO UPDATE SET
                 artist_name = excluded.artist_name,
                 artist_image_url = excluded.artist_image_url,
                 albums = excluded.albums,
                 updated_at = excluded.updated_at",
            params![
                document.id,
                document.artist_name,
                document.artist_image_url,
                albums_json,
                now
            ],
        )
        .context("Failed to save artist document")?;

        let (mut stored, albums_json) = conn.query_row(
            "SELECT id, artist_name, artist_image_url, albums, created_at, updated_at
             FROM artists WHERE id = ?1",
            params![document.id],
            row_to_document,
        )?;
        stored.albums = parse_albums(&albums_json)?;
        Ok(stored)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM artists WHERE id = ?1", params![id])
            .context("Failed to delete artist document")?;
        Ok(())
    }
}
