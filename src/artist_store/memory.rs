//! In-memory artist store, used by engine unit tests.

use super::trait_def::ArtistStore;
use crate::catalog::ArtistDocument;
use anyhow::{anyhow, Result};
use chrono::Utc;
use std::sync::Mutex;

/// A `Vec`-backed [`ArtistStore`] with the same timestamp and unique-name
/// behavior as the SQLite store.
#[derive(Default)]
pub struct InMemoryArtistStore {
    documents: Mutex<Vec<ArtistDocument>>,
}

impl InMemoryArtistStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArtistStore for InMemoryArtistStore {
    fn get_all(&self) -> Result<Vec<ArtistDocument>> {
        Ok(self.documents.lock().unwrap().clone())
    }

    fn find_by_artist_name(&self, artist_name: &str) -> Result<Option<ArtistDocument>> {
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.artist_name == artist_name)
            .cloned())
    }

    fn find_by_song_id(&self, song_id: &str) -> Result<Option<ArtistDocument>> {
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .find(|d| {
                d.albums
                    .iter()
                    .any(|album| album.songs.iter().any(|song| song.song_id == song_id))
            })
            .cloned())
    }

    fn save(&self, document: &ArtistDocument) -> Result<ArtistDocument> {
        let mut documents = self.documents.lock().unwrap();
        let name_taken = documents
            .iter()
            .any(|d| d.artist_name == document.artist_name && d.id != document.id);
        if name_taken {
            return Err(anyhow!(
                "Artist name '{}' already exists",
                document.artist_name
            ));
        }

        let now = Utc::now();
        let mut stored = document.clone();
        stored.updated_at = now;

        match documents.iter_mut().find(|d| d.id == document.id) {
            Some(existing) => {
                stored.created_at = existing.created_at;
                *existing = stored.clone();
            }
            None => {
                stored.created_at = now;
                documents.push(stored.clone());
            }
        }
        Ok(stored)
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.documents.lock().unwrap().retain(|d| d.id != id);
        Ok(())
    }
}
