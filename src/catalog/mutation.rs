//! Catalog mutation engine.
//!
//! Locates artists, albums, and songs inside nested documents by identity
//! and applies create/merge/update/delete operations, persisting the whole
//! document afterwards. Locations are always re-resolved by song id since
//! nothing else about a song is stable across updates.

use super::validation::{SaveSong, SongUpdate};
use super::{Album, ArtistDocument, CatalogError, SongView};
use crate::artist_store::ArtistStore;
use std::sync::Arc;
use tracing::debug;

pub struct CatalogMutator {
    store: Arc<dyn ArtistStore>,
}

impl CatalogMutator {
    pub fn new(store: Arc<dyn ArtistStore>) -> Self {
        CatalogMutator { store }
    }

    /// Create a new artist document or merge the incoming albums into the
    /// existing document for that artist name. Returns the stored document.
    pub fn save_song(&self, incoming: SaveSong) -> Result<ArtistDocument, CatalogError> {
        let document = match self.store.find_by_artist_name(&incoming.artist_name)? {
            None => {
                debug!("Creating artist document for '{}'", incoming.artist_name);
                ArtistDocument::new(
                    incoming.artist_name,
                    incoming.artist_image_url,
                    incoming.albums,
                )
            }
            Some(mut document) => {
                debug!("Merging into artist document for '{}'", document.artist_name);
                merge_albums(&mut document.albums, incoming.albums);
                document
            }
        };
        Ok(self.store.save(&document)?)
    }

    /// Flattened view of a song: artist identity, owning album identity,
    /// and the song record itself.
    pub fn get_song(&self, song_id: &str) -> Result<SongView, CatalogError> {
        let document = self.require_document(song_id)?;
        let (album_index, song_index) =
            locate_song(&document, song_id).ok_or_else(song_not_found)?;
        let album = &document.albums[album_index];

        Ok(SongView {
            artist_name: document.artist_name.clone(),
            artist_image_url: document.artist_image_url.clone(),
            album_name: album.album_name.clone(),
            album_image_url: album.album_image_url.clone(),
            song: album.songs[song_index].clone(),
        })
    }

    /// Apply a partial update to the song with the given id, routing each
    /// present field to the artist, album, or song level. Absent fields are
    /// left untouched.
    pub fn update_song(
        &self,
        song_id: &str,
        update: SongUpdate,
    ) -> Result<ArtistDocument, CatalogError> {
        let mut document = self.require_document(song_id)?;
        let (album_index, song_index) =
            locate_song(&document, song_id).ok_or_else(song_not_found)?;

        apply_update(&mut document, album_index, song_index, update);
        Ok(self.store.save(&document)?)
    }

    /// Delete the song with the given id.
    ///
    /// When the owning album holds exactly one song, the entire artist
    /// document is deleted, even if the artist has other albums. Upstream
    /// behavior, deliberately preserved; see DESIGN.md before changing.
    pub fn delete_song(&self, song_id: &str) -> Result<(), CatalogError> {
        let mut document = self.require_document(song_id)?;

        let album_index = document
            .albums
            .iter()
            .position(|album| album.songs.iter().any(|song| song.song_id == song_id))
            .ok_or_else(|| CatalogError::NotFound("Album not found".to_string()))?;
        let song_index = document.albums[album_index]
            .songs
            .iter()
            .position(|song| song.song_id == song_id)
            .ok_or_else(song_not_found)?;

        if document.albums[album_index].songs.len() == 1 {
            debug!(
                "Deleting whole artist document '{}' with the last song of an album",
                document.artist_name
            );
            self.store.delete(&document.id)?;
            return Ok(());
        }

        document.albums[album_index].songs.remove(song_index);
        self.store.save(&document)?;
        Ok(())
    }

    fn require_document(&self, song_id: &str) -> Result<ArtistDocument, CatalogError> {
        self.store
            .find_by_song_id(song_id)?
            .ok_or_else(song_not_found)
    }
}

fn song_not_found() -> CatalogError {
    CatalogError::NotFound("Song not found".to_string())
}

/// Merge incoming albums into an existing album list.
///
/// Albums match by name. Within a matched album, songs match by name and a
/// name collision is a no-op: the existing song stays and the incoming one
/// is dropped, so two same-named songs can never coexist in one album.
fn merge_albums(existing: &mut Vec<Album>, incoming: Vec<Album>) {
    for new_album in incoming {
        match existing
            .iter_mut()
            .find(|album| album.album_name == new_album.album_name)
        {
            Some(album) => {
                for song in new_album.songs {
                    let already_present = album
                        .songs
                        .iter()
                        .any(|existing_song| existing_song.song_name == song.song_name);
                    if !already_present {
                        album.songs.push(song);
                    }
                }
            }
            None => existing.push(new_album),
        }
    }
}

/// The (album index, song index) of a song id inside a document.
fn locate_song(document: &ArtistDocument, song_id: &str) -> Option<(usize, usize)> {
    for (album_index, album) in document.albums.iter().enumerate() {
        if let Some(song_index) = album
            .songs
            .iter()
            .position(|song| song.song_id == song_id)
        {
            return Some((album_index, song_index));
        }
    }
    None
}

fn apply_update(
    document: &mut ArtistDocument,
    album_index: usize,
    song_index: usize,
    update: SongUpdate,
) {
    if let Some(artist_name) = update.artist_name {
        document.artist_name = artist_name;
    }
    if let Some(artist_image_url) = update.artist_image_url {
        document.artist_image_url = artist_image_url;
    }

    let album = &mut document.albums[album_index];
    if let Some(album_name) = update.album_name {
        album.album_name = album_name;
    }
    if let Some(album_image_url) = update.album_image_url {
        album.album_image_url = album_image_url;
    }

    let song = &mut album.songs[song_index];
    if let Some(song_name) = update.song_name {
        song.song_name = song_name;
    }
    if let Some(song_image_url) = update.song_image_url {
        song.song_image_url = song_image_url;
    }
    if let Some(song_url) = update.song_url {
        song.song_url = song_url;
    }
    if let Some(category) = update.category {
        song.category = category;
    }
}
