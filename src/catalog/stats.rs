//! Aggregation and search over the catalog.
//!
//! Both operations unwind the nested documents into flattened
//! (artist, album, song) records. Album names are grouped globally, not
//! per artist, so identical album names from different artists collapse
//! into one bucket. That grouping key is part of the contract.

use super::{Album, ArtistDocument, CatalogError, Category};
use crate::artist_store::ArtistStore;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// One named bucket in a statistics breakdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    pub name: String,
    pub count: usize,
}

/// Catalog-wide statistics report.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStatistics {
    pub total_songs: usize,
    pub total_artists: usize,
    pub total_albums: usize,
    pub total_genres: usize,
    pub songs_by_genre: Vec<GroupCount>,
    pub songs_by_artist: Vec<GroupCount>,
    pub albums_by_artist: Vec<GroupCount>,
    pub songs_in_album: Vec<GroupCount>,
}

/// An artist with its albums filtered down to matching songs.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteredArtist {
    pub artist_name: String,
    #[serde(rename = "artistImageURL")]
    pub artist_image_url: String,
    pub albums: Vec<Album>,
}

pub struct CatalogStats {
    store: Arc<dyn ArtistStore>,
}

impl CatalogStats {
    pub fn new(store: Arc<dyn ArtistStore>) -> Self {
        CatalogStats { store }
    }

    /// Counts and groupings over the whole catalog. All counts are 0 and all
    /// breakdowns empty when the catalog is empty. Bucket order is
    /// deterministic: name buckets sort lexicographically, genre buckets
    /// follow the category declaration order.
    pub fn overall_statistics(&self) -> Result<CatalogStatistics, CatalogError> {
        let documents = self.store.get_all()?;

        let mut total_songs = 0;
        let mut album_names: BTreeSet<String> = BTreeSet::new();
        let mut genres: BTreeSet<Category> = BTreeSet::new();
        let mut songs_by_genre: BTreeMap<Category, usize> = BTreeMap::new();
        let mut songs_by_artist: BTreeMap<String, usize> = BTreeMap::new();
        let mut albums_by_artist: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        let mut songs_in_album: BTreeMap<String, usize> = BTreeMap::new();

        for document in &documents {
            for album in &document.albums {
                album_names.insert(album.album_name.clone());
                albums_by_artist
                    .entry(document.artist_name.clone())
                    .or_default()
                    .insert(album.album_name.clone());
                for song in &album.songs {
                    total_songs += 1;
                    genres.insert(song.category);
                    *songs_by_genre.entry(song.category).or_default() += 1;
                    *songs_by_artist
                        .entry(document.artist_name.clone())
                        .or_default() += 1;
                    *songs_in_album.entry(album.album_name.clone()).or_default() += 1;
                }
            }
        }

        Ok(CatalogStatistics {
            total_songs,
            total_artists: documents.len(),
            total_albums: album_names.len(),
            total_genres: genres.len(),
            songs_by_genre: songs_by_genre
                .into_iter()
                .map(|(category, count)| GroupCount {
                    name: category.as_wire_str().to_string(),
                    count,
                })
                .collect(),
            songs_by_artist: into_group_counts(songs_by_artist),
            albums_by_artist: albums_by_artist
                .into_iter()
                .map(|(name, albums)| GroupCount {
                    name,
                    count: albums.len(),
                })
                .collect(),
            songs_in_album: into_group_counts(songs_in_album),
        })
    }

    /// Case-insensitive substring search over song name, artist name, and
    /// category, regrouped into an artist → album → songs tree. Albums (and
    /// artists) left without matching songs are dropped.
    pub fn search_songs(&self, query: &str) -> Result<Vec<FilteredArtist>, CatalogError> {
        if query.is_empty() {
            return Err(CatalogError::BadRequest(
                "Search query must not be empty".to_string(),
            ));
        }
        let needle = query.to_lowercase();

        let mut results = Vec::new();
        for document in self.store.get_all()? {
            if let Some(artist) = filter_document(&document, &needle) {
                results.push(artist);
            }
        }
        Ok(results)
    }
}

fn filter_document(document: &ArtistDocument, needle: &str) -> Option<FilteredArtist> {
    let artist_matches = document.artist_name.to_lowercase().contains(needle);

    let albums: Vec<Album> = document
        .albums
        .iter()
        .filter_map(|album| {
            let songs: Vec<_> = album
                .songs
                .iter()
                .filter(|song| {
                    artist_matches
                        || song.song_name.to_lowercase().contains(needle)
                        || song.category.as_wire_str().to_lowercase().contains(needle)
                })
                .cloned()
                .collect();
            if songs.is_empty() {
                None
            } else {
                Some(Album {
                    album_name: album.album_name.clone(),
                    album_image_url: album.album_image_url.clone(),
                    songs,
                })
            }
        })
        .collect();

    if albums.is_empty() {
        return None;
    }
    Some(FilteredArtist {
        artist_name: document.artist_name.clone(),
        artist_image_url: document.artist_image_url.clone(),
        albums,
    })
}

fn into_group_counts(buckets: BTreeMap<String, usize>) -> Vec<GroupCount> {
    buckets
        .into_iter()
        .map(|(name, count)| GroupCount { name, count })
        .collect()
}
