//! Catalog document models.
//!
//! One `ArtistDocument` aggregates every album and song for a given artist
//! name. Wire field names are camelCase with the `URL` suffix spelled out,
//! matching the public API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Song category enumeration. Wire values are fixed and case-sensitive.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Classical,
    Popular,
    Rock,
    #[serde(rename = "Hip Hop")]
    HipHop,
    Jazz,
    Electronic,
    Folk,
    Blues,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Classical,
        Category::Popular,
        Category::Rock,
        Category::HipHop,
        Category::Jazz,
        Category::Electronic,
        Category::Folk,
        Category::Blues,
    ];

    /// Parse from the wire string representation.
    pub fn from_wire_str(s: &str) -> Option<Self> {
        match s {
            "Classical" => Some(Category::Classical),
            "Popular" => Some(Category::Popular),
            "Rock" => Some(Category::Rock),
            "Hip Hop" => Some(Category::HipHop),
            "Jazz" => Some(Category::Jazz),
            "Electronic" => Some(Category::Electronic),
            "Folk" => Some(Category::Folk),
            "Blues" => Some(Category::Blues),
            _ => None,
        }
    }

    /// Convert to the wire string representation.
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            Category::Classical => "Classical",
            Category::Popular => "Popular",
            Category::Rock => "Rock",
            Category::HipHop => "Hip Hop",
            Category::Jazz => "Jazz",
            Category::Electronic => "Electronic",
            Category::Folk => "Folk",
            Category::Blues => "Blues",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_wire_str())
    }
}

/// Song entity, always owned by exactly one album.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub song_id: String,
    pub song_name: String,
    #[serde(rename = "songImageURL")]
    pub song_image_url: String,
    #[serde(rename = "songURL")]
    pub song_url: String,
    pub category: Category,
}

impl Song {
    /// Create a song with a freshly minted id.
    pub fn new(
        song_name: String,
        song_image_url: String,
        song_url: String,
        category: Category,
    ) -> Self {
        Song {
            song_id: Uuid::new_v4().to_string(),
            song_name,
            song_image_url,
            song_url,
            category,
        }
    }
}

/// Album entity, always owned by exactly one artist document.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub album_name: String,
    #[serde(rename = "albumImageURL", default)]
    pub album_image_url: String,
    pub songs: Vec<Song>,
}

/// Top-level persisted document, keyed by artist name.
///
/// `created_at` and `updated_at` are owned by the store: set on insert,
/// bumped on every save, never client-settable.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistDocument {
    pub id: String,
    pub artist_name: String,
    #[serde(rename = "artistImageURL", default)]
    pub artist_image_url: String,
    pub albums: Vec<Album>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArtistDocument {
    /// Create a new document with a minted id. Timestamps are placeholders
    /// until the store persists the document.
    pub fn new(artist_name: String, artist_image_url: String, albums: Vec<Album>) -> Self {
        let now = Utc::now();
        ArtistDocument {
            id: Uuid::new_v4().to_string(),
            artist_name,
            artist_image_url,
            albums,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Flattened view of a single song: artist and album identity plus the
/// song record, produced by get-by-id.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongView {
    pub artist_name: String,
    #[serde(rename = "artistImageURL")]
    pub artist_image_url: String,
    pub album_name: String,
    #[serde(rename = "albumImageURL")]
    pub album_image_url: String,
    pub song: Song,
}
