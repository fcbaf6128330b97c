//! Validation for inbound song payloads.
//!
//! Payloads arrive with every field optional so that schema violations are
//! reported as structured field errors instead of deserialization failures.
//! Validation always runs before any store write; the first violated field
//! wins.

use super::models::{Album, Category, Song};
use serde::Deserialize;
use std::fmt;
use url::Url;

/// A single schema violation, carrying the offending field path.
#[derive(Debug, PartialEq)]
pub enum PayloadViolation {
    MissingField { field: String },
    EmptySequence { field: String },
    InvalidUri { field: String, value: String },
    UnknownCategory { field: String, value: String },
}

impl PayloadViolation {
    /// The dotted path of the offending field, e.g. `albums[0].songs[1].category`.
    pub fn field(&self) -> &str {
        match self {
            PayloadViolation::MissingField { field } => field,
            PayloadViolation::EmptySequence { field } => field,
            PayloadViolation::InvalidUri { field, .. } => field,
            PayloadViolation::UnknownCategory { field, .. } => field,
        }
    }
}

impl fmt::Display for PayloadViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadViolation::MissingField { field } => {
                write!(f, "Field '{}' is required but was missing or empty", field)
            }
            PayloadViolation::EmptySequence { field } => {
                write!(f, "Field '{}' must be a non-empty list", field)
            }
            PayloadViolation::InvalidUri { field, value } => {
                write!(f, "Field '{}' must be a valid URI, got '{}'", field, value)
            }
            PayloadViolation::UnknownCategory { field, value } => {
                write!(
                    f,
                    "Field '{}' must be one of {}, got '{}'",
                    field,
                    Category::ALL.map(|c| c.as_wire_str()).join(", "),
                    value
                )
            }
        }
    }
}

impl std::error::Error for PayloadViolation {}

/// Result type for payload validation.
pub type ValidationResult<T> = Result<T, PayloadViolation>;

// =============================================================================
// Inbound payloads
// =============================================================================

/// Body of `POST /api/song/save` before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSongRequest {
    pub artist_name: Option<String>,
    #[serde(rename = "artistImageURL")]
    pub artist_image_url: Option<String>,
    pub albums: Option<Vec<AlbumPayload>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumPayload {
    pub album_name: Option<String>,
    #[serde(rename = "albumImageURL")]
    pub album_image_url: Option<String>,
    pub songs: Option<Vec<SongPayload>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongPayload {
    pub song_name: Option<String>,
    #[serde(rename = "songImageURL")]
    pub song_image_url: Option<String>,
    #[serde(rename = "songURL")]
    pub song_url: Option<String>,
    pub category: Option<String>,
}

/// Body of `PUT /api/song/{id}` before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSongRequest {
    pub artist_name: Option<String>,
    #[serde(rename = "artistImageURL")]
    pub artist_image_url: Option<String>,
    pub album_name: Option<String>,
    #[serde(rename = "albumImageURL")]
    pub album_image_url: Option<String>,
    pub song_name: Option<String>,
    #[serde(rename = "songImageURL")]
    pub song_image_url: Option<String>,
    #[serde(rename = "songURL")]
    pub song_url: Option<String>,
    pub category: Option<String>,
}

// =============================================================================
// Validated shapes
// =============================================================================

/// A validated save payload with song ids already minted.
#[derive(Debug)]
pub struct SaveSong {
    pub artist_name: String,
    pub artist_image_url: String,
    pub albums: Vec<Album>,
}

/// A validated partial update. Absent fields are left untouched.
#[derive(Debug, Default)]
pub struct SongUpdate {
    pub artist_name: Option<String>,
    pub artist_image_url: Option<String>,
    pub album_name: Option<String>,
    pub album_image_url: Option<String>,
    pub song_name: Option<String>,
    pub song_image_url: Option<String>,
    pub song_url: Option<String>,
    pub category: Option<Category>,
}

// =============================================================================
// Validation functions
// =============================================================================

fn required_string(value: &Option<String>, field: &str) -> ValidationResult<String> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s.clone()),
        _ => Err(PayloadViolation::MissingField {
            field: field.to_string(),
        }),
    }
}

fn required_uri(value: &Option<String>, field: &str) -> ValidationResult<String> {
    let s = required_string(value, field)?;
    check_uri(&s, field)?;
    Ok(s)
}

/// An optional URI field: absent is fine, present must parse.
fn optional_uri(value: &Option<String>, field: &str) -> ValidationResult<Option<String>> {
    match value {
        Some(s) if !s.is_empty() => {
            check_uri(s, field)?;
            Ok(Some(s.clone()))
        }
        _ => Ok(None),
    }
}

fn check_uri(value: &str, field: &str) -> ValidationResult<()> {
    if Url::parse(value).is_err() {
        return Err(PayloadViolation::InvalidUri {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

fn parse_category(value: &str, field: &str) -> ValidationResult<Category> {
    Category::from_wire_str(value).ok_or_else(|| PayloadViolation::UnknownCategory {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Validate a creation payload and convert it into typed albums with song
/// ids minted.
pub fn validate_save(request: &SaveSongRequest) -> ValidationResult<SaveSong> {
    let artist_name = required_string(&request.artist_name, "artistName")?;
    let artist_image_url = optional_uri(&request.artist_image_url, "artistImageURL")?
        .unwrap_or_default();

    let album_payloads = match &request.albums {
        Some(albums) if !albums.is_empty() => albums,
        Some(_) => {
            return Err(PayloadViolation::EmptySequence {
                field: "albums".to_string(),
            })
        }
        None => {
            return Err(PayloadViolation::MissingField {
                field: "albums".to_string(),
            })
        }
    };

    let mut albums = Vec::with_capacity(album_payloads.len());
    for (album_index, album) in album_payloads.iter().enumerate() {
        let prefix = format!("albums[{}]", album_index);
        let album_name = required_string(&album.album_name, &format!("{}.albumName", prefix))?;
        let album_image_url =
            optional_uri(&album.album_image_url, &format!("{}.albumImageURL", prefix))?
                .unwrap_or_default();

        let song_payloads = match &album.songs {
            Some(songs) if !songs.is_empty() => songs,
            Some(_) => {
                return Err(PayloadViolation::EmptySequence {
                    field: format!("{}.songs", prefix),
                })
            }
            None => {
                return Err(PayloadViolation::MissingField {
                    field: format!("{}.songs", prefix),
                })
            }
        };

        let mut songs = Vec::with_capacity(song_payloads.len());
        for (song_index, song) in song_payloads.iter().enumerate() {
            let prefix = format!("{}.songs[{}]", prefix, song_index);
            let song_name = required_string(&song.song_name, &format!("{}.songName", prefix))?;
            let song_image_url =
                required_uri(&song.song_image_url, &format!("{}.songImageURL", prefix))?;
            let song_url = required_uri(&song.song_url, &format!("{}.songURL", prefix))?;
            let category_value =
                required_string(&song.category, &format!("{}.category", prefix))?;
            let category = parse_category(&category_value, &format!("{}.category", prefix))?;
            songs.push(Song::new(song_name, song_image_url, song_url, category));
        }

        albums.push(Album {
            album_name,
            album_image_url,
            songs,
        });
    }

    Ok(SaveSong {
        artist_name,
        artist_image_url,
        albums,
    })
}

/// An empty string in an update means "leave untouched", same as absence.
fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|s| !s.is_empty()).map(str::to_string)
}

/// Validate a partial update payload. Every field is optional; URI fields
/// must parse when present and `category` must be one of the known values.
pub fn validate_update(request: &UpdateSongRequest) -> ValidationResult<SongUpdate> {
    let category = match &request.category {
        Some(value) => Some(parse_category(value, "category")?),
        None => None,
    };

    Ok(SongUpdate {
        artist_name: non_empty(&request.artist_name),
        artist_image_url: optional_uri(&request.artist_image_url, "artistImageURL")?,
        album_name: non_empty(&request.album_name),
        album_image_url: optional_uri(&request.album_image_url, "albumImageURL")?,
        song_name: non_empty(&request.song_name),
        song_image_url: optional_uri(&request.song_image_url, "songImageURL")?,
        song_url: optional_uri(&request.song_url, "songURL")?,
        category,
    })
}
