pub mod models;
pub mod mutation;
pub mod stats;
pub mod validation;

pub use models::{Album, ArtistDocument, Category, Song, SongView};
pub use mutation::CatalogMutator;
pub use stats::{CatalogStatistics, CatalogStats, FilteredArtist, GroupCount};
pub use validation::{validate_save, validate_update, PayloadViolation};

use thiserror::Error;

/// Engine-level error taxonomy. Validation failures are rejected before the
/// engines run and carry their own type ([`PayloadViolation`]).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request shape was fine but its content is unusable (400).
    #[error("{0}")]
    BadRequest(String),

    /// An id or name resolved to nothing (404).
    #[error("{0}")]
    NotFound(String),

    /// The document store failed (500).
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}
