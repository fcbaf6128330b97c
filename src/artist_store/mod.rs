pub mod memory;
pub mod sqlite_store;
mod trait_def;

pub use memory::InMemoryArtistStore;
pub use sqlite_store::SqliteArtistStore;
pub use trait_def::ArtistStore;
