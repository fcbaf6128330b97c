use axum::extract::FromRef;

use crate::artist_store::ArtistStore;
use crate::catalog::{CatalogMutator, CatalogStats};
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedArtistStore = Arc<dyn ArtistStore>;
pub type GuardedMutator = Arc<CatalogMutator>;
pub type GuardedStats = Arc<CatalogStats>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub artist_store: GuardedArtistStore,
    pub mutator: GuardedMutator,
    pub stats: GuardedStats,
}

impl FromRef<ServerState> for GuardedArtistStore {
    fn from_ref(input: &ServerState) -> Self {
        input.artist_store.clone()
    }
}

impl FromRef<ServerState> for GuardedMutator {
    fn from_ref(input: &ServerState) -> Self {
        input.mutator.clone()
    }
}

impl FromRef<ServerState> for GuardedStats {
    fn from_ref(input: &ServerState) -> Self {
        input.stats.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
