use anyhow::Result;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use tracing::error;

use crate::artist_store::ArtistStore;
use crate::catalog::{
    validate_save, validate_update, CatalogError, CatalogMutator, CatalogStats, PayloadViolation,
};
use crate::catalog::validation::{SaveSongRequest, UpdateSongRequest};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::{log_requests, state::*, RequestsLoggingLevel, ServerConfig};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

#[derive(Serialize)]
struct DataResponse<T: Serialize> {
    success: bool,
    data: T,
}

impl<T: Serialize> DataResponse<T> {
    fn ok(data: T) -> Json<Self> {
        Json(DataResponse {
            success: true,
            data,
        })
    }
}

#[derive(Serialize)]
struct MessageResponse {
    success: bool,
    message: String,
}

#[derive(Serialize)]
struct ValidationErrorResponse {
    success: bool,
    field: String,
    message: String,
}

#[derive(Deserialize, Debug)]
struct SearchParams {
    query: Option<String>,
}

fn validation_response(violation: PayloadViolation) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ValidationErrorResponse {
            success: false,
            field: violation.field().to_string(),
            message: violation.to_string(),
        }),
    )
        .into_response()
}

fn error_response(err: CatalogError) -> Response {
    let status = match &err {
        CatalogError::BadRequest(_) => StatusCode::BAD_REQUEST,
        CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
        CatalogError::Store(underlying) => {
            error!("Store error: {:#}", underlying);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (
        status,
        Json(MessageResponse {
            success: false,
            message: err.to_string(),
        }),
    )
        .into_response()
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
    };
    Json(stats)
}

async fn save_song(
    State(mutator): State<GuardedMutator>,
    Json(body): Json<SaveSongRequest>,
) -> Response {
    let incoming = match validate_save(&body) {
        Ok(incoming) => incoming,
        Err(violation) => return validation_response(violation),
    };
    match mutator.save_song(incoming) {
        Ok(document) => DataResponse::ok(document).into_response(),
        Err(err) => error_response(err),
    }
}

async fn get_all_songs(State(store): State<GuardedArtistStore>) -> Response {
    match store.get_all() {
        Ok(documents) => Json(documents).into_response(),
        Err(err) => error_response(CatalogError::Store(err)),
    }
}

async fn search_songs(
    State(stats): State<GuardedStats>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = params.query.unwrap_or_default();
    match stats.search_songs(&query) {
        Ok(results) => Json(results).into_response(),
        Err(err) => error_response(err),
    }
}

async fn get_statistics(State(stats): State<GuardedStats>) -> Response {
    match stats.overall_statistics() {
        Ok(report) => Json(report).into_response(),
        Err(err) => error_response(err),
    }
}

async fn get_song(State(mutator): State<GuardedMutator>, Path(id): Path<String>) -> Response {
    match mutator.get_song(&id) {
        Ok(view) => DataResponse::ok(view).into_response(),
        Err(err) => error_response(err),
    }
}

async fn put_song(
    State(mutator): State<GuardedMutator>,
    Path(id): Path<String>,
    Json(body): Json<UpdateSongRequest>,
) -> Response {
    let update = match validate_update(&body) {
        Ok(update) => update,
        Err(violation) => return validation_response(violation),
    };
    match mutator.update_song(&id, update) {
        Ok(document) => DataResponse::ok(document).into_response(),
        Err(err) => error_response(err),
    }
}

async fn delete_song(State(mutator): State<GuardedMutator>, Path(id): Path<String>) -> Response {
    match mutator.delete_song(&id) {
        Ok(()) => Json(MessageResponse {
            success: true,
            message: "Song deleted successfully".to_string(),
        })
        .into_response(),
        Err(err) => error_response(err),
    }
}

impl ServerState {
    fn new(config: ServerConfig, artist_store: Arc<dyn ArtistStore>) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            mutator: Arc::new(CatalogMutator::new(artist_store.clone())),
            stats: Arc::new(CatalogStats::new(artist_store.clone())),
            artist_store,
        }
    }
}

pub fn make_app(config: ServerConfig, artist_store: Arc<dyn ArtistStore>) -> Router {
    let state = ServerState::new(config, artist_store);

    let song_routes: Router = Router::new()
        .route("/save", post(save_song))
        .route("/", get(get_all_songs))
        .route("/search", get(search_songs))
        .route("/stat", get(get_statistics))
        .route("/{id}", get(get_song))
        .route("/{id}", put(put_song))
        .route("/{id}", delete(delete_song))
        .with_state(state.clone());

    Router::new()
        .route("/", get(home))
        .with_state(state.clone())
        .nest("/api/song", song_routes)
        .layer(middleware::from_fn_with_state(state.config.clone(), log_requests))
}

pub async fn run_server(
    artist_store: Arc<dyn ArtistStore>,
    requests_logging_level: RequestsLoggingLevel,
    port: u16,
) -> Result<()> {
    let config = ServerConfig {
        port,
        requests_logging_level,
    };
    let app = make_app(config, artist_store);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    Ok(axum::serve(listener, app).await?)
}
