//! End-to-end tests for the search and statistics endpoints

mod common;

use common::{
    save_body, save_body_with_songs, TestClient, TestServer, ALBUM_1_NAME, ALBUM_2_NAME,
    ARTIST_1_NAME, ARTIST_2_NAME,
};
use reqwest::StatusCode;
use serde_json::Value;

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_without_query_returns_400() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.search_without_query().await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = client.search("").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_matches_song_name_case_insensitively() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    client
        .save_song(&save_body_with_songs(
            "A",
            "X",
            &[("Foo", "Rock"), ("Bar", "Jazz")],
        ))
        .await;

    let response = client.search("foo").await;
    assert_eq!(response.status(), StatusCode::OK);

    let results: Value = response.json().await.unwrap();
    let artists = results.as_array().unwrap();
    assert_eq!(artists.len(), 1);
    assert_eq!(artists[0]["albums"].as_array().unwrap().len(), 1);
    let songs = artists[0]["albums"][0]["songs"].as_array().unwrap();
    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0]["songName"], "Foo");
}

#[tokio::test]
async fn test_search_by_category_omits_albums_without_matches() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    client
        .save_song(&save_body(ARTIST_1_NAME, ALBUM_1_NAME, "Loud One", "Rock"))
        .await;
    client
        .save_song(&save_body(ARTIST_1_NAME, ALBUM_2_NAME, "Quiet One", "Classical"))
        .await;
    client
        .save_song(&save_body(ARTIST_2_NAME, "Elsewhere", "Other", "Jazz"))
        .await;

    let response = client.search("rock").await;
    let results: Value = response.json().await.unwrap();
    let artists = results.as_array().unwrap();

    assert_eq!(artists.len(), 1);
    assert_eq!(artists[0]["artistName"], ARTIST_1_NAME);
    let albums = artists[0]["albums"].as_array().unwrap();
    assert_eq!(albums.len(), 1);
    assert_eq!(albums[0]["albumName"], ALBUM_1_NAME);
}

#[tokio::test]
async fn test_search_with_no_matches_returns_empty_list() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    client
        .save_song(&save_body(ARTIST_1_NAME, ALBUM_1_NAME, "Foo", "Rock"))
        .await;

    let response = client.search("zzz").await;
    assert_eq!(response.status(), StatusCode::OK);
    let results: Value = response.json().await.unwrap();
    assert!(results.as_array().unwrap().is_empty());
}

// =============================================================================
// Statistics
// =============================================================================

#[tokio::test]
async fn test_statistics_on_empty_catalog_are_all_zero() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.statistics().await;
    assert_eq!(response.status(), StatusCode::OK);

    let report: Value = response.json().await.unwrap();
    assert_eq!(report["totalSongs"], 0);
    assert_eq!(report["totalArtists"], 0);
    assert_eq!(report["totalAlbums"], 0);
    assert_eq!(report["totalGenres"], 0);
    assert!(report["songsByGenre"].as_array().unwrap().is_empty());
    assert!(report["songsByArtist"].as_array().unwrap().is_empty());
    assert!(report["albumsByArtist"].as_array().unwrap().is_empty());
    assert!(report["songsInAlbum"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_statistics_count_songs_artists_albums_and_genres() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    client
        .save_song(&save_body_with_songs(
            ARTIST_1_NAME,
            ALBUM_1_NAME,
            &[("Foo", "Rock"), ("Bar", "Jazz")],
        ))
        .await;
    client
        .save_song(&save_body(ARTIST_2_NAME, ALBUM_2_NAME, "Baz", "Rock"))
        .await;

    let report: Value = client.statistics().await.json().await.unwrap();
    assert_eq!(report["totalSongs"], 3);
    assert_eq!(report["totalArtists"], 2);
    assert_eq!(report["totalAlbums"], 2);
    assert_eq!(report["totalGenres"], 2);

    let by_genre = report["songsByGenre"].as_array().unwrap();
    let rock = by_genre.iter().find(|b| b["name"] == "Rock").unwrap();
    assert_eq!(rock["count"], 2);
    let jazz = by_genre.iter().find(|b| b["name"] == "Jazz").unwrap();
    assert_eq!(jazz["count"], 1);

    let by_artist = report["songsByArtist"].as_array().unwrap();
    let artist1 = by_artist.iter().find(|b| b["name"] == ARTIST_1_NAME).unwrap();
    assert_eq!(artist1["count"], 2);
}

#[tokio::test]
async fn test_statistics_collapse_identical_album_names_across_artists() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    client
        .save_song(&save_body(ARTIST_1_NAME, "Greatest Hits", "Foo", "Rock"))
        .await;
    client
        .save_song(&save_body(ARTIST_2_NAME, "Greatest Hits", "Bar", "Jazz"))
        .await;

    let report: Value = client.statistics().await.json().await.unwrap();
    assert_eq!(report["totalAlbums"], 1);

    let in_album = report["songsInAlbum"].as_array().unwrap();
    assert_eq!(in_album.len(), 1);
    assert_eq!(in_album[0]["name"], "Greatest Hits");
    assert_eq!(in_album[0]["count"], 2);
}
