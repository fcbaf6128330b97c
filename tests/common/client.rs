//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per catalog endpoint. When routes or
//! request formats change, update only this file.

use super::constants::REQUEST_TIMEOUT_SECS;
use reqwest::Response;
use serde_json::Value;
use std::time::Duration;

pub struct TestClient {
    pub client: reqwest::Client,
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    pub async fn save_song(&self, body: &Value) -> Response {
        self.client
            .post(format!("{}/api/song/save", self.base_url))
            .json(body)
            .send()
            .await
            .expect("save request failed")
    }

    pub async fn get_all_songs(&self) -> Response {
        self.client
            .get(format!("{}/api/song/", self.base_url))
            .send()
            .await
            .expect("list request failed")
    }

    pub async fn get_song(&self, song_id: &str) -> Response {
        self.client
            .get(format!("{}/api/song/{}", self.base_url, song_id))
            .send()
            .await
            .expect("get request failed")
    }

    pub async fn update_song(&self, song_id: &str, body: &Value) -> Response {
        self.client
            .put(format!("{}/api/song/{}", self.base_url, song_id))
            .json(body)
            .send()
            .await
            .expect("update request failed")
    }

    pub async fn delete_song(&self, song_id: &str) -> Response {
        self.client
            .delete(format!("{}/api/song/{}", self.base_url, song_id))
            .send()
            .await
            .expect("delete request failed")
    }

    pub async fn search(&self, query: &str) -> Response {
        self.client
            .get(format!("{}/api/song/search", self.base_url))
            .query(&[("query", query)])
            .send()
            .await
            .expect("search request failed")
    }

    pub async fn search_without_query(&self) -> Response {
        self.client
            .get(format!("{}/api/song/search", self.base_url))
            .send()
            .await
            .expect("search request failed")
    }

    pub async fn statistics(&self) -> Response {
        self.client
            .get(format!("{}/api/song/stat", self.base_url))
            .send()
            .await
            .expect("stat request failed")
    }
}
