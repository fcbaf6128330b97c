//! Request body builders for end-to-end tests

use serde_json::{json, Value};

/// A valid save body with a single album holding a single song.
pub fn save_body(artist: &str, album: &str, song: &str, category: &str) -> Value {
    save_body_with_songs(artist, album, &[(song, category)])
}

/// A valid save body with a single album holding several songs.
pub fn save_body_with_songs(artist: &str, album: &str, songs: &[(&str, &str)]) -> Value {
    let songs: Vec<Value> = songs
        .iter()
        .map(|(name, category)| {
            json!({
                "songName": name,
                "songImageURL": format!("http://images.example/{}.jpg", name),
                "songURL": format!("http://audio.example/{}.mp3", name),
                "category": category,
            })
        })
        .collect();

    json!({
        "artistName": artist,
        "artistImageURL": format!("http://images.example/{}.jpg", artist),
        "albums": [{
            "albumName": album,
            "albumImageURL": format!("http://images.example/{}.jpg", album),
            "songs": songs,
        }],
    })
}
