//! Shared constants for end-to-end tests

pub const REQUEST_TIMEOUT_SECS: u64 = 10;

pub const ARTIST_1_NAME: &str = "Aster Aweke";
pub const ARTIST_2_NAME: &str = "Mulatu Astatke";
pub const ALBUM_1_NAME: &str = "Kabu";
pub const ALBUM_2_NAME: &str = "Mulatu of Ethiopia";
