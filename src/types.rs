use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Bearer token obtained through the client-credentials grant.
///
/// Held only for the duration of a single fetch; every fetch requests a
/// fresh token, so there is no refresh or expiry bookkeeping.
#[derive(Debug, Clone)]
pub struct Token {
    pub access_token: String,
    pub obtained_at: u64,
}

/// Flat album row as written to CSV. Field declaration order is the CSV
/// column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct AlbumRecord {
    pub album_name: String,
    pub artist_name: String,
    pub release_date: String,
}

/// Flat artist row as written to CSV. `index` is 1-based and sequential
/// over the kept items in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct ArtistRecord {
    pub index: usize,
    pub name: String,
    pub popularity: u32,
    pub followers: u64,
}
