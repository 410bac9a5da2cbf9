use serde_json::Value;

use crate::{
    types::{AlbumRecord, ArtistRecord},
    warning,
};

/// Flattens a new-releases response into album records.
///
/// Expects `albums.items` in the input; when either key is absent the
/// condition is logged and an empty table is returned, never an error.
/// A malformed item (missing name or release date, empty artist list) is
/// logged and skipped; the remaining items keep processing.
pub fn albums_to_records(data: &Value) -> Vec<AlbumRecord> {
    let items = match data["albums"]["items"].as_array() {
        Some(items) => items,
        None => {
            warning!("No albums found.");
            return Vec::new();
        }
    };

    let mut records: Vec<AlbumRecord> = Vec::new();
    for (pos, album) in items.iter().enumerate() {
        match extract_album(album) {
            Some(record) => records.push(record),
            None => warning!("Skipping malformed album entry at position {}", pos + 1),
        }
    }

    records
}

// First artist wins; albums without any artist entry are malformed.
fn extract_album(album: &Value) -> Option<AlbumRecord> {
    Some(AlbumRecord {
        album_name: album.get("name")?.as_str()?.to_string(),
        artist_name: album
            .get("artists")?
            .as_array()?
            .first()?
            .get("name")?
            .as_str()?
            .to_string(),
        release_date: album.get("release_date")?.as_str()?.to_string(),
    })
}

/// Flattens a list of raw artist entries into artist records.
///
/// Scalar fields default rather than fail: a missing `name` becomes
/// "Unknown", missing `popularity` and `followers.total` become 0. An entry
/// that is not a JSON object at all is logged and skipped. Indices are
/// assigned 1-based and sequential over the kept items in input order, so
/// skips never leave gaps.
pub fn artists_to_records(items: &[Value]) -> Vec<ArtistRecord> {
    if items.is_empty() {
        warning!("No artists found for the given genre.");
        return Vec::new();
    }

    let mut records: Vec<ArtistRecord> = Vec::new();
    for (pos, artist) in items.iter().enumerate() {
        let entry = match artist.as_object() {
            Some(entry) => entry,
            None => {
                warning!("Error processing artist data at position {}", pos + 1);
                continue;
            }
        };

        records.push(ArtistRecord {
            index: records.len() + 1,
            name: entry
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("Unknown")
                .to_string(),
            popularity: entry
                .get("popularity")
                .and_then(Value::as_u64)
                .unwrap_or(0) as u32,
            followers: entry
                .get("followers")
                .and_then(|followers| followers.get("total"))
                .and_then(Value::as_u64)
                .unwrap_or(0),
        });
    }

    records
}
