use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::{
    info,
    types::{AlbumRecord, ArtistRecord},
};

/// Persists a table of records as a CSV file.
///
/// An empty table reports "No data to save." and performs no file write at
/// all. Otherwise the file is fully overwritten with a header row (column
/// order follows the record's field declaration order) plus one row per
/// record. Writes are open-write-flush; there is no partial-write recovery.
pub fn save_csv<T: Serialize>(records: &[T], path: &Path) -> Result<(), String> {
    if records.is_empty() {
        info!("No data to save.");
        return Ok(());
    }

    let mut writer = csv::Writer::from_path(path).map_err(|e| e.to_string())?;
    for record in records {
        writer.serialize(record).map_err(|e| e.to_string())?;
    }
    writer.flush().map_err(|e| e.to_string())?;

    Ok(())
}

/// Reads a saved album CSV back into records.
pub fn read_album_csv(path: &Path) -> Result<Vec<AlbumRecord>, String> {
    read_csv(path)
}

/// Reads a saved artist CSV back into records.
pub fn read_artist_csv(path: &Path) -> Result<Vec<ArtistRecord>, String> {
    read_csv(path)
}

fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, String> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| e.to_string())?;

    let mut records: Vec<T> = Vec::new();
    for row in reader.deserialize() {
        records.push(row.map_err(|e| e.to_string())?);
    }

    Ok(records)
}
