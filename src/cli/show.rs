use std::path::PathBuf;

use tabled::Table;

use crate::{export, warning};

pub fn show(releases: Option<PathBuf>, artists: Option<PathBuf>) {
    if let Some(path) = releases {
        match export::read_album_csv(&path) {
            Ok(records) if records.is_empty() => {
                warning!("{} holds no records.", path.display())
            }
            Ok(records) => println!("{}", Table::new(records)),
            Err(e) => warning!("Failed to read {}: {}", path.display(), e),
        }
    }

    if let Some(path) = artists {
        match export::read_artist_csv(&path) {
            Ok(records) if records.is_empty() => {
                warning!("{} holds no records.", path.display())
            }
            Ok(records) => println!("{}", Table::new(records)),
            Err(e) => warning!("Failed to read {}: {}", path.display(), e),
        }
    }
}
