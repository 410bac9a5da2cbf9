use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config::Credentials, error, export, normalize, spotify, spotify::FetchError, success,
};

pub async fn export_artists(genre: String, limit: u32, output: Option<PathBuf>) {
    let credentials = Credentials::from_env();
    let output = output.unwrap_or_else(|| PathBuf::from(format!("{}_artists.csv", genre)));

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Searching artists for genre {}...", genre));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let items = match spotify::artists::search_artists_by_genre(&credentials, &genre, limit).await {
        Ok(items) => items,
        Err(e) => {
            pb.finish_and_clear();
            match e {
                FetchError::Auth(msg) => error!("Token error: {}", msg),
                FetchError::Transport(err) => {
                    error!("An error occurred during the API request: {}", err)
                }
                FetchError::Shape(key) => error!("Expected data missing: {}", key),
            }
        }
    };
    pb.finish_and_clear();

    let records = normalize::artists_to_records(&items);

    if let Err(e) = export::save_csv(&records, &output) {
        error!("Failed to write {}: {}", output.display(), e);
    }

    if !records.is_empty() {
        success!(
            "Data saved to {} ({} artists).",
            output.display(),
            records.len()
        );
        println!("{}", Table::new(&records));
    }
}
