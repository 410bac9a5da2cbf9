use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{config::Credentials, error, export, normalize, spotify, success};

pub async fn export_releases(output: Option<PathBuf>) {
    let credentials = Credentials::from_env();
    let output = output.unwrap_or_else(|| PathBuf::from("new_released_albums.csv"));

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching new releases...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let data = match spotify::releases::fetch_new_releases(&credentials).await {
        Ok(data) => data,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch new releases: {}", e);
        }
    };
    pb.finish_and_clear();

    let records = normalize::albums_to_records(&data);

    if let Err(e) = export::save_csv(&records, &output) {
        error!("Failed to write {}: {}", output.display(), e);
    }

    if !records.is_empty() {
        success!(
            "Data saved to {} ({} albums).",
            output.display(),
            records.len()
        );
        println!("{}", Table::new(&records));
    }
}
