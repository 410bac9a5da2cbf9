use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spodcli::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fetch newly released albums and save them as CSV
    Releases(ReleasesOptions),

    /// Search artists by genre and save them as CSV
    Artists(ArtistsOptions),

    /// Display a previously saved CSV file as a table
    Show(ShowOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ReleasesOptions {
    /// Output CSV file (defaults to new_released_albums.csv)
    #[clap(long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistsOptions {
    /// Genre to search artists for (e.g. rock)
    pub genre: String,

    /// Maximum number of artists to fetch (Spotify caps this at 50)
    #[clap(long, default_value_t = 50)]
    pub limit: u32,

    /// Output CSV file (defaults to <genre>_artists.csv)
    #[clap(long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct ShowOptions {
    /// Album CSV file to display
    #[clap(long)]
    pub releases: Option<PathBuf>,

    /// Artist CSV file to display
    #[clap(long)]
    pub artists: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Releases(opt) => cli::export_releases(opt.output).await,
        Command::Artists(opt) => cli::export_artists(opt.genre, opt.limit, opt.output).await,
        Command::Show(opt) => cli::show(opt.releases, opt.artists),
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
