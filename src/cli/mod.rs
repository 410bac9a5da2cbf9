//! # CLI Module
//!
//! This module provides the command-line interface layer for Spodcli, a
//! Spotify API client that exports catalog data as CSV files. It implements
//! all user-facing commands and coordinates between the API layer, the
//! normalization step and CSV persistence.
//!
//! ## Commands
//!
//! - [`export_releases`] - Fetches newly released albums and saves them as CSV
//! - [`export_artists`] - Searches artists by genre and saves them as CSV
//! - [`show`] - Reads a previously saved CSV back and renders it as a table
//!
//! ## Architecture Design
//!
//! Each command follows the same linear flow:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! API Layer (Spotify Integration)
//!     ↓
//! Normalization (JSON → Records)
//!     ↓
//! Export (CSV Persistence)
//! ```
//!
//! Commands handle user interaction, progress feedback and error
//! presentation; typed failures from the API layer are mapped to the
//! diagnostic macros here rather than inside the network code.

mod artists;
mod releases;
mod show;

pub use artists::export_artists;
pub use releases::export_releases;
pub use show::show;
