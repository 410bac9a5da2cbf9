//! # Spotify Module
//!
//! This module provides the client side of the Spotify Web API integration:
//! token acquisition via the client-credentials grant and authenticated
//! fetches against the catalog endpoints.
//!
//! ## Submodules
//!
//! - [`auth`] - Exchanges client credentials for a bearer token
//! - [`fetch`] - Generic authenticated GET returning the JSON body verbatim
//! - [`releases`] - New-releases browse endpoint
//! - [`artists`] - Genre-filtered artist search endpoint
//!
//! ## Error Handling
//!
//! Every network-calling function returns a typed result built on
//! [`FetchError`]; callers decide uniformly how to log or degrade instead of
//! each call site inventing its own policy. The one deliberate exception is
//! token acquisition, which collapses all failure modes into an explicit
//! absence ([`auth::acquire_token`] returns `Option<Token>`).
//!
//! ## Concurrency
//!
//! All calls are sequential awaits with one request in flight at a time.
//! Each fetch acquires its own token; no state is shared between calls.

use std::fmt;

pub mod artists;
pub mod auth;
pub mod fetch;
pub mod releases;

/// Failure taxonomy for the API layer.
#[derive(Debug)]
pub enum FetchError {
    /// Token endpoint unreachable, non-success status, or missing
    /// `access_token` field.
    Auth(String),
    /// Network-level error on an authenticated GET, or a non-success HTTP
    /// status where the call site checks one.
    Transport(reqwest::Error),
    /// An expected key was absent from the response JSON.
    Shape(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err)
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Auth(msg) => write!(f, "authentication failed: {}", msg),
            FetchError::Transport(err) => write!(f, "request failed: {}", err),
            FetchError::Shape(msg) => write!(f, "expected data missing: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}
