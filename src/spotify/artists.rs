use reqwest::Client;
use serde_json::Value;

use crate::{config, config::Credentials, spotify::FetchError, spotify::auth};

/// Searches the Spotify Web API for artists in a given genre.
///
/// Unlike the generic fetch, this path validates the token before the
/// request goes out, checks the HTTP status explicitly, and unwraps the
/// `artists.items` list from the response so callers receive the raw artist
/// entries directly.
///
/// # Arguments
///
/// * `credentials` - Client credentials for the token exchange
/// * `genre` - Genre to filter by; sent as `q=genre:<genre>`
/// * `limit` - Maximum number of artists to return (Spotify caps this at 50)
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Value>)` - The raw artist items from `artists.items`
/// - `Err(FetchError::Auth)` - No token could be acquired
/// - `Err(FetchError::Transport)` - Network error or non-success HTTP status
/// - `Err(FetchError::Shape)` - Response body lacks `artists.items`
///
/// # Error Distinction
///
/// Transport/HTTP failures and missing-key failures surface as distinct
/// variants so the caller can report them separately, mirroring the
/// taxonomy used throughout the API layer.
///
/// # Example
///
/// ```
/// let items = search_artists_by_genre(&creds, "rock", 50).await?;
/// let records = normalize::artists_to_records(&items);
/// ```
pub async fn search_artists_by_genre(
    credentials: &Credentials,
    genre: &str,
    limit: u32,
) -> Result<Vec<Value>, FetchError> {
    let token = match auth::acquire_token(credentials).await {
        Some(token) if !token.access_token.is_empty() => token,
        _ => {
            return Err(FetchError::Auth(
                "token could not be retrieved".to_string(),
            ));
        }
    };

    let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(&token.access_token)
        .query(&[
            ("q", format!("genre:{}", genre)),
            ("type", "artist".to_string()),
            ("limit", limit.to_string()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let data = response.json::<Value>().await?;

    match data["artists"]["items"].as_array() {
        Some(items) => Ok(items.clone()),
        None => Err(FetchError::Shape("artists.items".to_string())),
    }
}
