use serde_json::Value;

use crate::{config, config::Credentials, spotify::FetchError, spotify::fetch};

/// Retrieves newly released albums from the Spotify Web API.
///
/// Fetches a single page from the `/browse/new-releases` endpoint through
/// the generic authenticated fetch and returns the response body verbatim.
/// The expected shape is `{"albums": {"items": [...]}}`; interpreting it is
/// left to [`crate::normalize::albums_to_records`], which treats an absent
/// `albums` key as "nothing found" rather than an error.
///
/// # Arguments
///
/// * `credentials` - Client credentials for the token exchange
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Value)` - The raw new-releases response; `{}` when no token could
///   be acquired
/// - `Err(FetchError::Transport)` - Network error or malformed response body
///
/// # Example
///
/// ```
/// let data = fetch_new_releases(&creds).await?;
/// let records = normalize::albums_to_records(&data);
/// ```
pub async fn fetch_new_releases(credentials: &Credentials) -> Result<Value, FetchError> {
    let api_url = format!(
        "{uri}/browse/new-releases",
        uri = &config::spotify_apiurl()
    );

    fetch::get_json(credentials, &api_url, &[]).await
}
