use reqwest::Client;
use serde_json::{Value, json};

use crate::{config::Credentials, spotify::FetchError, spotify::auth, warning};

/// Issues an authenticated GET request and returns the JSON body verbatim.
///
/// Acquires a fresh token, attaches it as a bearer header and sends a single
/// GET to `endpoint` with the given query parameters. The parsed JSON body
/// is returned untouched; callers are responsible for interpreting its shape.
///
/// # Arguments
///
/// * `credentials` - Client credentials for the token exchange
/// * `endpoint` - Absolute URL of the resource to fetch
/// * `params` - Query parameters appended to the request
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Value)` - The response body as parsed JSON; an empty object when
///   no token could be acquired
/// - `Err(FetchError::Transport)` - Network error or malformed response body
///
/// # Degraded Path
///
/// When token acquisition fails the failure is reported and `{}` is
/// returned instead of an error; downstream normalization treats the empty
/// object as "nothing found". This path performs no status-code check,
/// matching the permissive contract of the generic fetch.
///
/// # Example
///
/// ```
/// let url = format!("{}/browse/new-releases", config::spotify_apiurl());
/// let data = get_json(&creds, &url, &[]).await?;
/// ```
pub async fn get_json(
    credentials: &Credentials,
    endpoint: &str,
    params: &[(&str, String)],
) -> Result<Value, FetchError> {
    let token = match auth::acquire_token(credentials).await {
        Some(token) => token,
        None => {
            warning!("Unable to fetch access token.");
            return Ok(json!({}));
        }
    };

    let client = Client::new();
    let response = client
        .get(endpoint)
        .bearer_auth(&token.access_token)
        .query(params)
        .send()
        .await?;

    let json = response.json::<Value>().await?;

    Ok(json)
}
