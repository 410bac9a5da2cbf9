use chrono::Utc;
use reqwest::Client;
use serde_json::Value;

use crate::{config::Credentials, types::Token, warning};

/// Exchanges client credentials for an access token.
///
/// Sends a single form-encoded POST to the configured token endpoint with
/// the `client_credentials` grant type and the application's client id and
/// secret, and reads the `access_token` field from the JSON response.
///
/// # Arguments
///
/// * `credentials` - Client id, secret and token endpoint URL
///
/// # Returns
///
/// Returns `Some(Token)` carrying the token string and the acquisition
/// timestamp, or `None` when no token could be obtained. The caller always
/// receives an explicit absence; this function never panics and never
/// propagates an error.
///
/// # Failure Conditions
///
/// All of the following collapse into `None`, with a diagnostic printed at
/// the point of detection:
/// - network or transport error reaching the token endpoint
/// - non-2xx HTTP status from the token endpoint
/// - response JSON missing the `access_token` field
///
/// # Retry Behavior
///
/// One attempt per call, no retry. Every fetch requests its own fresh
/// token, so a transient failure here only degrades the current operation.
///
/// # Example
///
/// ```
/// let creds = Credentials::from_env();
/// match acquire_token(&creds).await {
///     Some(token) => println!("token: {}", token.access_token),
///     None => println!("no token"),
/// }
/// ```
pub async fn acquire_token(credentials: &Credentials) -> Option<Token> {
    let client = Client::new();
    let response = client
        .post(&credentials.token_url)
        .form(&[
            ("grant_type", "client_credentials"),
            ("client_id", &credentials.client_id),
            ("client_secret", &credentials.client_secret),
        ])
        .send()
        .await;

    let response = match response {
        Ok(resp) => match resp.error_for_status() {
            Ok(valid_response) => valid_response,
            Err(err) => {
                warning!("Error fetching token: {}", err);
                return None;
            }
        },
        Err(err) => {
            warning!("Error fetching token: {}", err);
            return None;
        }
    };

    let json: Value = match response.json().await {
        Ok(json) => json,
        Err(err) => {
            warning!("Error fetching token: {}", err);
            return None;
        }
    };

    match json["access_token"].as_str() {
        Some(token) => Some(Token {
            access_token: token.to_string(),
            obtained_at: Utc::now().timestamp() as u64,
        }),
        None => {
            warning!("Token response is missing the access_token field.");
            None
        }
    }
}
