use std::collections::HashMap;

use axum::{
    Json, Router,
    extract::{Form, Query},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use serde_json::{Value, json};

use spodcli::config::Credentials;
use spodcli::spotify::{
    FetchError, artists::search_artists_by_genre, auth::acquire_token, fetch::get_json,
};

// Helper to serve a router on an ephemeral port, returning the base URL
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn create_credentials(base: &str) -> Credentials {
    Credentials {
        client_id: "test-client".to_string(),
        client_secret: "test-secret".to_string(),
        token_url: format!("{}/token", base),
    }
}

async fn token_ok(Form(params): Form<HashMap<String, String>>) -> Json<Value> {
    assert_eq!(
        params.get("grant_type").map(String::as_str),
        Some("client_credentials")
    );
    assert_eq!(
        params.get("client_id").map(String::as_str),
        Some("test-client")
    );
    assert_eq!(
        params.get("client_secret").map(String::as_str),
        Some("test-secret")
    );
    Json(json!({
        "access_token": "test-access-token",
        "token_type": "Bearer",
        "expires_in": 3600,
    }))
}

async fn token_server_error() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn token_missing_field() -> Json<Value> {
    Json(json!({"token_type": "Bearer", "expires_in": 3600}))
}

#[tokio::test]
async fn test_acquire_token_returns_access_token_field() {
    let base = serve(Router::new().route("/token", post(token_ok))).await;

    let token = acquire_token(&create_credentials(&base)).await;

    let token = token.expect("expected a token from a valid response");
    assert_eq!(token.access_token, "test-access-token");
    assert!(token.obtained_at > 0);
}

#[tokio::test]
async fn test_acquire_token_http_error_yields_none() {
    let base = serve(Router::new().route("/token", post(token_server_error))).await;

    assert!(acquire_token(&create_credentials(&base)).await.is_none());
}

#[tokio::test]
async fn test_acquire_token_missing_field_yields_none() {
    let base = serve(Router::new().route("/token", post(token_missing_field))).await;

    assert!(acquire_token(&create_credentials(&base)).await.is_none());
}

#[tokio::test]
async fn test_acquire_token_unreachable_endpoint_yields_none() {
    // Nothing listens on the discard port; the transport error must not escape
    let credentials = create_credentials("http://127.0.0.1:9");

    assert!(acquire_token(&credentials).await.is_none());
}

#[tokio::test]
async fn test_get_json_degrades_to_empty_object_without_token() {
    let base = serve(Router::new().route("/token", post(token_server_error))).await;
    let credentials = create_credentials(&base);

    let data = get_json(&credentials, &format!("{}/anything", base), &[])
        .await
        .unwrap();

    assert_eq!(data, json!({}));
}

#[tokio::test]
async fn test_get_json_attaches_bearer_and_query_params() {
    async fn echo(Query(params): Query<HashMap<String, String>>, headers: HeaderMap) -> Json<Value> {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        Json(json!({"authorization": auth, "params": params}))
    }

    let base = serve(
        Router::new()
            .route("/token", post(token_ok))
            .route("/echo", get(echo)),
    )
    .await;
    let credentials = create_credentials(&base);

    let data = get_json(
        &credentials,
        &format!("{}/echo", base),
        &[("country", "SE".to_string()), ("limit", "20".to_string())],
    )
    .await
    .unwrap();

    assert_eq!(data["authorization"], "Bearer test-access-token");
    assert_eq!(data["params"]["country"], "SE");
    assert_eq!(data["params"]["limit"], "20");
}

#[tokio::test]
async fn test_get_json_returns_body_verbatim_without_status_check() {
    // The generic path hands the body back untouched even for an
    // error-shaped payload, as long as the transport succeeded
    async fn error_shaped() -> Json<Value> {
        Json(json!({"error": {"status": 404, "message": "Not Found"}}))
    }

    let base = serve(
        Router::new()
            .route("/token", post(token_ok))
            .route("/missing", get(error_shaped)),
    )
    .await;
    let credentials = create_credentials(&base);

    let data = get_json(&credentials, &format!("{}/missing", base), &[])
        .await
        .unwrap();

    assert_eq!(data["error"]["message"], "Not Found");
}

// The search path reads SPOTIFY_API_URL from the environment, so all of its
// scenarios run in one test to keep the variable mutation sequential.
#[tokio::test]
async fn test_search_artists_by_genre_paths() {
    async fn search_ok(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
        assert_eq!(params.get("q").map(String::as_str), Some("genre:rock"));
        assert_eq!(params.get("type").map(String::as_str), Some("artist"));
        assert_eq!(params.get("limit").map(String::as_str), Some("50"));
        Json(json!({"artists": {"items": [
            {"name": "Alpha", "popularity": 80, "followers": {"total": 1000}},
            {"name": "Beta", "popularity": 55, "followers": {"total": 42}},
        ]}}))
    }

    async fn search_no_items() -> Json<Value> {
        Json(json!({"tracks": {"items": []}}))
    }

    async fn search_forbidden() -> StatusCode {
        StatusCode::FORBIDDEN
    }

    // Success: items are unwrapped from artists.items
    let base = serve(
        Router::new()
            .route("/token", post(token_ok))
            .route("/search", get(search_ok)),
    )
    .await;
    unsafe { std::env::set_var("SPOTIFY_API_URL", &base) };
    let items = search_artists_by_genre(&create_credentials(&base), "rock", 50)
        .await
        .unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Alpha");

    // Missing key: a distinct shape error, not a transport one
    let base = serve(
        Router::new()
            .route("/token", post(token_ok))
            .route("/search", get(search_no_items)),
    )
    .await;
    unsafe { std::env::set_var("SPOTIFY_API_URL", &base) };
    match search_artists_by_genre(&create_credentials(&base), "rock", 50).await {
        Err(FetchError::Shape(key)) => assert_eq!(key, "artists.items"),
        other => panic!("expected a shape error, got {:?}", other),
    }

    // HTTP error: surfaced as a transport failure
    let base = serve(
        Router::new()
            .route("/token", post(token_ok))
            .route("/search", get(search_forbidden)),
    )
    .await;
    unsafe { std::env::set_var("SPOTIFY_API_URL", &base) };
    match search_artists_by_genre(&create_credentials(&base), "rock", 50).await {
        Err(FetchError::Transport(_)) => {}
        other => panic!("expected a transport error, got {:?}", other),
    }

    // No token: fails fast before any search request goes out
    let base = serve(
        Router::new()
            .route("/token", post(token_server_error))
            .route("/search", get(search_ok)),
    )
    .await;
    unsafe { std::env::set_var("SPOTIFY_API_URL", &base) };
    match search_artists_by_genre(&create_credentials(&base), "rock", 50).await {
        Err(FetchError::Auth(_)) => {}
        other => panic!("expected an auth error, got {:?}", other),
    }
}
