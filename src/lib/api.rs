//! HTTP helpers for the auth API with consistent timeouts and error handling.
//! Feature clients use these helpers to avoid duplicating request setup and
//! to enforce a predictable timeout policy. The helpers never persist the
//! bearer token; callers pass it per request.

use super::{config::AppConfig, errors::AppError};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::{AbortController, UrlSearchParams};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Posts form-encoded fields (the token endpoint contract) and parses a JSON
/// response.
pub async fn post_form<T: DeserializeOwned>(
    path: &str,
    fields: &[(&str, &str)],
) -> Result<T, AppError> {
    let url = build_url(path);
    let params = UrlSearchParams::new()
        .map_err(|_| AppError::Serialization("Failed to encode form body".to_string()))?;
    for (name, value) in fields {
        params.append(name, value);
    }
    let payload = String::from(params.to_string());

    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts a JSON body and parses a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let response = send_json(path, body).await?;
    handle_json_response(response).await
}

/// Posts a JSON body and discards any success payload.
pub async fn post_json_empty<B: Serialize>(path: &str, body: &B) -> Result<(), AppError> {
    let response = send_json(path, body).await?;
    handle_empty_response(response).await
}

/// Fetches JSON from a bearer-authenticated endpoint.
pub async fn get_json_with_bearer<T: DeserializeOwned>(
    path: &str,
    token: &str,
) -> Result<T, AppError> {
    let response = send_with_bearer(path, token).await?;
    handle_json_response(response).await
}

/// Hits a bearer-authenticated endpoint where only the status matters, such
/// as the token verification probe.
pub async fn get_empty_with_bearer(path: &str, token: &str) -> Result<(), AppError> {
    let response = send_with_bearer(path, token).await?;
    handle_empty_response(response).await
}

async fn send_json<B: Serialize>(
    path: &str,
    body: &B,
) -> Result<gloo_net::http::Response, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;

    send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await
}

async fn send_with_bearer(
    path: &str,
    token: &str,
) -> Result<gloo_net::http::Response, AppError> {
    let url = build_url(path);
    let bearer = format!("Bearer {token}");

    send_with_timeout(move |signal| {
        Request::get(&url)
            .header("Authorization", &bearer)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    let base = config.api_base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network errors into user-facing `AppError` variants with timeout
/// detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and surfaces HTTP errors with the API's `detail`
/// field when one is present.
async fn handle_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(error_from_response(response).await)
    }
}

/// Handles empty responses and returns API errors when needed.
async fn handle_empty_response(response: gloo_net::http::Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        Err(error_from_response(response).await)
    }
}

/// Extracts the `{"detail": ...}` error body the API uses, falling back to a
/// sanitized raw body.
async fn error_from_response(response: gloo_net::http::Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let detail = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| value.get("detail").and_then(|d| d.as_str().map(String::from)))
        .unwrap_or_else(|| sanitize_body(body));

    AppError::Api { status, detail }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and
/// truncating.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
