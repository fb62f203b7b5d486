pub mod model;

use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};

use crate::settings;

fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// API Response wrapper
#[derive(Debug, Deserialize, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub message: String,
    pub success: bool,
}

async fn send_get(endpoint: &str) -> Result<Response, String> {
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    Request::get(&url).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })
}

async fn parse_body<T>(endpoint: &str, response: Response) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let api_response: ApiResponse<T> = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(api_response.data)
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let response = send_get(endpoint).await?;

    if !response.ok() {
        let error_msg = format!("HTTP error: {}", response.status());
        log::error!("GET {} - {}", endpoint, error_msg);
        return Err(error_msg);
    }

    parse_body(endpoint, response).await
}

/// GET request handler for resources that may not exist.
///
/// A 404 resolves to `Ok(None)` so callers can render a "not found" state
/// that stays distinct from a fetch error.
pub async fn get_optional<T>(endpoint: &str) -> Result<Option<T>, String>
where
    T: for<'de> Deserialize<'de>,
{
    let response = send_get(endpoint).await?;

    if response.status() == 404 {
        log::debug!("GET {} - Resource not found", endpoint);
        return Ok(None);
    }

    if !response.ok() {
        let error_msg = format!("HTTP error: {}", response.status());
        log::error!("GET {} - {}", endpoint, error_msg);
        return Err(error_msg);
    }

    parse_body(endpoint, response).await.map(Some)
}
