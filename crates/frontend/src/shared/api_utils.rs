//! API utilities for frontend-backend communication

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::system::auth::storage;

/// Backend port on the same host as the page
pub const BACKEND_PORT: u16 = 3000;

/// Base URL for API requests, e.g. "http://localhost:3000"
///
/// Empty string if window is not available.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET with the bearer token; nothing is sent when no token is stored
///
/// `what` names the resource in error messages.
pub async fn get_json_authorized<T: DeserializeOwned>(path: &str, what: &str) -> Result<T, String> {
    let auth_header = storage::auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&api_url(path))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch {}: {}", what, response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
