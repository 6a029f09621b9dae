use chrono::{DateTime, Utc};
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use shared_types::{DriveLinkStatus, OrgProfile};
use std::sync::OnceLock;

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:8080
/// - In production: use same origin (API serves static files)
fn get_api_base() -> String {
    // Get the current hostname from the browser
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    // If running on localhost, point to the API server on port 8080
    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8080".to_string()
    } else {
        // In production, use same origin
        "".to_string()
    }
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

async fn describe_http_error(response: gloo_net::http::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if body.trim().is_empty() {
        return format!("HTTP error: {status}");
    }

    if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
        if let Some(error) = json.get("error").and_then(|v| v.as_str()) {
            return format!("HTTP error: {status} ({error})");
        }
        if let Some(message) = json.get("message").and_then(|v| v.as_str()) {
            return format!("HTTP error: {status} ({message})");
        }
    }

    format!("HTTP error: {status} ({body})")
}

#[derive(Debug, Deserialize)]
pub struct GetProfileResponse {
    pub success: bool,
    pub profile: OrgProfile,
}

#[derive(Debug, Serialize)]
pub struct SaveProfileRequest {
    pub profile: OrgProfile,
}

#[derive(Debug, Deserialize)]
pub struct SaveProfileResponse {
    pub success: bool,
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct GetDriveStatusResponse {
    success: bool,
    drive: DriveLinkStatus,
}

pub async fn fetch_profile(org_id: &str) -> Result<OrgProfile, String> {
    let url = format!("{}/orgs/{}/profile", api_base(), org_id);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    let data: GetProfileResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;

    if !data.success {
        return Err("API returned success=false".to_string());
    }

    Ok(data.profile)
}

pub async fn save_profile(
    org_id: &str,
    profile: &OrgProfile,
) -> Result<SaveProfileResponse, String> {
    let url = format!("{}/orgs/{}/profile", api_base(), org_id);
    let request = SaveProfileRequest {
        profile: profile.clone(),
    };

    let response = Request::put(&url)
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    let data: SaveProfileResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;

    if !data.success {
        return Err("API returned success=false".to_string());
    }

    Ok(data)
}

pub async fn fetch_drive_link_status(org_id: &str) -> Result<DriveLinkStatus, String> {
    let url = format!("{}/orgs/{}/drive/status", api_base(), org_id);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    let data: GetDriveStatusResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;

    if !data.success {
        return Err("API returned success=false".to_string());
    }

    Ok(data.drive)
}
