//! HTTP helper functions for Crux Core
//!
//! Endpoint paths, navigation targets and the common response handling used
//! by the request macros and the domain handlers.

use crux_core::Command;
use crux_http::Response;
use serde::Serialize;

use crate::events::Event;
use crate::types::DeviceId;
use crate::{Effect, HttpCmd};

/// Base URL for backend API endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` requires
/// absolute URLs and rejects relative paths (`RelativeUrlWithoutBase` error).
/// The UI shell strips this prefix before sending requests via `fetch()`,
/// so requests stay same-origin and carry the session cookie.
pub const BASE_URL: &str = "https://relative";

pub const LOGIN_ENDPOINT: &str = "/api/auth/jwt/login";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/jwt/logout";
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";
pub const DEVICES_ENDPOINT: &str = "/api/devices";

/// Landing page
pub const INDEX_PAGE: &str = "/";
/// Device list page
pub const DEVICES_PAGE: &str = "/devices";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use devconf_ui_core::http_helpers::build_url;
/// let url = build_url("/api/devices");
/// assert_eq!(url, "https://relative/api/devices");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

pub fn device_endpoint(device_id: DeviceId) -> String {
    format!("{DEVICES_ENDPOINT}/{device_id}")
}

pub fn upload_config_endpoint(device_id: DeviceId) -> String {
    format!("{DEVICES_ENDPOINT}/{device_id}/upload_config")
}

/// Download is a plain navigation, the browser handles the attachment.
pub fn download_config_location(device_id: DeviceId) -> String {
    format!("{DEVICES_ENDPOINT}/{device_id}/download_config")
}

pub fn device_page(device_id: DeviceId) -> String {
    format!("{DEVICES_PAGE}/{device_id}")
}

/// Validates HTTP response.
///
/// Returns `true` if the response status is 2xx.
pub fn is_response_success(response: &Response<Vec<u8>>) -> bool {
    response.status().is_success()
}

/// Extracts error message from HTTP response.
pub fn extract_error_message(action: &str, response: &mut Response<Vec<u8>>) -> String {
    let status = response.status().to_string();

    match response.take_body() {
        Some(body) if !body.is_empty() => match String::from_utf8(body) {
            Ok(msg) => format!("{action} failed: HTTP {status}: {msg}"),
            Err(e) => format!("{action} failed: HTTP {status} (Invalid UTF-8: {e})"),
        },
        Some(_) => format!("{action} failed: HTTP {status} (Empty body)"),
        None => format!("{action} failed: HTTP {status} (No body)"),
    }
}

/// Parse JSON from response body.
///
/// Returns error if response is not successful or JSON parsing fails.
pub fn parse_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    response: &mut Response<Vec<u8>>,
) -> Result<T, String> {
    if !is_response_success(response) {
        return Err(extract_error_message(action, response));
    }

    match response.take_body() {
        Some(body) => {
            serde_json::from_slice(&body).map_err(|e| format!("{action}: JSON parse error: {e}"))
        }
        None => Err(format!("{action}: Empty response body")),
    }
}

/// Check response status only (no body parsing).
pub fn check_response_status(action: &str, response: &mut Response<Vec<u8>>) -> Result<(), String> {
    if is_response_success(response) {
        Ok(())
    } else {
        Err(extract_error_message(action, response))
    }
}

/// Error reported by the HTTP client in place of a usable response.
pub fn map_http_error(action: &str, error: crux_http::HttpError) -> String {
    log::warn!("{action}: request failed: {error}");
    format!("{action} failed: {error}")
}

/// Process HTTP response result and check status only (no JSON parsing)
pub fn process_status_response(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<(), String> {
    match result {
        Ok(mut response) => check_response_status(action, &mut response),
        Err(e) => Err(map_http_error(action, e)),
    }
}

/// Process HTTP response result and parse JSON
pub fn process_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, String> {
    match result {
        Ok(mut response) => parse_json_response(action, &mut response),
        Err(e) => Err(map_http_error(action, e)),
    }
}

/// Handle request creation error (e.g. JSON serialization) - the action is
/// dropped without any visible effect.
pub fn handle_request_error(
    action: &str,
    error: impl std::fmt::Display,
) -> Command<Effect, Event> {
    log::error!("Failed to create {action} request: {error}");
    Command::done()
}

/// HTTP methods accepted by [`send_json_query`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Send `data` as a JSON body to `endpoint`.
///
/// The raw response is handed to `on_response` unchecked, so the caller
/// decides what counts as success.
pub fn send_json_query<T, F>(
    method: JsonMethod,
    endpoint: &str,
    data: &T,
    on_response: F,
) -> crux_http::Result<Command<Effect, Event>>
where
    T: Serialize,
    F: FnOnce(crux_http::Result<Response<Vec<u8>>>) -> Event + Send + 'static,
{
    let url = build_url(endpoint);
    let builder = match method {
        JsonMethod::Get => HttpCmd::get(url),
        JsonMethod::Post => HttpCmd::post(url),
        JsonMethod::Put => HttpCmd::put(url),
        JsonMethod::Patch => HttpCmd::patch(url),
        JsonMethod::Delete => HttpCmd::delete(url),
    };

    Ok(builder
        .header("Content-Type", "application/json")
        .body_json(data)?
        .build()
        .then_send(on_response))
}
