// Re-export http_helpers functions for macro use
pub use crate::http_helpers::{
    build_url, check_response_status, extract_error_message, handle_request_error,
    is_response_success, map_http_error, parse_json_response, process_json_response,
    process_status_response, BASE_URL,
};

/// Macro for POST requests against the backend API whose outcome is judged
/// by status code only. Requires domain parameters for event wrapping.
///
/// Authentication is carried by the session cookie the browser attaches,
/// so no credentials are added here.
///
/// NOTE: URLs are prefixed with `https://relative`.
/// `crux_http` requires absolute URLs and rejects relative paths.
/// The UI shell strips this prefix before sending requests.
///
/// # Patterns
///
/// Pattern 1: Simple POST without body
/// ```ignore
/// api_post!(Auth, AuthEvent, "/api/auth/jwt/logout", LogoutResponse, "Logout")
/// ```
///
/// Pattern 2: POST with JSON body
/// ```ignore
/// api_post!(Auth, AuthEvent, "/api/auth/register", RegisterResponse, "Register",
///     body_json: &request
/// )
/// ```
///
/// Pattern 3: POST with URL-encoded form body
/// ```ignore
/// api_post!(Auth, AuthEvent, "/api/auth/jwt/login", LoginResponse, "Login",
///     body_form: credentials.to_form_body()
/// )
/// ```
#[macro_export]
macro_rules! api_post {
    // Pattern 1: Simple POST without body
    ($domain:ident, $domain_event:ident, $endpoint:expr, $response_event:ident, $action:expr) => {{
        $crate::HttpCmd::post($crate::build_url($endpoint))
            .build()
            .then_send(|result| {
                let event_result = $crate::process_status_response($action, result);
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                    event_result,
                ))
            })
    }};

    // Pattern 2: POST with JSON body
    ($domain:ident, $domain_event:ident, $endpoint:expr, $response_event:ident, $action:expr, body_json: $body:expr) => {{
        match $crate::HttpCmd::post($crate::build_url($endpoint))
            .header("Content-Type", "application/json")
            .body_json($body)
        {
            Ok(builder) => builder.build().then_send(|result| {
                let event_result = $crate::process_status_response($action, result);
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                    event_result,
                ))
            }),
            Err(e) => $crate::handle_request_error($action, e),
        }
    }};

    // Pattern 3: POST with URL-encoded form body
    ($domain:ident, $domain_event:ident, $endpoint:expr, $response_event:ident, $action:expr, body_form: $body:expr) => {{
        $crate::HttpCmd::post($crate::build_url($endpoint))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body_string($body)
            .build()
            .then_send(|result| {
                let event_result = $crate::process_status_response($action, result);
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                    event_result,
                ))
            })
    }};
}

/// Macro for handling response events.
///
/// A failed request leaves the page untouched: the failure is only logged and
/// no command is issued.
///
/// # Example
/// ```ignore
/// handle_response!(result, "Logout", on_success: |_| {
///     BrowserCmd::replace(INDEX_PAGE)
/// })
/// ```
#[macro_export]
macro_rules! handle_response {
    ($result:expr, $action:expr, on_success: |$value:tt| $success_body:block) => {{
        match $result {
            Ok($value) => $success_body,
            Err(e) => {
                log::debug!("{} did not succeed: {e}", $action);
                crux_core::Command::done()
            }
        }
    }};
}
