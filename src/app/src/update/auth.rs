use crux_core::{render::render, Command};

use crate::api_post;
use crate::events::{AuthEvent, Event};
use crate::handle_response;
use crate::http_helpers::{
    DEVICES_PAGE, INDEX_PAGE, LOGIN_ENDPOINT, LOGOUT_ENDPOINT, REGISTER_ENDPOINT,
};
use crate::model::Model;
use crate::types::{LoginCredentials, PanelVisibility, SIGNIN_PANEL, SIGNUP_PANEL};
use crate::{BrowserCmd, Effect};

/// Handle authentication-related events
pub fn handle(event: AuthEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        AuthEvent::Login { username, password } => {
            let credentials = LoginCredentials { username, password };
            api_post!(Auth, AuthEvent, LOGIN_ENDPOINT, LoginResponse, "Login",
                body_form: credentials.to_form_body()
            )
        }

        AuthEvent::LoginResponse(result) => handle_response!(result, "Login", on_success: |_| {
            BrowserCmd::replace(DEVICES_PAGE)
        }),

        AuthEvent::Register(request) => {
            api_post!(Auth, AuthEvent, REGISTER_ENDPOINT, RegisterResponse, "Register",
                body_json: &request
            )
        }

        AuthEvent::RegisterResponse(result) => {
            handle_response!(result, "Register", on_success: |_| {
                model.set_panel(SIGNUP_PANEL, PanelVisibility::Hidden);
                model.set_panel(SIGNIN_PANEL, PanelVisibility::Visible);
                render()
            })
        }

        AuthEvent::Logout => {
            api_post!(Auth, AuthEvent, LOGOUT_ENDPOINT, LogoutResponse, "Logout")
        }

        AuthEvent::LogoutResponse(result) => handle_response!(result, "Logout", on_success: |_| {
            BrowserCmd::replace(INDEX_PAGE)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{drain, fail, header, respond};
    use crate::types::RegistrationRequest;
    use crux_http::protocol::HttpResponse;

    fn registration() -> RegistrationRequest {
        RegistrationRequest {
            email: "ops@example.com".to_string(),
            username: "ops".to_string(),
            putty_login: "cisco".to_string(),
            putty_password: "enable".to_string(),
            password: "secret".to_string(),
        }
    }

    mod login {
        use super::*;

        fn login() -> Event {
            Event::Auth(AuthEvent::Login {
                username: "ops@example.com".to_string(),
                password: "secret".to_string(),
            })
        }

        #[test]
        fn posts_url_encoded_credentials() {
            let mut model = Model::default();
            let Event::Auth(event) = login() else {
                unreachable!()
            };

            let mut command = handle(event, &mut model);
            let effects = drain(&mut command);

            assert_eq!(effects.http.len(), 1);
            let request = &effects.http[0].operation;
            assert_eq!(request.method, "POST");
            assert_eq!(request.url, "https://relative/api/auth/jwt/login");
            assert_eq!(
                header(request, "Content-Type"),
                Some("application/x-www-form-urlencoded")
            );
            assert_eq!(
                String::from_utf8(request.body.clone()).unwrap(),
                "username=ops%40example.com&password=secret"
            );
        }

        #[test]
        fn success_navigates_to_devices() {
            let mut model = Model::default();
            let Event::Auth(event) = login() else {
                unreachable!()
            };

            let mut command = handle(event, &mut model);
            let mut effects = drain(&mut command);
            let response = respond(
                &mut command,
                &mut effects.http[0],
                HttpResponse::ok().build(),
            );
            assert_eq!(response, Event::Auth(AuthEvent::LoginResponse(Ok(()))));

            let Event::Auth(response) = response else {
                unreachable!()
            };
            let mut command = handle(response, &mut model);
            let effects = drain(&mut command);

            assert_eq!(effects.navigations(), vec!["/devices"]);
            assert!(effects.http.is_empty());
            assert_eq!(effects.renders, 0);
            assert_eq!(model, Model::default());
        }

        #[test]
        fn rejected_credentials_stay_on_page() {
            let mut model = Model::default();
            let Event::Auth(event) = login() else {
                unreachable!()
            };

            let mut command = handle(event, &mut model);
            let mut effects = drain(&mut command);
            let response = respond(
                &mut command,
                &mut effects.http[0],
                HttpResponse::status(400)
                    .body(r#"{"detail":"LOGIN_BAD_CREDENTIALS"}"#)
                    .build(),
            );

            let Event::Auth(response) = response else {
                unreachable!()
            };
            assert!(matches!(response, AuthEvent::LoginResponse(Err(_))));

            let mut command = handle(response, &mut model);
            let effects = drain(&mut command);

            assert!(effects.browser.is_empty());
            assert!(command.is_done());
        }

        #[test]
        fn unreachable_backend_stays_on_page() {
            let mut model = Model::default();
            let Event::Auth(event) = login() else {
                unreachable!()
            };

            let mut command = handle(event, &mut model);
            let mut effects = drain(&mut command);
            let response = fail(
                &mut command,
                &mut effects.http[0],
                crux_http::HttpError::Io("connection refused".to_string()),
            );

            let Event::Auth(response) = response else {
                unreachable!()
            };
            assert!(matches!(response, AuthEvent::LoginResponse(Err(_))));

            let mut command = handle(response, &mut model);

            assert!(drain(&mut command).browser.is_empty());
            assert_eq!(model, Model::default());
        }
    }

    mod register {
        use super::*;

        #[test]
        fn posts_json_payload() {
            let mut model = Model::default();

            let mut command = handle(AuthEvent::Register(registration()), &mut model);
            let effects = drain(&mut command);

            let request = &effects.http[0].operation;
            assert_eq!(request.method, "POST");
            assert_eq!(request.url, "https://relative/api/auth/register");
            assert_eq!(
                header(request, "Content-Type"),
                Some("application/json")
            );
            let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
            assert_eq!(body["putty_login"], "cisco");
            assert_eq!(body["email"], "ops@example.com");
        }

        #[test]
        fn success_switches_from_signup_to_signin() {
            let mut model = Model::default();
            model.set_panel(SIGNUP_PANEL, PanelVisibility::Visible);

            let mut command = handle(AuthEvent::Register(registration()), &mut model);
            let mut effects = drain(&mut command);
            let response = respond(
                &mut command,
                &mut effects.http[0],
                HttpResponse::status(201).build(),
            );
            let Event::Auth(response) = response else {
                unreachable!()
            };

            let mut command = handle(response, &mut model);
            let effects = drain(&mut command);

            assert!(!model.is_panel_visible(SIGNUP_PANEL));
            assert!(model.is_panel_visible(SIGNIN_PANEL));
            assert_eq!(effects.renders, 1);
            assert!(effects.browser.is_empty());
        }

        #[test]
        fn failure_leaves_panels_untouched() {
            let mut model = Model::default();
            model.set_panel(SIGNUP_PANEL, PanelVisibility::Visible);
            let before = model.clone();

            let mut command = handle(
                AuthEvent::RegisterResponse(Err(
                    "Register failed: HTTP 400: REGISTER_USER_ALREADY_EXISTS".to_string(),
                )),
                &mut model,
            );
            let effects = drain(&mut command);

            assert_eq!(model, before);
            assert_eq!(effects.renders, 0);
        }
    }

    mod logout {
        use super::*;

        #[test]
        fn posts_without_body() {
            let mut model = Model::default();

            let mut command = handle(AuthEvent::Logout, &mut model);
            let effects = drain(&mut command);

            let request = &effects.http[0].operation;
            assert_eq!(request.method, "POST");
            assert_eq!(request.url, "https://relative/api/auth/jwt/logout");
            assert!(request.body.is_empty());
        }

        #[test]
        fn success_navigates_to_index() {
            let mut model = Model::default();

            let mut command = handle(AuthEvent::LogoutResponse(Ok(())), &mut model);
            let effects = drain(&mut command);

            assert_eq!(effects.navigations(), vec!["/"]);
        }

        #[test]
        fn failure_does_nothing() {
            let mut model = Model::default();

            let mut command = handle(
                AuthEvent::LogoutResponse(Err("Logout failed: HTTP 401".to_string())),
                &mut model,
            );

            assert!(drain(&mut command).browser.is_empty());
        }
    }
}
