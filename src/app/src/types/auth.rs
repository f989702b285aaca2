use serde::{Deserialize, Serialize};

/// Login credentials, read from the `loginEmail` and `loginPassword` fields
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

impl LoginCredentials {
    /// Encode the credentials as an `application/x-www-form-urlencoded` body.
    pub fn to_form_body(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("username", &self.username)
            .append_pair("password", &self.password)
            .finish()
    }
}

/// Account registration, sent as JSON.
///
/// `putty_login` and `putty_password` are the credentials the backend uses
/// to reach managed devices; `password` protects the web account itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub email: String,
    pub username: String,
    pub putty_login: String,
    pub putty_password: String,
    pub password: String,
}
