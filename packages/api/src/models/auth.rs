use serde::Serialize;

/// Body of `POST /admin/login`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

/// Body of `POST /doctor/login` and `POST /patient/login`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Normalised outcome of a login call.
#[derive(Clone, Debug, PartialEq)]
pub enum LoginResult {
    Token(String),
    /// The server accepted the request but sent no token.
    MissingToken,
    /// Non-success status, i.e. bad credentials.
    Rejected,
    /// Transport or decoding failure.
    Failed,
}

impl LoginResult {
    pub fn token(&self) -> Option<&str> {
        match self {
            LoginResult::Token(token) => Some(token),
            _ => None,
        }
    }
}
