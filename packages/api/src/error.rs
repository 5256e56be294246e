//! Errors raised inside the client before normalisation.

/// Why a round trip did not produce the expected body.
///
/// These never leave the [`crate::ClinicApi`] methods: each method logs the
/// error and converts it into its documented empty/failure value.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid base url {url:?}: {reason}")]
    BaseUrl { url: String, reason: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    /// The backend answered, but not with a success status.
    pub fn is_status(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }
}
