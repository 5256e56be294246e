use serde::Deserialize;

use super::{Appointment, Doctor, Patient};

/// Normalised result of a mutating call.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionResult {
    pub success: bool,
    pub message: String,
}

impl ActionResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// `{ "doctors": [...] }`
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DoctorList {
    #[serde(default)]
    pub doctors: Vec<Doctor>,
}

/// `{ "appointments": [...] }`
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AppointmentList {
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PatientResponse {
    #[serde(default)]
    pub patient: Option<Patient>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct TokenResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// The `{message}` / `{error}` bodies the backend answers mutations with.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ServerMessage {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ServerMessage {
    /// The most specific text the body carries.
    pub fn text(self) -> Option<String> {
        self.error
            .or(self.message)
            .filter(|m| !m.trim().is_empty())
    }
}
