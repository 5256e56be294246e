//! Wire models exchanged with the clinic backend.

mod appointment;
mod auth;
mod doctor;
mod patient;
mod responses;

pub use appointment::{Appointment, BookingRequest, EntityRef};
pub use auth::{AdminCredentials, Credentials, LoginResult};
pub use doctor::{Doctor, DoctorFilter, NewDoctor};
pub use patient::{NewPatient, Patient};
pub use responses::{ActionResult, AppointmentList, DoctorList};
pub(crate) use responses::{PatientResponse, ServerMessage, TokenResponse};

use serde::{Deserialize, Deserializer};

/// Identifier fields arrive as numbers from the database layer but as strings
/// from some DTOs; both are kept as text.
pub(crate) fn de_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Number(i64),
        Text(String),
    }

    Ok(match Option::<Id>::deserialize(deserializer)? {
        Some(Id::Number(n)) => Some(n.to_string()),
        Some(Id::Text(s)) if !s.is_empty() => Some(s),
        _ => None,
    })
}
