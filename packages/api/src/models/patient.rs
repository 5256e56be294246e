use serde::{Deserialize, Serialize};

/// The logged-in patient's profile, fetched before booking.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, alias = "phoneNumber")]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

/// Body of `POST /patient` (sign up).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewPatient {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub address: String,
}
