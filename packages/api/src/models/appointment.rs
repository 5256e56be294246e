use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// An appointment row as the doctor dashboard consumes it.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(default, deserialize_with = "super::de_opt_id")]
    pub patient_id: Option<String>,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub patient_phone: Option<String>,
    #[serde(default)]
    pub patient_email: Option<String>,
    #[serde(default)]
    pub prescription: Option<String>,
}

/// `{ "id": .. }` reference to an existing entity.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EntityRef {
    pub id: i64,
}

/// Body of `POST /appointments/{token}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub doctor: EntityRef,
    pub patient: EntityRef,
    pub appointment_time: NaiveDateTime,
    /// 0 = scheduled.
    pub status: i32,
}

impl BookingRequest {
    /// Book the start of `slot` (e.g. `"09:00-10:00"`) on `date`.
    ///
    /// Returns `None` when the slot does not start with an `HH:MM` time.
    pub fn new(doctor_id: i64, patient_id: i64, date: NaiveDate, slot: &str) -> Option<Self> {
        let start = slot.split('-').next()?.trim();
        let time = NaiveTime::parse_from_str(start, "%H:%M").ok()?;
        Some(Self {
            doctor: EntityRef { id: doctor_id },
            patient: EntityRef { id: patient_id },
            appointment_time: date.and_time(time),
            status: 0,
        })
    }
}
