//! Doctor dashboard: the day's appointments, filtered by date and patient name.

use api::{Appointment, ClinicApi};
use chrono::NaiveDate;

use crate::date_value;

pub const NO_APPOINTMENTS: &str = "No Appointments found for the selected date.";

/// One table row, with fallbacks already applied.
#[derive(Clone, Debug, PartialEq)]
pub struct PatientRecord {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub prescription: String,
}

impl From<Appointment> for PatientRecord {
    fn from(appointment: Appointment) -> Self {
        let or = |value: Option<String>, fallback: &str| {
            value
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };
        Self {
            id: or(appointment.patient_id, "N/A"),
            name: or(appointment.patient_name, "Unknown"),
            phone: or(appointment.patient_phone, "-"),
            email: or(appointment.patient_email, "-"),
            prescription: appointment.prescription.unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AppointmentTableView {
    Loading,
    /// Rendered as a single row holding [`NO_APPOINTMENTS`].
    Empty,
    Rows(Vec<PatientRecord>),
}

impl AppointmentTableView {
    pub fn from_appointments(appointments: Vec<Appointment>) -> Self {
        if appointments.is_empty() {
            Self::Empty
        } else {
            Self::Rows(appointments.into_iter().map(PatientRecord::from).collect())
        }
    }

    pub fn row_count(&self) -> usize {
        match self {
            Self::Rows(rows) => rows.len(),
            _ => 0,
        }
    }

    /// Rows with their render keys. A patient may hold several appointments
    /// on one day, so keys come from the position rather than the record.
    pub fn keyed_rows(&self) -> Vec<(String, PatientRecord)> {
        match self {
            Self::Rows(rows) => rows
                .iter()
                .enumerate()
                .map(|(i, record)| (i.to_string(), record.clone()))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// The dashboard's filter state. Every change is followed by one fetch.
#[derive(Clone, Debug, PartialEq)]
pub struct AppointmentQuery {
    pub date: NaiveDate,
    /// `None` is sent as the no-filter sentinel.
    pub patient_name: Option<String>,
}

impl AppointmentQuery {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today,
            patient_name: None,
        }
    }

    /// Apply a date picker value. Unparseable input leaves the date unchanged.
    pub fn select_date(&mut self, value: &str) -> bool {
        match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
            Ok(date) => {
                self.date = date;
                true
            }
            Err(e) => {
                tracing::debug!("Ignoring date input {value:?}: {e}");
                false
            }
        }
    }

    pub fn select_today(&mut self, today: NaiveDate) {
        self.date = today;
    }

    pub fn search(&mut self, text: &str) {
        let text = text.trim();
        self.patient_name = (!text.is_empty()).then(|| text.to_string());
    }

    /// Value for the date `<input>`.
    pub fn date_value(&self) -> String {
        date_value(self.date)
    }
}

/// A dashboard control the doctor touched.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryChange {
    Search(String),
    Today(NaiveDate),
    /// Raw date picker value.
    Date(String),
}

/// Apply a control change and fetch once with the resulting query. An
/// unparseable date changes nothing and fetches nothing.
pub fn change_query(
    query: &mut AppointmentQuery,
    change: QueryChange,
    fetch: impl FnOnce(AppointmentQuery),
) -> bool {
    let changed = match change {
        QueryChange::Search(text) => {
            query.search(&text);
            true
        }
        QueryChange::Today(today) => {
            query.select_today(today);
            true
        }
        QueryChange::Date(value) => query.select_date(&value),
    };
    if changed {
        fetch(query.clone());
    }
    changed
}

pub async fn load_appointments(
    api: &impl ClinicApi,
    token: Option<&str>,
    query: &AppointmentQuery,
) -> AppointmentTableView {
    let Some(token) = token else {
        tracing::error!("No token, not fetching appointments");
        return AppointmentTableView::Empty;
    };
    let appointments = api
        .list_appointments(query.date, query.patient_name.as_deref(), token)
        .await;
    AppointmentTableView::from_appointments(appointments)
}
