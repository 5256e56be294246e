//! Admin dashboard: doctor directory, add doctor, delete doctor.

use api::{ClinicApi, Doctor, DoctorFilter, NewDoctor};
use store::Session;

use super::{missing_fields, FormError};
use crate::Dialogs;

pub const NO_DOCTORS_AVAILABLE: &str = "No doctors available.";
pub const NO_DOCTORS_MATCH: &str = "No doctors found with the given filters.";
pub const SESSION_EXPIRED: &str = "Session expired. Please log in again.";
pub const FILTER_FAILED: &str = "Error fetching filtered doctors. Please try again later.";

/// What the doctor list area shows.
#[derive(Clone, Debug, PartialEq)]
pub enum DoctorListView {
    Loading,
    /// A message in place of the cards; never an empty container.
    Empty(&'static str),
    Cards(Vec<Doctor>),
}

impl DoctorListView {
    pub fn from_doctors(doctors: Vec<Doctor>, empty_message: &'static str) -> Self {
        if doctors.is_empty() {
            Self::Empty(empty_message)
        } else {
            Self::Cards(doctors)
        }
    }

    pub fn card_count(&self) -> usize {
        match self {
            Self::Cards(doctors) => doctors.len(),
            _ => 0,
        }
    }

    /// Drop the card of doctor `id`, leaving every other card in place.
    pub fn remove(&mut self, id: i64) -> bool {
        let Self::Cards(doctors) = self else {
            return false;
        };
        let before = doctors.len();
        doctors.retain(|d| d.id != Some(id));
        let removed = doctors.len() != before;
        if doctors.is_empty() {
            *self = Self::Empty(NO_DOCTORS_AVAILABLE);
        }
        removed
    }
}

pub async fn load_doctors(api: &impl ClinicApi) -> DoctorListView {
    DoctorListView::from_doctors(api.list_doctors().await, NO_DOCTORS_AVAILABLE)
}

/// `None` means the request failed: the user has been alerted and the list
/// on screen stays as it is.
pub async fn filter_doctors(
    api: &impl ClinicApi,
    filter: &DoctorFilter,
    dialogs: &impl Dialogs,
) -> Option<DoctorListView> {
    match api.filter_doctors(filter).await {
        Some(doctors) => Some(DoctorListView::from_doctors(doctors, NO_DOCTORS_MATCH)),
        None => {
            dialogs.alert(FILTER_FAILED);
            None
        }
    }
}

/// Raw contents of the add-doctor modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AddDoctorForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub specialization: String,
    pub availability: Vec<String>,
}

impl AddDoctorForm {
    pub fn set_slot(&mut self, slot: &str, checked: bool) {
        let present = self.availability.iter().any(|s| s == slot);
        if checked && !present {
            self.availability.push(slot.to_string());
        } else if !checked {
            self.availability.retain(|s| s != slot);
        }
    }

    /// Presence checks on name, email, password and specialization.
    pub fn validate(&self) -> Result<NewDoctor, FormError> {
        let missing = missing_fields(&[
            ("name", &self.name),
            ("email", &self.email),
            ("password", &self.password),
            ("specialization", &self.specialization),
        ]);
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }
        Ok(NewDoctor {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            password: self.password.trim().to_string(),
            specialization: self.specialization.trim().to_string(),
            availability: self.availability.clone(),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AddDoctorOutcome {
    Invalid,
    /// No token: the caller sends the user to the entry page.
    SessionExpired,
    Saved,
    Failed(String),
}

pub async fn add_doctor(
    api: &impl ClinicApi,
    session: &Session,
    form: &AddDoctorForm,
    dialogs: &impl Dialogs,
) -> AddDoctorOutcome {
    let doctor = match form.validate() {
        Ok(doctor) => doctor,
        Err(e) => {
            dialogs.alert(&e.to_string());
            return AddDoctorOutcome::Invalid;
        }
    };
    let Some(token) = session.token() else {
        dialogs.alert(SESSION_EXPIRED);
        return AddDoctorOutcome::SessionExpired;
    };

    let result = api.save_doctor(&doctor, token).await;
    if result.success {
        tracing::info!("Added doctor {}", doctor.email);
        dialogs.alert("Doctor added successfully!");
        AddDoctorOutcome::Saved
    } else {
        dialogs.alert(&result.message);
        AddDoctorOutcome::Failed(result.message)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DeleteOutcome {
    Cancelled,
    Unauthorized,
    Deleted(i64),
    Failed,
}

pub async fn delete_doctor(
    api: &impl ClinicApi,
    session: &Session,
    doctor: &Doctor,
    dialogs: &impl Dialogs,
) -> DeleteOutcome {
    let name = doctor.display_name();
    if !dialogs.confirm(&format!("Are you sure you want to delete Dr. {name}?")) {
        return DeleteOutcome::Cancelled;
    }
    let Some(token) = session.token() else {
        dialogs.alert("Unauthorized. Please log in again.");
        return DeleteOutcome::Unauthorized;
    };
    let Some(id) = doctor.id else {
        tracing::error!("Doctor {name} has no id, cannot delete");
        dialogs.alert("Failed to delete doctor. Please try again.");
        return DeleteOutcome::Failed;
    };

    if api.delete_doctor(id, token).await.success {
        dialogs.alert(&format!("Doctor {name} deleted successfully."));
        DeleteOutcome::Deleted(id)
    } else {
        dialogs.alert("Failed to delete doctor. Please try again.");
        DeleteOutcome::Failed
    }
}
