//! Patient flows: sign up and booking an appointment from a doctor card.

use api::{BookingRequest, ClinicApi, Doctor, NewPatient, Patient};
use chrono::NaiveDate;
use store::{Role, Session};

use super::{missing_fields, FormError};
use crate::Dialogs;

pub const LOGIN_TO_BOOK: &str = "Please log in to book an appointment.";

/// Result of pressing Book Now.
#[derive(Clone, Debug, PartialEq)]
pub enum BookingStart {
    /// Browsing as an anonymous patient.
    LoginRequired,
    SessionExpired,
    /// Open the booking overlay for this patient.
    Ready(Patient),
    Unavailable,
}

pub async fn start_booking(
    api: &impl ClinicApi,
    session: &Session,
    dialogs: &impl Dialogs,
) -> BookingStart {
    if session.role != Role::LoggedPatient {
        dialogs.alert(LOGIN_TO_BOOK);
        return BookingStart::LoginRequired;
    }
    let Some(token) = session.token() else {
        dialogs.alert("Session expired. Please log in again.");
        return BookingStart::SessionExpired;
    };
    match api.get_patient(token).await {
        Some(patient) => BookingStart::Ready(patient),
        None => {
            dialogs.alert("Could not retrieve patient data. Please try again.");
            BookingStart::Unavailable
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum BookingOutcome {
    Invalid,
    SessionExpired,
    Booked,
    Failed(String),
}

/// Submit the booking overlay for `slot` on `date`.
pub async fn book(
    api: &impl ClinicApi,
    session: &Session,
    doctor: &Doctor,
    patient: &Patient,
    date: Option<NaiveDate>,
    slot: &str,
    dialogs: &impl Dialogs,
) -> BookingOutcome {
    let (Some(date), false) = (date, slot.trim().is_empty()) else {
        dialogs.alert(&FormError::NoSlot.to_string());
        return BookingOutcome::Invalid;
    };
    let Some(token) = session.token() else {
        dialogs.alert("Session expired. Please log in again.");
        return BookingOutcome::SessionExpired;
    };
    let request = match (doctor.id, patient.id) {
        (Some(doctor_id), Some(patient_id)) => {
            BookingRequest::new(doctor_id, patient_id, date, slot)
        }
        _ => None,
    };
    let Some(request) = request else {
        tracing::error!("Cannot book slot {slot:?} with doctor {:?}", doctor.id);
        dialogs.alert("Failed to book appointment. Please try again.");
        return BookingOutcome::Failed("invalid booking".to_string());
    };

    let result = api.book_appointment(&request, token).await;
    if result.success {
        tracing::info!("Booked {} with doctor {}", request.appointment_time, request.doctor.id);
        dialogs.alert("Appointment booked successfully!");
        BookingOutcome::Booked
    } else {
        dialogs.alert(&result.message);
        BookingOutcome::Failed(result.message)
    }
}

/// Raw contents of the sign up modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub address: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<NewPatient, FormError> {
        let missing = missing_fields(&[
            ("name", &self.name),
            ("email", &self.email),
            ("password", &self.password),
            ("phone", &self.phone),
        ]);
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }
        Ok(NewPatient {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
        })
    }
}

/// Returns true when the account was created.
pub async fn signup(api: &impl ClinicApi, form: &SignupForm, dialogs: &impl Dialogs) -> bool {
    let patient = match form.validate() {
        Ok(patient) => patient,
        Err(e) => {
            dialogs.alert(&e.to_string());
            return false;
        }
    };
    let result = api.signup_patient(&patient).await;
    if result.success {
        tracing::info!("Signed up patient {}", patient.email);
        dialogs.alert("Signup successful! Please log in.");
    } else {
        dialogs.alert(&result.message);
    }
    result.success
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::fake::{doctor, FakeApi, FakeDialogs};
    use api::ActionResult;

    fn logged_in() -> Session {
        Session::new(Role::LoggedPatient, Some("ptok".into()))
    }

    fn patient() -> Patient {
        Patient {
            id: Some(4),
            name: "Kim".into(),
            ..Default::default()
        }
    }

    fn day() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2025, 3, 14)
    }

    #[tokio::test]
    async fn test_anonymous_patient_is_asked_to_log_in() {
        let api = FakeApi::default();
        let dialogs = FakeDialogs::default();
        let session = Session::new(Role::Patient, None);
        assert_eq!(
            start_booking(&api, &session, &dialogs).await,
            BookingStart::LoginRequired
        );
        assert!(api.calls().is_empty());
        assert_eq!(dialogs.alerts(), vec![LOGIN_TO_BOOK]);
    }

    #[tokio::test]
    async fn test_start_booking_fetches_patient() {
        let api = FakeApi {
            patient: Some(patient()),
            ..Default::default()
        };
        let dialogs = FakeDialogs::default();
        assert_eq!(
            start_booking(&api, &logged_in(), &dialogs).await,
            BookingStart::Ready(patient())
        );
        assert_eq!(api.calls(), vec!["get_patient ptok"]);
    }

    #[tokio::test]
    async fn test_start_booking_without_patient_data() {
        let api = FakeApi::default();
        let dialogs = FakeDialogs::default();
        assert_eq!(
            start_booking(&api, &logged_in(), &dialogs).await,
            BookingStart::Unavailable
        );
        assert_eq!(
            dialogs.alerts(),
            vec!["Could not retrieve patient data. Please try again."]
        );

        let session = Session::new(Role::LoggedPatient, None);
        assert_eq!(
            start_booking(&api, &session, &dialogs).await,
            BookingStart::SessionExpired
        );
    }

    #[tokio::test]
    async fn test_book_sends_slot_start() {
        let api = FakeApi::default();
        let dialogs = FakeDialogs::default();
        let outcome = book(
            &api,
            &logged_in(),
            &doctor(7, "Ada"),
            &patient(),
            day(),
            "10:00-11:00",
            &dialogs,
        )
        .await;
        assert_eq!(outcome, BookingOutcome::Booked);
        assert_eq!(
            api.calls(),
            vec!["book_appointment 7 2025-03-14 10:00:00 ptok"]
        );
        assert_eq!(dialogs.alerts(), vec!["Appointment booked successfully!"]);
    }

    #[tokio::test]
    async fn test_book_requires_date_and_slot() {
        let api = FakeApi::default();
        let dialogs = FakeDialogs::default();
        let ada = doctor(7, "Ada");
        assert_eq!(
            book(&api, &logged_in(), &ada, &patient(), None, "10:00-11:00", &dialogs).await,
            BookingOutcome::Invalid
        );
        assert_eq!(
            book(&api, &logged_in(), &ada, &patient(), day(), "", &dialogs).await,
            BookingOutcome::Invalid
        );
        assert!(api.calls().is_empty());
        assert_eq!(dialogs.alerts()[0], "Please select a date and time slot.");
    }

    #[tokio::test]
    async fn test_book_failure_shows_server_message() {
        let api = FakeApi {
            action: Some(ActionResult::failed("Slot already taken")),
            ..Default::default()
        };
        let dialogs = FakeDialogs::default();
        let outcome = book(
            &api,
            &logged_in(),
            &doctor(7, "Ada"),
            &patient(),
            day(),
            "10:00-11:00",
            &dialogs,
        )
        .await;
        assert_eq!(outcome, BookingOutcome::Failed("Slot already taken".into()));
        assert_eq!(dialogs.alerts(), vec!["Slot already taken"]);
    }

    #[tokio::test]
    async fn test_signup_validates_before_sending() {
        let api = FakeApi::default();
        let dialogs = FakeDialogs::default();
        let mut form = SignupForm {
            name: "Kim".into(),
            email: "kim@mail.com".into(),
            password: "pw1234".into(),
            phone: String::new(),
            address: String::new(),
        };
        assert!(!signup(&api, &form, &dialogs).await);
        assert!(api.calls().is_empty());

        form.phone = "5550001111".into();
        assert!(signup(&api, &form, &dialogs).await);
        assert_eq!(api.calls(), vec!["signup_patient kim@mail.com"]);
        assert_eq!(
            dialogs.alerts(),
            vec![
                "Please fill all required fields.",
                "Signup successful! Please log in.",
            ]
        );
    }
}
