//! Recording [`ClinicApi`] and [`Dialogs`] doubles for controller tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use api::*;
use chrono::NaiveDate;

use crate::Dialogs;

/// Answers with canned values and records every call by name.
#[derive(Default)]
pub struct FakeApi {
    pub doctors: Vec<Doctor>,
    pub appointments: Vec<Appointment>,
    pub patient: Option<Patient>,
    pub action: Option<ActionResult>,
    pub login: Option<LoginResult>,
    pub filter_fails: bool,
    pub calls: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn action(&self) -> ActionResult {
        self.action.clone().unwrap_or_else(|| ActionResult::ok("ok"))
    }
}

impl ClinicApi for FakeApi {
    async fn list_doctors(&self) -> Vec<Doctor> {
        self.record("list_doctors".into());
        self.doctors.clone()
    }

    async fn filter_doctors(&self, filter: &DoctorFilter) -> Option<Vec<Doctor>> {
        let url = Endpoints::new("http://test").unwrap().filter_doctors(filter);
        self.record(format!("filter_doctors {}", url.path()));
        (!self.filter_fails).then(|| self.doctors.clone())
    }

    async fn save_doctor(&self, doctor: &NewDoctor, token: &str) -> ActionResult {
        self.record(format!("save_doctor {} {token}", doctor.name));
        self.action()
    }

    async fn delete_doctor(&self, id: i64, token: &str) -> ActionResult {
        self.record(format!("delete_doctor {id} {token}"));
        self.action()
    }

    async fn login_admin(&self, credentials: &AdminCredentials) -> LoginResult {
        self.record(format!("login_admin {}", credentials.username));
        self.login.clone().unwrap_or(LoginResult::Rejected)
    }

    async fn login_doctor(&self, credentials: &Credentials) -> LoginResult {
        self.record(format!("login_doctor {}", credentials.email));
        self.login.clone().unwrap_or(LoginResult::Rejected)
    }

    async fn login_patient(&self, credentials: &Credentials) -> LoginResult {
        self.record(format!("login_patient {}", credentials.email));
        self.login.clone().unwrap_or(LoginResult::Rejected)
    }

    async fn list_appointments(
        &self,
        date: NaiveDate,
        patient_name: Option<&str>,
        token: &str,
    ) -> Vec<Appointment> {
        self.record(format!(
            "list_appointments {date} {} {token}",
            patient_name.unwrap_or(NO_FILTER)
        ));
        self.appointments.clone()
    }

    async fn get_patient(&self, token: &str) -> Option<Patient> {
        self.record(format!("get_patient {token}"));
        self.patient.clone()
    }

    async fn signup_patient(&self, patient: &NewPatient) -> ActionResult {
        self.record(format!("signup_patient {}", patient.email));
        self.action()
    }

    async fn book_appointment(&self, request: &BookingRequest, token: &str) -> ActionResult {
        self.record(format!(
            "book_appointment {} {} {token}",
            request.doctor.id, request.appointment_time
        ));
        self.action()
    }
}

/// Scripted confirmations; records every message shown.
#[derive(Default)]
pub struct FakeDialogs {
    pub answers: RefCell<VecDeque<bool>>,
    pub alerts: RefCell<Vec<String>>,
    pub confirms: RefCell<Vec<String>>,
}

impl FakeDialogs {
    pub fn answering(answer: bool) -> Self {
        let dialogs = Self::default();
        dialogs.answers.borrow_mut().push_back(answer);
        dialogs
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Dialogs for FakeDialogs {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.answers.borrow_mut().pop_front().unwrap_or(false)
    }
}

pub fn doctor(id: i64, name: &str) -> Doctor {
    Doctor {
        id: Some(id),
        name: name.to_string(),
        email: format!("{}@clinic.org", name.to_lowercase()),
        specialization: "General".to_string(),
        availability: vec!["09:00-10:00".to_string()],
        ..Default::default()
    }
}
