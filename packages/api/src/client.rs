//! # REST client
//!
//! [`ClinicApi`] is the async seam every controller talks to, one method per
//! backend operation. [`HttpClient`] implements it over `reqwest`.
//!
//! Each method performs exactly one round trip and never hands a transport
//! error to the caller. Failures are logged here and converted to the
//! method's documented empty value (`Vec::new()`, `None`,
//! [`ActionResult::failed`], [`LoginResult::Rejected`] ...). Filtering is the
//! exception: it reports failure as `None` so the list can be left alone. Deciding what to
//! tell the user is left to the controllers.

use std::future::Future;

use chrono::NaiveDate;
use reqwest::{Method, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::*;
use crate::routes::Endpoints;

/// Operations offered by the clinic backend.
pub trait ClinicApi {
    fn list_doctors(&self) -> impl Future<Output = Vec<Doctor>>;
    /// `None` when the request failed, as opposed to matching no one.
    fn filter_doctors(&self, filter: &DoctorFilter) -> impl Future<Output = Option<Vec<Doctor>>>;
    fn save_doctor(&self, doctor: &NewDoctor, token: &str) -> impl Future<Output = ActionResult>;
    fn delete_doctor(&self, id: i64, token: &str) -> impl Future<Output = ActionResult>;
    fn login_admin(&self, credentials: &AdminCredentials) -> impl Future<Output = LoginResult>;
    fn login_doctor(&self, credentials: &Credentials) -> impl Future<Output = LoginResult>;
    fn login_patient(&self, credentials: &Credentials) -> impl Future<Output = LoginResult>;
    /// `patient_name: None` lists every appointment of the day.
    fn list_appointments(
        &self,
        date: NaiveDate,
        patient_name: Option<&str>,
        token: &str,
    ) -> impl Future<Output = Vec<Appointment>>;
    fn get_patient(&self, token: &str) -> impl Future<Output = Option<Patient>>;
    fn signup_patient(&self, patient: &NewPatient) -> impl Future<Output = ActionResult>;
    fn book_appointment(
        &self,
        request: &BookingRequest,
        token: &str,
    ) -> impl Future<Output = ActionResult>;
}

/// `reqwest`-backed [`ClinicApi`].
#[derive(Clone, Debug)]
pub struct HttpClient {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            http: reqwest::Client::new(),
            endpoints: Endpoints::new(base_url)?,
        })
    }

    pub fn from_config(config: &store::ClinicConfig) -> Result<Self, ApiError> {
        Self::new(&config.api.base_url)
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<&(impl Serialize + ?Sized)>,
    ) -> Result<T, ApiError> {
        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        read_json(response).await
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        self.send(Method::GET, url, None::<&()>).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &(impl Serialize + ?Sized),
    ) -> Result<T, ApiError> {
        self.send(Method::POST, url, Some(body)).await
    }

    async fn login(&self, url: Url, body: &(impl Serialize + ?Sized), who: &str) -> LoginResult {
        let result = self.post::<TokenResponse>(url, body).await;
        if let Err(ref e) = result {
            tracing::error!("Error during {who} login: {e}");
        }
        login_result(result)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<ServerMessage>()
            .await
            .ok()
            .and_then(ServerMessage::text)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_string());
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response.json::<T>().await?)
}

fn login_result(result: Result<TokenResponse, ApiError>) -> LoginResult {
    match result {
        Ok(TokenResponse { token: Some(token) }) if !token.is_empty() => LoginResult::Token(token),
        Ok(_) => LoginResult::MissingToken,
        Err(e) if e.is_status() => LoginResult::Rejected,
        Err(_) => LoginResult::Failed,
    }
}

/// Collapse a mutation response into an [`ActionResult`].
///
/// A success status counts as success unless the body says `"success": false`.
/// Failure messages prefer the backend's own text.
fn action_result(
    result: Result<ServerMessage, ApiError>,
    ok_message: &str,
    status_message: &str,
    transport_message: &str,
) -> ActionResult {
    match result {
        Ok(body) => {
            let success = body.success.unwrap_or(true);
            let text = body.text();
            match (success, text) {
                (true, Some(text)) => ActionResult::ok(text),
                (true, None) => ActionResult::ok(ok_message),
                (false, text) => ActionResult::failed(text.unwrap_or_else(|| status_message.to_string())),
            }
        }
        Err(ApiError::Status { message, .. }) if !message.is_empty() => ActionResult::failed(message),
        Err(ApiError::Status { .. }) => ActionResult::failed(status_message),
        Err(_) => ActionResult::failed(transport_message),
    }
}

impl ClinicApi for HttpClient {
    async fn list_doctors(&self) -> Vec<Doctor> {
        match self.get::<DoctorList>(self.endpoints.doctors()).await {
            Ok(list) => list.doctors,
            Err(e) => {
                tracing::error!("Failed to fetch doctors: {e}");
                Vec::new()
            }
        }
    }

    async fn filter_doctors(&self, filter: &DoctorFilter) -> Option<Vec<Doctor>> {
        match self.get::<DoctorList>(self.endpoints.filter_doctors(filter)).await {
            Ok(list) => Some(list.doctors),
            Err(e) => {
                tracing::error!("Failed to filter doctors: {e}");
                None
            }
        }
    }

    async fn save_doctor(&self, doctor: &NewDoctor, token: &str) -> ActionResult {
        let result = self
            .post::<ServerMessage>(self.endpoints.save_doctor(token), doctor)
            .await;
        if let Err(ref e) = result {
            tracing::error!("Failed to save doctor: {e}");
        }
        action_result(
            result,
            "Doctor saved successfully",
            "Failed to save doctor",
            "An error occurred while saving doctor",
        )
    }

    async fn delete_doctor(&self, id: i64, token: &str) -> ActionResult {
        let result = self
            .send::<ServerMessage>(
                Method::DELETE,
                self.endpoints.delete_doctor(id, token),
                None::<&()>,
            )
            .await;
        if let Err(ref e) = result {
            tracing::error!("Failed to delete doctor {id}: {e}");
        }
        action_result(
            result,
            "Doctor deleted successfully",
            "Failed to delete doctor",
            "An error occurred during deletion",
        )
    }

    async fn login_admin(&self, credentials: &AdminCredentials) -> LoginResult {
        self.login(self.endpoints.admin_login(), credentials, "admin").await
    }

    async fn login_doctor(&self, credentials: &Credentials) -> LoginResult {
        self.login(self.endpoints.doctor_login(), credentials, "doctor").await
    }

    async fn login_patient(&self, credentials: &Credentials) -> LoginResult {
        self.login(self.endpoints.patient_login(), credentials, "patient").await
    }

    async fn list_appointments(
        &self,
        date: NaiveDate,
        patient_name: Option<&str>,
        token: &str,
    ) -> Vec<Appointment> {
        let url = self.endpoints.appointments(date, patient_name, token);
        match self.get::<AppointmentList>(url).await {
            Ok(list) => list.appointments,
            Err(e) => {
                tracing::error!("Failed to fetch appointments for {date}: {e}");
                Vec::new()
            }
        }
    }

    async fn get_patient(&self, token: &str) -> Option<Patient> {
        match self.get::<PatientResponse>(self.endpoints.patient(token)).await {
            Ok(body) => body.patient,
            Err(e) => {
                tracing::error!("Failed to fetch patient details: {e}");
                None
            }
        }
    }

    async fn signup_patient(&self, patient: &NewPatient) -> ActionResult {
        let result = self.post::<ServerMessage>(self.endpoints.patients(), patient).await;
        if let Err(ref e) = result {
            tracing::error!("Failed to sign up patient: {e}");
        }
        action_result(
            result,
            "Signup successful",
            "Signup failed",
            "An error occurred during signup",
        )
    }

    async fn book_appointment(&self, request: &BookingRequest, token: &str) -> ActionResult {
        let result = self
            .post::<ServerMessage>(self.endpoints.book_appointment(token), request)
            .await;
        if let Err(ref e) = result {
            tracing::error!("Failed to book appointment: {e}");
        }
        action_result(
            result,
            "Appointment booked successfully",
            "Failed to book appointment",
            "An error occurred while booking",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16, message: &str) -> ApiError {
        ApiError::Status {
            status: code,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_login_result_mapping() {
        let ok = login_result(Ok(TokenResponse {
            token: Some("abc".into()),
        }));
        assert_eq!(ok, LoginResult::Token("abc".into()));
        assert_eq!(ok.token(), Some("abc"));

        let empty = login_result(Ok(TokenResponse {
            token: Some(String::new()),
        }));
        assert_eq!(empty, LoginResult::MissingToken);
        assert_eq!(login_result(Ok(TokenResponse::default())), LoginResult::MissingToken);
        assert_eq!(
            login_result(Err(status(401, "Invalid password"))),
            LoginResult::Rejected
        );
        assert_eq!(LoginResult::Rejected.token(), None);
    }

    #[test]
    fn test_action_result_success_paths() {
        let r = action_result(Ok(ServerMessage::default()), "saved", "failed", "oops");
        assert_eq!(r, ActionResult::ok("saved"));

        let body = ServerMessage {
            message: Some("Doctor added to db".into()),
            ..Default::default()
        };
        let r = action_result(Ok(body), "saved", "failed", "oops");
        assert_eq!(r, ActionResult::ok("Doctor added to db"));

        let body = ServerMessage {
            success: Some(false),
            ..Default::default()
        };
        let r = action_result(Ok(body), "saved", "failed", "oops");
        assert_eq!(r, ActionResult::failed("failed"));
    }

    #[test]
    fn test_action_result_failure_paths() {
        let r = action_result(Err(status(409, "Doctor already exists")), "s", "failed", "oops");
        assert_eq!(r, ActionResult::failed("Doctor already exists"));

        let r = action_result(Err(status(500, "")), "s", "failed", "oops");
        assert_eq!(r, ActionResult::failed("failed"));

        let r = action_result(
            Err(ApiError::BaseUrl {
                url: "x".into(),
                reason: "y".into(),
            }),
            "s",
            "failed",
            "oops",
        );
        assert_eq!(r, ActionResult::failed("oops"));
    }

    #[tokio::test]
    async fn test_unreachable_backend_yields_empty_values() {
        // Nothing listens on the discard port.
        let client = HttpClient::new("http://127.0.0.1:9").unwrap();

        assert!(client.list_doctors().await.is_empty());
        assert_eq!(
            client.filter_doctors(&DoctorFilter::new("ada", "", "")).await,
            None
        );
        let deleted = client.delete_doctor(1, "tok").await;
        assert!(!deleted.success);
        assert_eq!(deleted.message, "An error occurred during deletion");

        let credentials = Credentials {
            email: "a@b.c".into(),
            password: "pw".into(),
        };
        assert_eq!(client.login_doctor(&credentials).await, LoginResult::Failed);
        assert!(client.get_patient("tok").await.is_none());
    }
}
