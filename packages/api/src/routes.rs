//! # Endpoint URLs
//!
//! Every path the client calls is built here from the configured origin. Path
//! parameters are pushed as URL path segments, which percent-encodes them
//! (`"Dr Who/ENT"` becomes `Dr%20Who%2FENT`).
//!
//! The backend reads the literal segment `"null"` as "no filter"; that
//! convention is kept for compatibility and lives only in this module.

use chrono::NaiveDate;
use reqwest::Url;

use crate::error::ApiError;
use crate::models::DoctorFilter;

/// Placeholder segment for an absent filter value.
pub const NO_FILTER: &str = "null";

fn or_null(value: Option<&str>) -> &str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => NO_FILTER,
    }
}

/// URL builder rooted at the backend origin.
#[derive(Clone, Debug, PartialEq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url).map_err(|e| ApiError::BaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(ApiError::BaseUrl {
                url: base_url.to_string(),
                reason: "not a hierarchical URL".to_string(),
            });
        }
        Ok(Self { base })
    }

    fn at(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub fn doctors(&self) -> Url {
        self.at(&["doctor"])
    }

    pub fn filter_doctors(&self, filter: &DoctorFilter) -> Url {
        self.at(&[
            "doctor",
            "filter",
            or_null(filter.name.as_deref()),
            or_null(filter.time.as_deref()),
            or_null(filter.specialty.as_deref()),
        ])
    }

    pub fn save_doctor(&self, token: &str) -> Url {
        self.at(&["doctor", "save", token])
    }

    pub fn delete_doctor(&self, id: i64, token: &str) -> Url {
        self.at(&["doctor", "delete", &id.to_string(), token])
    }

    pub fn admin_login(&self) -> Url {
        self.at(&["admin", "login"])
    }

    pub fn doctor_login(&self) -> Url {
        self.at(&["doctor", "login"])
    }

    pub fn patient_login(&self) -> Url {
        self.at(&["patient", "login"])
    }

    pub fn patient(&self, token: &str) -> Url {
        self.at(&["patient", token])
    }

    pub fn patients(&self) -> Url {
        self.at(&["patient"])
    }

    pub fn appointments(&self, date: NaiveDate, patient_name: Option<&str>, token: &str) -> Url {
        let date = date.format("%Y-%m-%d").to_string();
        self.at(&["appointments", &date, or_null(patient_name), token])
    }

    pub fn book_appointment(&self, token: &str) -> Url {
        self.at(&["appointments", token])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> Endpoints {
        Endpoints::new("http://localhost:8080").unwrap()
    }

    #[test]
    fn test_empty_filter_is_all_null() {
        let url = endpoints().filter_doctors(&DoctorFilter::new("", "", ""));
        assert_eq!(url.path(), "/doctor/filter/null/null/null");
    }

    #[test]
    fn test_each_filter_position_independent() {
        let e = endpoints();
        let cases = [
            (DoctorFilter::new("ada", "", ""), "/doctor/filter/ada/null/null"),
            (DoctorFilter::new("", "AM", ""), "/doctor/filter/null/AM/null"),
            (DoctorFilter::new("", "", "ENT"), "/doctor/filter/null/null/ENT"),
            (DoctorFilter::new("ada", "PM", "ENT"), "/doctor/filter/ada/PM/ENT"),
        ];
        for (filter, path) in cases {
            assert_eq!(e.filter_doctors(&filter).path(), path);
        }
    }

    #[test]
    fn test_segments_are_percent_encoded() {
        let filter = DoctorFilter::new("Dr Who/ENT", "", "Gastro?");
        let url = endpoints().filter_doctors(&filter);
        assert_eq!(url.path(), "/doctor/filter/Dr%20Who%2FENT/null/Gastro%3F");
    }

    #[test]
    fn test_whitespace_filter_fields_are_null() {
        let filter = DoctorFilter {
            name: Some("   ".to_string()),
            time: None,
            specialty: Some("".to_string()),
        };
        assert_eq!(
            endpoints().filter_doctors(&filter).path(),
            "/doctor/filter/null/null/null"
        );
    }

    #[test]
    fn test_doctor_paths() {
        let e = endpoints();
        assert_eq!(e.doctors().as_str(), "http://localhost:8080/doctor");
        assert_eq!(e.save_doctor("t0k").path(), "/doctor/save/t0k");
        assert_eq!(e.delete_doctor(42, "t0k").path(), "/doctor/delete/42/t0k");
        assert_eq!(e.admin_login().path(), "/admin/login");
        assert_eq!(e.doctor_login().path(), "/doctor/login");
        assert_eq!(e.patient_login().path(), "/patient/login");
        assert_eq!(e.patient("t0k").path(), "/patient/t0k");
        assert_eq!(e.patients().path(), "/patient");
    }

    #[test]
    fn test_appointment_paths() {
        let e = endpoints();
        let date = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        assert_eq!(
            e.appointments(date, None, "tok").path(),
            "/appointments/2025-01-09/null/tok"
        );
        assert_eq!(
            e.appointments(date, Some("Kim Lee"), "tok").path(),
            "/appointments/2025-01-09/Kim%20Lee/tok"
        );
        assert_eq!(e.book_appointment("tok").path(), "/appointments/tok");
    }

    #[test]
    fn test_base_with_path_prefix() {
        let e = Endpoints::new("https://clinic.example.org/api/").unwrap();
        assert_eq!(e.doctors().as_str(), "https://clinic.example.org/api/doctor");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            Endpoints::new("not a url"),
            Err(ApiError::BaseUrl { .. })
        ));
        assert!(Endpoints::new("mailto:desk@clinic.org").is_err());
    }
}
