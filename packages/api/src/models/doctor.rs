use serde::{Deserialize, Serialize};

/// A doctor as listed by the backend.
///
/// The backend is inconsistent about field names (`specialty`, `speciality`,
/// `phoneNumber`) and sometimes sends `availability` as a single string, so
/// reads go through [`DoctorWire`] and are normalised here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "DoctorWire")]
pub struct Doctor {
    /// Assigned by the server; required for delete.
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialization: String,
    pub availability: Vec<String>,
}

impl Doctor {
    pub fn display_name(&self) -> &str {
        or_fallback(&self.name, "Unnamed Doctor")
    }

    pub fn specialization_label(&self) -> &str {
        or_fallback(&self.specialization, "N/A")
    }

    pub fn email_label(&self) -> &str {
        or_fallback(&self.email, "N/A")
    }

    /// Slots joined for display, e.g. `"09:00-10:00, 10:00-11:00"`.
    pub fn availability_label(&self) -> String {
        if self.availability.is_empty() {
            "Not specified".to_string()
        } else {
            self.availability.join(", ")
        }
    }
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DoctorWire {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    phone_number: Option<String>,
    #[serde(default)]
    specialization: Option<String>,
    #[serde(default)]
    specialty: Option<String>,
    #[serde(default)]
    speciality: Option<String>,
    #[serde(default)]
    availability: Option<Availability>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Availability {
    Slots(Vec<String>),
    Text(String),
}

impl From<DoctorWire> for Doctor {
    fn from(wire: DoctorWire) -> Self {
        let first = |candidates: [Option<String>; 3]| {
            candidates
                .into_iter()
                .flatten()
                .find(|s| !s.trim().is_empty())
                .unwrap_or_default()
        };
        let availability = match wire.availability {
            Some(Availability::Slots(slots)) => slots,
            Some(Availability::Text(text)) if !text.trim().is_empty() => vec![text],
            _ => Vec::new(),
        };
        Doctor {
            id: wire.id,
            name: wire.name.unwrap_or_default(),
            email: wire.email.unwrap_or_default(),
            phone: first([wire.phone, wire.phone_number, None]),
            specialization: first([wire.specialization, wire.specialty, wire.speciality]),
            availability,
        }
    }
}

/// Body of the admin "save doctor" request. Has no `id`; carries the password.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewDoctor {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub specialization: String,
    pub availability: Vec<String>,
}

/// Criteria for the doctor filter endpoint. `None` means "no filter".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DoctorFilter {
    pub name: Option<String>,
    pub time: Option<String>,
    pub specialty: Option<String>,
}

impl DoctorFilter {
    /// Build from raw input values; blank values become `None`.
    pub fn new(name: &str, time: &str, specialty: &str) -> Self {
        let opt = |v: &str| {
            let v = v.trim();
            (!v.is_empty()).then(|| v.to_string())
        };
        Self {
            name: opt(name),
            time: opt(time),
            specialty: opt(specialty),
        }
    }
}
