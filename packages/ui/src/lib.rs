//! This crate contains all shared UI for the workspace: session and config
//! context, page controllers, and the components the routed pages compose.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod controllers;
pub mod paths;
pub mod views;

mod context;
pub use context::{use_api, use_config, ClinicContext, ClinicProvider};

mod session;
pub use session::{make_session_store, refresh_session, use_session, SessionProvider};

mod platform;
pub use platform::{date_value, navigate_to, today, BrowserDialogs, Dialogs};

mod sequence;
pub use sequence::{RequestSequence, RequestTicket};

pub use paths::landing;

mod header;
pub use header::{nav_items, Header, HeaderView, NavItem, SESSION_INVALID};

mod footer;
pub use footer::Footer;

mod doctor_card;
pub use doctor_card::{CardAction, DoctorCard};

mod doctor_list;
pub use doctor_list::{use_doctor_directory, DoctorDirectory, DoctorFilters, DoctorList};

mod appointment_table;
pub use appointment_table::{AppointmentTable, PatientRow};

pub use views::{AddDoctorForm, BookingOverlay, LoginForm, ModalOverlay, SignupForm};
