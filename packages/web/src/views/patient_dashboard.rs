use api::{Doctor, Patient};
use dioxus::prelude::*;
use ui::controllers::login::LoginKind;
use ui::{
    use_doctor_directory, BookingOverlay, DoctorFilters, DoctorList, Footer, Header, LoginForm,
    ModalOverlay, SignupForm,
};

#[derive(Clone, PartialEq)]
enum Overlay {
    Login,
    Signup,
    Booking(Doctor, Patient),
}

/// Doctor directory for patients, with login, sign up and booking overlays.
#[component]
pub fn PatientDashboard() -> Element {
    let directory = use_doctor_directory();
    let mut overlay = use_signal(|| None::<Overlay>);

    let on_filter = {
        let directory = directory.clone();
        move |filter| directory.filter(filter)
    };

    rsx! {
        Header {
            on_patient_login: move |_| overlay.set(Some(Overlay::Login)),
            on_patient_signup: move |_| overlay.set(Some(Overlay::Signup)),
        }

        main {
            class: "main-content",
            DoctorFilters { on_change: on_filter }
            DoctorList {
                view: directory.view.cloned(),
                on_deleted: |_| {},
                on_book: move |(doctor, patient): (Doctor, Patient)| overlay.set(Some(Overlay::Booking(doctor, patient))),
            }
        }

        {match overlay() {
            Some(Overlay::Login) => rsx! {
                ModalOverlay {
                    on_close: move |_| overlay.set(None),
                    LoginForm {
                        kind: LoginKind::Patient,
                        on_success: move |_| overlay.set(None),
                    }
                }
            },
            Some(Overlay::Signup) => rsx! {
                ModalOverlay {
                    on_close: move |_| overlay.set(None),
                    SignupForm { on_done: move |_| overlay.set(Some(Overlay::Login)) }
                }
            },
            Some(Overlay::Booking(doctor, patient)) => rsx! {
                BookingOverlay {
                    doctor,
                    patient,
                    on_close: move |_| overlay.set(None),
                }
            },
            None => rsx! {},
        }}

        Footer {}
    }
}
