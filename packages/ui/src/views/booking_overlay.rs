use api::{Doctor, Patient};
use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::controllers::patient::{book, BookingOutcome};
use crate::{navigate_to, paths, use_api, use_session, BrowserDialogs, ModalOverlay};

/// Pick a date and one of the doctor's slots, then book.
#[component]
pub fn BookingOverlay(doctor: Doctor, patient: Patient, on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let session = use_session();
    let mut date = use_signal(String::new);
    let mut slot = use_signal(String::new);

    let handle_submit = {
        let doctor = doctor.clone();
        let patient = patient.clone();
        move |_| {
            let api = api.clone();
            let doctor = doctor.clone();
            let patient = patient.clone();
            let day = NaiveDate::parse_from_str(&date(), "%Y-%m-%d").ok();
            spawn(async move {
                let outcome = book(
                    &api,
                    &session(),
                    &doctor,
                    &patient,
                    day,
                    &slot(),
                    &BrowserDialogs,
                )
                .await;
                match outcome {
                    BookingOutcome::Booked => on_close.call(()),
                    BookingOutcome::SessionExpired => navigate_to(paths::ENTRY),
                    BookingOutcome::Invalid | BookingOutcome::Failed(_) => {}
                }
            });
        }
    };

    rsx! {
        ModalOverlay {
            on_close,
            div {
                class: "booking-overlay",
                h2 { "Book an Appointment" }
                input { class: "input-field", r#type: "text", value: "{patient.name}", disabled: true }
                input { class: "input-field", r#type: "text", value: "{doctor.display_name()}", disabled: true }
                input { class: "input-field", r#type: "text", value: "{doctor.specialization_label()}", disabled: true }
                input { class: "input-field", r#type: "email", value: "{doctor.email_label()}", disabled: true }
                input {
                    class: "input-field",
                    r#type: "date",
                    value: date(),
                    onchange: move |evt: FormEvent| date.set(evt.value()),
                }
                select {
                    class: "input-field",
                    value: slot(),
                    onchange: move |evt: FormEvent| slot.set(evt.value()),
                    option { value: "", "Select time" }
                    for s in doctor.availability.clone() {
                        option { key: "{s}", value: "{s}", "{s}" }
                    }
                }
                button { class: "confirm-booking", onclick: handle_submit, "Confirm Booking" }
            }
        }
    }
}
