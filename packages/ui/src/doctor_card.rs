//! A doctor's details plus the single action the current role may take.

use api::{Doctor, Patient};
use dioxus::prelude::*;
use store::Role;

use crate::controllers::admin::{delete_doctor, DeleteOutcome};
use crate::controllers::patient::{start_booking, BookingStart};
use crate::{navigate_to, paths, use_api, use_session, BrowserDialogs};

pub const SELECT_ROLE: &str = "Please select a role to continue.";

/// The action area of a card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardAction {
    Delete,
    /// Book Now for a patient who has not logged in.
    PromptLogin,
    Book,
    SelectRole,
}

impl CardAction {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => CardAction::Delete,
            Role::Patient => CardAction::PromptLogin,
            Role::LoggedPatient => CardAction::Book,
            Role::Doctor | Role::Anonymous => CardAction::SelectRole,
        }
    }
}

#[component]
pub fn DoctorCard(
    doctor: Doctor,
    /// Called with the id once the backend confirms the delete.
    on_deleted: EventHandler<i64>,
    /// Called when the booking overlay should open.
    on_book: EventHandler<(Doctor, Patient)>,
) -> Element {
    let api = use_api();
    let session = use_session();
    let action = CardAction::for_role(session().role);

    let on_delete = {
        let api = api.clone();
        let doctor = doctor.clone();
        move |_| {
            let api = api.clone();
            let doctor = doctor.clone();
            spawn(async move {
                let outcome = delete_doctor(&api, &session(), &doctor, &BrowserDialogs).await;
                if let DeleteOutcome::Deleted(id) = outcome {
                    on_deleted.call(id);
                }
            });
        }
    };

    let on_book_now = {
        let doctor = doctor.clone();
        move |_| {
            let api = api.clone();
            let doctor = doctor.clone();
            spawn(async move {
                match start_booking(&api, &session(), &BrowserDialogs).await {
                    BookingStart::Ready(patient) => on_book.call((doctor, patient)),
                    BookingStart::SessionExpired => navigate_to(paths::ENTRY),
                    BookingStart::LoginRequired | BookingStart::Unavailable => {}
                }
            });
        }
    };

    rsx! {
        div {
            class: "doctor-card",
            div {
                class: "doctor-info",
                h3 { "{doctor.display_name()}" }
                p { "Specialization: {doctor.specialization_label()}" }
                p { "Email: {doctor.email_label()}" }
                p { "Available: {doctor.availability_label()}" }
            }
            div {
                class: "card-actions",
                {match action {
                    CardAction::Delete => rsx! {
                        button { class: "delete-btn", onclick: on_delete, "Delete" }
                    },
                    CardAction::PromptLogin | CardAction::Book => rsx! {
                        button { class: "book-btn", onclick: on_book_now, "Book Now" }
                    },
                    CardAction::SelectRole => rsx! {
                        p { "{SELECT_ROLE}" }
                    },
                }}
            }
        }
    }
}
