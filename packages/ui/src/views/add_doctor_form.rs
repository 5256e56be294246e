use dioxus::prelude::*;

use crate::controllers::admin::{add_doctor, AddDoctorForm as Form, AddDoctorOutcome};
use crate::{navigate_to, paths, use_api, use_config, use_session, BrowserDialogs};

/// The admin's Add Doctor modal body. `on_saved` fires after the backend
/// accepts the doctor.
#[component]
pub fn AddDoctorForm(on_saved: EventHandler<()>) -> Element {
    let api = use_api();
    let config = use_config();
    let session = use_session();
    let mut form = use_signal(Form::default);

    let handle_submit = move |_| {
        let api = api.clone();
        spawn(async move {
            let current = form();
            match add_doctor(&api, &session(), &current, &BrowserDialogs).await {
                AddDoctorOutcome::Saved => on_saved.call(()),
                AddDoctorOutcome::SessionExpired => navigate_to(paths::ENTRY),
                AddDoctorOutcome::Invalid | AddDoctorOutcome::Failed(_) => {}
            }
        });
    };

    rsx! {
        h2 { "Add Doctor" }
        input {
            class: "input-field",
            r#type: "text",
            placeholder: "Doctor Name",
            value: form.read().name.clone(),
            oninput: move |evt: FormEvent| form.write().name = evt.value(),
        }
        select {
            class: "input-field",
            value: form.read().specialization.clone(),
            onchange: move |evt: FormEvent| form.write().specialization = evt.value(),
            option { value: "", "Specialization" }
            for s in config.directory.specialties.iter() {
                option { key: "{s}", value: "{s}", "{s}" }
            }
        }
        input {
            class: "input-field",
            r#type: "email",
            placeholder: "Email",
            value: form.read().email.clone(),
            oninput: move |evt: FormEvent| form.write().email = evt.value(),
        }
        input {
            class: "input-field",
            r#type: "password",
            placeholder: "Password",
            value: form.read().password.clone(),
            oninput: move |evt: FormEvent| form.write().password = evt.value(),
        }
        input {
            class: "input-field",
            r#type: "tel",
            placeholder: "Mobile No.",
            value: form.read().phone.clone(),
            oninput: move |evt: FormEvent| form.write().phone = evt.value(),
        }
        div {
            class: "availability-container",
            label { class: "availabilityLabel", "Select Availability:" }
            div {
                class: "checkbox-group",
                for slot in config.directory.time_slots.iter() {
                    label {
                        key: "{slot}",
                        input {
                            r#type: "checkbox",
                            name: "availability",
                            value: "{slot}",
                            checked: form.read().availability.contains(slot),
                            onchange: {
                                let slot = slot.clone();
                                move |evt: FormEvent| form.write().set_slot(&slot, evt.checked())
                            },
                        }
                        " {slot}"
                    }
                }
            }
        }
        button { class: "dashboard-btn", onclick: handle_submit, "Save" }
    }
}
