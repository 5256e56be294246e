use dioxus::prelude::*;

use crate::controllers::patient::{signup, SignupForm as Form};
use crate::{use_api, BrowserDialogs};

#[component]
pub fn SignupForm(on_done: EventHandler<()>) -> Element {
    let api = use_api();
    let mut form = use_signal(Form::default);

    let handle_submit = move |_| {
        let api = api.clone();
        spawn(async move {
            if signup(&api, &form(), &BrowserDialogs).await {
                on_done.call(());
            }
        });
    };

    rsx! {
        h2 { "Patient Signup" }
        input {
            class: "input-field",
            r#type: "text",
            placeholder: "Name",
            value: form.read().name.clone(),
            oninput: move |evt: FormEvent| form.write().name = evt.value(),
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
            placeholder: "Phone",
            value: form.read().phone.clone(),
            oninput: move |evt: FormEvent| form.write().phone = evt.value(),
        }
        input {
            class: "input-field",
            r#type: "text",
            placeholder: "Address",
            value: form.read().address.clone(),
            oninput: move |evt: FormEvent| form.write().address = evt.value(),
        }
        button { class: "dashboard-btn", onclick: handle_submit, "Signup" }
    }
}
