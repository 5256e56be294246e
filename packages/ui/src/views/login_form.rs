use dioxus::prelude::*;
use store::Role;

use crate::controllers::login::{login, LoginKind};
use crate::{make_session_store, refresh_session, use_api, use_session, BrowserDialogs};

/// Identifier and password form for one login kind.
#[component]
pub fn LoginForm(kind: LoginKind, on_success: EventHandler<Role>) -> Element {
    let api = use_api();
    let session = use_session();
    let mut identifier = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |_| {
        if submitting() {
            return;
        }
        submitting.set(true);
        let api = api.clone();
        spawn(async move {
            let store = make_session_store();
            let role = login(
                &api,
                &store,
                kind,
                &identifier(),
                &password(),
                &BrowserDialogs,
            )
            .await;
            submitting.set(false);
            if let Some(role) = role {
                refresh_session(session);
                on_success.call(role);
            }
        });
    };

    let label = kind.identifier_label();
    let input_type = match kind {
        LoginKind::Admin => "text",
        LoginKind::Doctor | LoginKind::Patient => "email",
    };

    rsx! {
        h2 { "{kind.title()}" }
        input {
            class: "input-field",
            r#type: input_type,
            placeholder: label,
            value: identifier(),
            oninput: move |evt: FormEvent| identifier.set(evt.value()),
        }
        input {
            class: "input-field",
            r#type: "password",
            placeholder: "Password",
            value: password(),
            oninput: move |evt: FormEvent| password.set(evt.value()),
        }
        button {
            class: "dashboard-btn",
            disabled: submitting(),
            onclick: handle_submit,
            "Login"
        }
    }
}
