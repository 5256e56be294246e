//! Entry page: pick a role. Admin and doctor log in first.

use dioxus::prelude::*;
use store::Role;
use ui::controllers::login::{select_role, LoginKind};
use ui::icons::{FaUser, FaUserDoctor, FaUserShield};
use ui::{landing, make_session_store, refresh_session, use_session, Footer, Header, Icon, LoginForm, ModalOverlay};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();
    let session = use_session();
    let mut login = use_signal(|| None::<LoginKind>);

    let go_to = move |role: Role| match landing(role).parse::<Route>() {
        Ok(route) => {
            nav.push(route);
        }
        Err(e) => tracing::error!("No route for {role}: {e}"),
    };

    rsx! {
        Header { entry: true }

        main {
            class: "main-content",
            h2 { "Select Your Role:" }
            div {
                class: "role-buttons",
                button {
                    class: "dashboard-btn",
                    onclick: move |_| login.set(Some(LoginKind::Admin)),
                    Icon { icon: FaUserShield, width: 16, height: 16 }
                    " Admin"
                }
                button {
                    class: "dashboard-btn",
                    onclick: move |_| login.set(Some(LoginKind::Doctor)),
                    Icon { icon: FaUserDoctor, width: 16, height: 16 }
                    " Doctor"
                }
                button {
                    class: "dashboard-btn",
                    onclick: move |_| {
                        let store = make_session_store();
                        select_role(&store, Role::Patient);
                        refresh_session(session);
                        go_to(Role::Patient);
                    },
                    Icon { icon: FaUser, width: 16, height: 16 }
                    " Patient"
                }
            }
        }

        if let Some(kind) = login() {
            ModalOverlay {
                on_close: move |_| login.set(None),
                LoginForm {
                    kind,
                    on_success: move |role: Role| {
                        login.set(None);
                        go_to(role);
                    },
                }
            }
        }

        Footer { root: true }
    }
}
