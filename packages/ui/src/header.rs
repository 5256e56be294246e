//! Site header: logo plus the navigation for the current role.

use dioxus::prelude::*;
use store::{KeyValueStore, Role, SessionStore};

use crate::footer::logo_path;
use crate::{
    make_session_store, navigate_to, paths, refresh_session, use_session, BrowserDialogs, Dialogs,
};

pub const SESSION_INVALID: &str = "Session expired or invalid login. Please log in again.";

/// What the header renders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeaderView {
    /// Entry page: logo only, session cleared.
    Entry,
    /// The stored role needs a token and has none.
    Expired,
    Nav(Role),
}

impl HeaderView {
    /// Clears the session on the entry page; otherwise validates it.
    pub fn resolve<S: KeyValueStore>(store: &SessionStore<S>, is_entry: bool) -> Self {
        if is_entry {
            store.clear();
            return HeaderView::Entry;
        }
        match store.validate() {
            Ok(session) => HeaderView::Nav(session.role),
            Err(e) => {
                tracing::warn!("Invalid session: {e}");
                HeaderView::Expired
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavItem {
    AddDoctor,
    Home(&'static str),
    Appointments,
    PatientLogin,
    PatientSignup,
    Logout,
    PatientLogout,
}

pub fn nav_items(role: Role) -> Vec<NavItem> {
    match role {
        Role::Admin => vec![NavItem::AddDoctor, NavItem::Logout],
        Role::Doctor => vec![NavItem::Home(paths::DOCTOR_DASHBOARD), NavItem::Logout],
        Role::LoggedPatient => vec![
            NavItem::Home(paths::PATIENT_DASHBOARD),
            NavItem::Appointments,
            NavItem::PatientLogout,
        ],
        Role::Patient | Role::Anonymous => vec![NavItem::PatientLogin, NavItem::PatientSignup],
    }
}

/// Header for every page. `entry` marks the role selection page.
#[component]
pub fn Header(
    #[props(default)] entry: bool,
    on_add_doctor: Option<EventHandler<()>>,
    on_patient_login: Option<EventHandler<()>>,
    on_patient_signup: Option<EventHandler<()>>,
) -> Element {
    let session = use_session();
    let view = use_memo(move || {
        // The entry page clears once on mount; a login there must survive.
        if !entry {
            session.read();
        }
        HeaderView::resolve(&make_session_store(), entry)
    });

    use_effect(move || {
        if view() == HeaderView::Expired {
            BrowserDialogs.alert(SESSION_INVALID);
            navigate_to(paths::ENTRY);
        }
        refresh_session(session);
    });

    let items = match view() {
        HeaderView::Nav(role) => nav_items(role),
        HeaderView::Entry | HeaderView::Expired => Vec::new(),
    };

    rsx! {
        header {
            class: "header",
            div {
                class: "logo-section",
                img {
                    class: "logo-img",
                    src: logo_path(entry),
                    alt: "Hospital CRM Logo",
                }
                span { class: "logo-title", "Hospital CMS" }
            }
            if view() != HeaderView::Entry {
                nav {
                    for item in items {
                        NavButton {
                            key: "{item:?}",
                            item,
                            on_add_doctor,
                            on_patient_login,
                            on_patient_signup,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavButton(
    item: NavItem,
    on_add_doctor: Option<EventHandler<()>>,
    on_patient_login: Option<EventHandler<()>>,
    on_patient_signup: Option<EventHandler<()>>,
) -> Element {
    match item {
        NavItem::AddDoctor => rsx! {
            button { class: "adminBtn", onclick: forward(on_add_doctor), "Add Doctor" }
        },
        NavItem::Home(path) => rsx! {
            button { class: "adminBtn", onclick: move |_| navigate_to(path), "Home" }
        },
        NavItem::Appointments => rsx! {
            button {
                class: "adminBtn",
                onclick: move |_| navigate_to(paths::PATIENT_APPOINTMENTS),
                "Appointments"
            }
        },
        NavItem::PatientLogin => rsx! {
            button { class: "adminBtn", onclick: forward(on_patient_login), "Login" }
        },
        NavItem::PatientSignup => rsx! {
            button { class: "adminBtn", onclick: forward(on_patient_signup), "Sign Up" }
        },
        NavItem::Logout => rsx! {
            a {
                class: "logout-link",
                href: "#",
                onclick: move |evt: Event<MouseData>| {
                    evt.prevent_default();
                    make_session_store().logout();
                    tracing::info!("Logged out");
                    navigate_to(paths::ENTRY);
                },
                "Logout"
            }
        },
        NavItem::PatientLogout => rsx! {
            a {
                class: "logout-link",
                href: "#",
                onclick: move |evt: Event<MouseData>| {
                    evt.prevent_default();
                    make_session_store().logout_patient();
                    tracing::info!("Patient logged out");
                    navigate_to(paths::ENTRY);
                },
                "Logout"
            }
        },
    }
}

fn forward(handler: Option<EventHandler<()>>) -> impl FnMut(Event<MouseData>) {
    move |_| {
        if let Some(handler) = handler {
            handler.call(());
        }
    }
}
