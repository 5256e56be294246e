//! Role selection and the three login forms.

use api::{AdminCredentials, ClinicApi, Credentials, LoginResult};
use store::{KeyValueStore, Role, SessionStore};

use crate::{landing, Dialogs};

pub const LOGIN_NOT_SAVED: &str =
    "Login failed. Could not save your session, please check your browser storage settings.";

/// Which login form was submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginKind {
    Admin,
    Doctor,
    Patient,
}

impl LoginKind {
    /// Role stored after a successful login.
    pub fn role(self) -> Role {
        match self {
            LoginKind::Admin => Role::Admin,
            LoginKind::Doctor => Role::Doctor,
            LoginKind::Patient => Role::LoggedPatient,
        }
    }

    /// Label of the identifier field.
    pub fn identifier_label(self) -> &'static str {
        match self {
            LoginKind::Admin => "Username",
            LoginKind::Doctor | LoginKind::Patient => "Email",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            LoginKind::Admin => "Admin Login",
            LoginKind::Doctor => "Doctor Login",
            LoginKind::Patient => "Patient Login",
        }
    }

    fn missing_message(self) -> &'static str {
        match self {
            LoginKind::Admin => "Please enter both username and password.",
            LoginKind::Doctor | LoginKind::Patient => "Please enter both email and password.",
        }
    }
}

/// Submit a login form. On success the token and role are persisted and the
/// role is returned so the caller can navigate to its landing page.
pub async fn login<S: KeyValueStore>(
    api: &impl ClinicApi,
    store: &SessionStore<S>,
    kind: LoginKind,
    identifier: &str,
    password: &str,
    dialogs: &impl Dialogs,
) -> Option<Role> {
    let identifier = identifier.trim();
    let password = password.trim();
    if identifier.is_empty() || password.is_empty() {
        dialogs.alert(kind.missing_message());
        return None;
    }

    let result = match kind {
        LoginKind::Admin => {
            api.login_admin(&AdminCredentials {
                username: identifier.to_string(),
                password: password.to_string(),
            })
            .await
        }
        LoginKind::Doctor | LoginKind::Patient => {
            let credentials = Credentials {
                email: identifier.to_string(),
                password: password.to_string(),
            };
            if kind == LoginKind::Doctor {
                api.login_doctor(&credentials).await
            } else {
                api.login_patient(&credentials).await
            }
        }
    };

    match result {
        LoginResult::Token(token) => match store.login(kind.role(), &token) {
            Ok(session) => {
                tracing::info!("Logged in as {}", session.role);
                Some(session.role)
            }
            Err(e) => {
                tracing::error!("Login succeeded but the session was not saved: {e}");
                dialogs.alert(LOGIN_NOT_SAVED);
                None
            }
        },
        LoginResult::MissingToken => {
            dialogs.alert("Login failed. Token not received.");
            None
        }
        LoginResult::Rejected => {
            dialogs.alert("Invalid credentials!");
            None
        }
        LoginResult::Failed => {
            dialogs.alert("An error occurred during login. Please try again.");
            None
        }
    }
}

/// Entry-page role button for roles that need no login. Returns the landing path.
pub fn select_role<S: KeyValueStore>(store: &SessionStore<S>, role: Role) -> &'static str {
    store.set_role(role);
    landing(role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::fake::{FakeApi, FakeDialogs};
    use store::{MemoryStorage, Session};

    fn store() -> SessionStore<MemoryStorage> {
        SessionStore::new(MemoryStorage::new())
    }

    fn answering(result: LoginResult) -> FakeApi {
        FakeApi {
            login: Some(result),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_successful_logins_persist_session() {
        for (kind, call) in [
            (LoginKind::Admin, "login_admin admin"),
            (LoginKind::Doctor, "login_doctor admin"),
            (LoginKind::Patient, "login_patient admin"),
        ] {
            let api = answering(LoginResult::Token("abc".into()));
            let store = store();
            let dialogs = FakeDialogs::default();

            let role = login(&api, &store, kind, " admin ", "pw", &dialogs).await;
            assert_eq!(role, Some(kind.role()));
            assert_eq!(api.calls(), vec![call]);
            assert_eq!(store.load(), Session::new(kind.role(), Some("abc".into())));
            assert!(dialogs.alerts().is_empty());
        }
    }

    #[tokio::test]
    async fn test_missing_fields_make_no_call() {
        let api = FakeApi::default();
        let store = store();
        let dialogs = FakeDialogs::default();

        assert_eq!(login(&api, &store, LoginKind::Admin, "", "pw", &dialogs).await, None);
        assert_eq!(login(&api, &store, LoginKind::Doctor, "a@b.c", "", &dialogs).await, None);
        assert!(api.calls().is_empty());
        assert_eq!(
            dialogs.alerts(),
            vec![
                "Please enter both username and password.",
                "Please enter both email and password.",
            ]
        );
    }

    #[tokio::test]
    async fn test_blank_password_makes_no_call() {
        let api = answering(LoginResult::Token("abc".into()));
        let store = store();
        let dialogs = FakeDialogs::default();

        assert_eq!(login(&api, &store, LoginKind::Admin, "admin", "   ", &dialogs).await, None);
        assert_eq!(login(&api, &store, LoginKind::Patient, "p@b.c", "\t", &dialogs).await, None);
        assert!(api.calls().is_empty());
        assert_eq!(store.load(), Session::default());
        assert_eq!(
            dialogs.alerts(),
            vec![
                "Please enter both username and password.",
                "Please enter both email and password.",
            ]
        );
    }

    struct RefusingStorage;

    impl KeyValueStore for RefusingStorage {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }
        fn set(&self, _key: &str, _value: &str) {}
        fn remove(&self, _key: &str) {}
    }

    #[tokio::test]
    async fn test_unsaved_session_fails_login() {
        let api = answering(LoginResult::Token("abc".into()));
        let store = SessionStore::new(RefusingStorage);
        let dialogs = FakeDialogs::default();

        assert_eq!(login(&api, &store, LoginKind::Doctor, "d@c.org", "pw", &dialogs).await, None);
        assert_eq!(api.calls(), vec!["login_doctor d@c.org"]);
        assert_eq!(dialogs.alerts(), vec![LOGIN_NOT_SAVED]);
    }

    #[tokio::test]
    async fn test_failures_alert_and_leave_session() {
        for (result, message) in [
            (LoginResult::Rejected, "Invalid credentials!"),
            (LoginResult::MissingToken, "Login failed. Token not received."),
            (
                LoginResult::Failed,
                "An error occurred during login. Please try again.",
            ),
        ] {
            let api = answering(result);
            let store = store();
            let dialogs = FakeDialogs::default();

            assert_eq!(
                login(&api, &store, LoginKind::Doctor, "d@clinic.org", "pw", &dialogs).await,
                None
            );
            assert_eq!(dialogs.alerts(), vec![message]);
            assert_eq!(store.load(), Session::default());
        }
    }

    #[test]
    fn test_select_role() {
        let store = store();
        assert_eq!(select_role(&store, Role::Patient), "/patient");
        assert_eq!(store.load().role, Role::Patient);
    }
}
