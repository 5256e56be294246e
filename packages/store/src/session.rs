//! # Session: the persisted (role, token) pair
//!
//! Every page of the client depends on two flat strings kept in a
//! [`KeyValueStore`]: `userRole` and `token`. This module gives them a type.
//!
//! ## Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Role`] | Who the visitor is acting as. `Anonymous` is the absence of a stored role. |
//! | [`Session`] | A snapshot of role + token. |
//! | [`SessionStore`] | Typed reads/writes over the two keys, plus [`SessionStore::validate`]. |
//!
//! ## Invariant
//!
//! `Admin`, `Doctor` and `LoggedPatient` are authenticated roles and require a
//! token. [`SessionStore::validate`] is the only place that enforces this: a
//! violating session has its role removed and is reported as
//! [`SessionError::MissingToken`], after which callers send the user back to
//! the entry page.

use std::fmt;
use std::str::FromStr;

use crate::storage::KeyValueStore;

/// Storage key holding the role string.
pub const ROLE_KEY: &str = "userRole";
/// Storage key holding the opaque credential.
pub const TOKEN_KEY: &str = "token";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Doctor,
    /// A patient browsing without logging in.
    Patient,
    LoggedPatient,
    #[default]
    Anonymous,
}

impl Role {
    /// The persisted spelling, or `None` for [`Role::Anonymous`].
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            Role::Admin => Some("admin"),
            Role::Doctor => Some("doctor"),
            Role::Patient => Some("patient"),
            Role::LoggedPatient => Some("loggedPatient"),
            Role::Anonymous => None,
        }
    }

    /// Whether this role is only meaningful together with a token.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Role::Admin | Role::Doctor | Role::LoggedPatient)
    }

    /// Lenient parse used when reading storage: unknown values are anonymous.
    pub fn from_stored(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.parse().ok())
            .unwrap_or(Role::Anonymous)
    }
}

impl FromStr for Role {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "doctor" => Ok(Role::Doctor),
            "patient" => Ok(Role::Patient),
            "loggedPatient" => Ok(Role::LoggedPatient),
            other => Err(SessionError::UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or("anonymous"))
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SessionError {
    #[error("role {0} requires a token but none is stored")]
    MissingToken(Role),
    #[error("unknown role: {0}")]
    UnknownRole(String),
    #[error("storage did not keep the {0} session")]
    NotPersisted(Role),
}

/// Snapshot of the persisted session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub role: Role,
    pub token: Option<String>,
}

impl Session {
    pub fn new(role: Role, token: Option<String>) -> Self {
        Self { role, token }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// True unless an authenticated role is missing its token.
    pub fn is_valid(&self) -> bool {
        !self.role.is_authenticated() || self.token().is_some()
    }
}

/// Typed access to the session keys of a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the current session without checking it.
    pub fn load(&self) -> Session {
        let role = Role::from_stored(self.storage.get(ROLE_KEY).as_deref());
        let token = self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty());
        Session { role, token }
    }

    pub fn set_role(&self, role: Role) {
        match role.as_str() {
            Some(value) => self.storage.set(ROLE_KEY, value),
            None => self.storage.remove(ROLE_KEY),
        }
    }

    pub fn set_token(&self, token: &str) {
        self.storage.set(TOKEN_KEY, token);
    }

    /// Persist a successful login and read it back.
    ///
    /// A storage area that refuses the write is left without a role.
    pub fn login(&self, role: Role, token: &str) -> Result<Session, SessionError> {
        self.set_token(token);
        self.set_role(role);
        let session = self.load();
        if session.role == role && session.token() == Some(token) {
            Ok(session)
        } else {
            self.storage.remove(ROLE_KEY);
            Err(SessionError::NotPersisted(role))
        }
    }

    /// Remove both keys. Idempotent.
    pub fn clear(&self) {
        self.storage.remove(ROLE_KEY);
        self.storage.remove(TOKEN_KEY);
    }

    /// Admin and doctor logout.
    pub fn logout(&self) {
        self.clear();
    }

    /// Patient logout drops the token but keeps browsing as a patient.
    pub fn logout_patient(&self) {
        self.storage.remove(TOKEN_KEY);
        self.set_role(Role::Patient);
    }

    /// Load the session and enforce the role-implies-token invariant.
    ///
    /// On violation the stored role is removed before returning the error.
    pub fn validate(&self) -> Result<Session, SessionError> {
        let session = self.load();
        if session.is_valid() {
            Ok(session)
        } else {
            self.storage.remove(ROLE_KEY);
            Err(SessionError::MissingToken(session.role))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;

    fn store() -> SessionStore<MemoryStorage> {
        SessionStore::new(MemoryStorage::new())
    }

    #[test]
    fn test_role_strings() {
        for role in [Role::Admin, Role::Doctor, Role::Patient, Role::LoggedPatient] {
            let stored = role.as_str().unwrap();
            assert_eq!(stored.parse::<Role>().unwrap(), role);
        }
        assert_eq!(Role::Anonymous.as_str(), None);
        assert_eq!(Role::from_stored(Some("superuser")), Role::Anonymous);
        assert_eq!(Role::from_stored(None), Role::Anonymous);
        assert!(matches!(
            "nurse".parse::<Role>(),
            Err(SessionError::UnknownRole(r)) if r == "nurse"
        ));
    }

    #[test]
    fn test_login_persists_both_keys() {
        let store = store();
        store.login(Role::Admin, "tok").unwrap();
        assert_eq!(store.storage().get(ROLE_KEY).as_deref(), Some("admin"));
        assert_eq!(store.storage().get(TOKEN_KEY).as_deref(), Some("tok"));
        assert_eq!(
            store.load(),
            Session::new(Role::Admin, Some("tok".to_string()))
        );
    }

    #[test]
    fn test_validate_clears_role_without_token() {
        for role in [Role::Admin, Role::Doctor, Role::LoggedPatient] {
            let store = store();
            store.set_role(role);

            assert_eq!(store.validate(), Err(SessionError::MissingToken(role)));
            assert!(store.storage().get(ROLE_KEY).is_none());
            assert_eq!(store.load().role, Role::Anonymous);
        }
    }

    #[test]
    fn test_validate_accepts_unauthenticated_roles() {
        let store = store();
        assert_eq!(store.validate().unwrap().role, Role::Anonymous);

        store.set_role(Role::Patient);
        assert_eq!(store.validate().unwrap().role, Role::Patient);
    }

    #[test]
    fn test_empty_token_counts_as_missing() {
        let store = store();
        assert_eq!(
            store.login(Role::Doctor, ""),
            Err(SessionError::NotPersisted(Role::Doctor))
        );
        assert!(store.validate().is_ok());
        assert_eq!(store.load().role, Role::Anonymous);

        store.set_role(Role::Doctor);
        assert!(store.validate().is_err());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = store();
        store.login(Role::Doctor, "tok").unwrap();
        store.clear();
        let once = store.load();
        store.clear();
        assert_eq!(store.load(), once);
        assert_eq!(once, Session::default());
        assert!(store.storage().is_empty());
    }

    #[test]
    fn test_logout_patient_keeps_patient_role() {
        let store = store();
        store.login(Role::LoggedPatient, "tok").unwrap();
        store.logout_patient();
        assert_eq!(store.load(), Session::new(Role::Patient, None));
    }

    /// Accepts nothing, like a blocked `localStorage`.
    struct RefusingStorage;

    impl KeyValueStore for RefusingStorage {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }
        fn set(&self, _key: &str, _value: &str) {}
        fn remove(&self, _key: &str) {}
    }

    #[test]
    fn test_login_reports_refused_write() {
        let store = SessionStore::new(RefusingStorage);
        assert_eq!(
            store.login(Role::Admin, "tok"),
            Err(SessionError::NotPersisted(Role::Admin))
        );
        assert_eq!(store.load(), Session::default());
    }

    #[test]
    fn test_set_anonymous_removes_role() {
        let store = store();
        store.set_role(Role::Patient);
        store.set_role(Role::Anonymous);
        assert!(store.storage().get(ROLE_KEY).is_none());
    }
}
