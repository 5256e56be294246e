//! Page paths shared by components and the router.

use store::Role;

pub const ENTRY: &str = "/";
pub const ADMIN_DASHBOARD: &str = "/admin";
pub const DOCTOR_DASHBOARD: &str = "/doctor";
pub const PATIENT_DASHBOARD: &str = "/patient";
/// Served by the patient portal, outside this client.
pub const PATIENT_APPOINTMENTS: &str = "/patient/appointments";

/// Where a role lands after selecting it or logging in.
pub fn landing(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_DASHBOARD,
        Role::Doctor => DOCTOR_DASHBOARD,
        Role::Patient | Role::LoggedPatient => PATIENT_DASHBOARD,
        Role::Anonymous => ENTRY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_paths() {
        assert_eq!(landing(Role::Admin), "/admin");
        assert_eq!(landing(Role::Doctor), "/doctor");
        assert_eq!(landing(Role::Patient), "/patient");
        assert_eq!(landing(Role::LoggedPatient), "/patient");
        assert_eq!(landing(Role::Anonymous), "/");
    }
}
