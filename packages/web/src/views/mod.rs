mod home;
pub use home::Home;

mod admin_dashboard;
pub use admin_dashboard::AdminDashboard;

mod doctor_dashboard;
pub use doctor_dashboard::DoctorDashboard;

mod patient_dashboard;
pub use patient_dashboard::PatientDashboard;
