mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod login_form;
pub use login_form::LoginForm;

mod add_doctor_form;
pub use add_doctor_form::AddDoctorForm;

mod signup_form;
pub use signup_form::SignupForm;

mod booking_overlay;
pub use booking_overlay::BookingOverlay;
