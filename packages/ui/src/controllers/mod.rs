//! Page orchestration, independent of rendering.
//!
//! Each function here is what one user action does: validate input, check the
//! session, make at most one API call, tell the user through [`Dialogs`], and
//! return a view model or outcome for the component to apply.
//!
//! [`Dialogs`]: crate::Dialogs

pub mod admin;
pub mod doctor;
pub mod login;
pub mod patient;

#[cfg(test)]
pub(crate) mod fake;

use thiserror::Error;

/// A form failed its presence checks; nothing was sent.
#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("Please fill all required fields.")]
    MissingFields(Vec<&'static str>),
    #[error("Please select a date and time slot.")]
    NoSlot,
}

/// Names of the `(name, value)` pairs whose trimmed value is empty.
pub(crate) fn missing_fields(fields: &[(&'static str, &str)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}
