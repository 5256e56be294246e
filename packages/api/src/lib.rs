//! # API crate: REST client for the Hospital CMS backend
//!
//! Everything the web client knows about the backend lives here: the wire
//! models, the endpoint URLs and the client that calls them.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Doctors, appointments, patients, credentials and the normalised results (`ActionResult`, `LoginResult`) |
//! | [`routes`] | [`Endpoints`]: builds every URL from the configured origin, including the `"null"` filter placeholder |
//! | [`client`] | [`ClinicApi`] trait and its `reqwest` implementation [`HttpClient`] |
//! | [`error`] | [`ApiError`], the internal failure type normalised away by the client |
//!
//! ## Error policy
//!
//! No public client method returns a `Result`. Transport failures and non-success
//! statuses are logged through `tracing` and turned into an empty list, `None`,
//! or a failed [`ActionResult`], so callers only decide what to show the user.

pub mod client;
pub mod error;
pub mod models;
pub mod routes;

pub use client::{ClinicApi, HttpClient};
pub use error::ApiError;
pub use models::*;
pub use routes::{Endpoints, NO_FILTER};
