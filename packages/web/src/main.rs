use dioxus::prelude::*;

use store::ClinicConfig;
use ui::{ClinicContext, ClinicProvider, SessionProvider};
use views::{AdminDashboard, DoctorDashboard, Home, PatientDashboard};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/admin")]
    AdminDashboard {},
    #[route("/doctor")]
    DoctorDashboard {},
    #[route("/patient")]
    PatientDashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Embedded client configuration; `CLINIC_API_BASE_URL` at build time
/// overrides its backend origin.
const CLINIC_TOML: &str = include_str!("../clinic.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> ClinicConfig {
    let config = ClinicConfig::from_toml(CLINIC_TOML).unwrap_or_else(|e| {
        tracing::error!("Invalid {}: {e}, using defaults", ClinicConfig::filename());
        ClinicConfig::default()
    });
    match config.clone().with_base_url_override(option_env!("CLINIC_API_BASE_URL")) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Ignoring CLINIC_API_BASE_URL: {e}");
            config
        }
    }
}

#[component]
fn App() -> Element {
    let context = use_hook(|| {
        let config = load_config();
        tracing::info!("Using backend at {}", config.api.base_url);
        ClinicContext::new(config).expect("Failed to create API client")
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ClinicProvider {
            context,
            SessionProvider {
                Router::<Route> {}
            }
        }
    }
}
