//! App-wide configuration and API client, provided through context.

use api::HttpClient;
use dioxus::prelude::*;
use store::ClinicConfig;

/// Everything pages need that is fixed for the app's lifetime.
#[derive(Clone, Debug)]
pub struct ClinicContext {
    pub config: ClinicConfig,
    pub api: HttpClient,
}

impl ClinicContext {
    pub fn new(config: ClinicConfig) -> Result<Self, api::ApiError> {
        let api = HttpClient::from_config(&config)?;
        Ok(Self { config, api })
    }
}

impl PartialEq for ClinicContext {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config && self.api.endpoints() == other.api.endpoints()
    }
}

#[component]
pub fn ClinicProvider(context: ClinicContext, children: Element) -> Element {
    use_context_provider(|| context);

    rsx! {
        {children}
    }
}

pub fn use_api() -> HttpClient {
    use_context::<ClinicContext>().api
}

pub fn use_config() -> ClinicConfig {
    use_context::<ClinicContext>().config
}
