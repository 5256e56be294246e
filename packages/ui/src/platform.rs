//! Browser glue with native fallbacks: navigation, blocking dialogs, today's date.

use chrono::NaiveDate;

/// Blocking user prompts. Controllers take this instead of calling the browser
/// directly so they can be driven from tests.
pub trait Dialogs {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
}

/// `window.alert` / `window.confirm`. Natively alerts are logged and
/// confirmations are declined.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn alert(&self, message: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.alert_with_message(message) {
                    tracing::error!("Failed to show alert {message:?}: {e:?}");
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        tracing::warn!("alert: {message}");
    }

    fn confirm(&self, message: &str) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window()
                .and_then(|w| w.confirm_with_message(message).ok())
                .unwrap_or(false)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::warn!("confirm declined: {message}");
            false
        }
    }
}

/// Full page navigation, used where the whole app must restart from a path
/// (logout, expired session).
pub fn navigate_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                tracing::error!("Failed to navigate to {path}: {e:?}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!("navigate to {path}");
}

/// The current local date.
pub fn today() -> NaiveDate {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new_0();
        NaiveDate::from_ymd_opt(
            date.get_full_year() as i32,
            date.get_month() + 1,
            date.get_date(),
        )
        .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        chrono::Local::now().date_naive()
    }
}

/// `YYYY-MM-DD`, the format of `<input type="date">`.
pub fn date_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
