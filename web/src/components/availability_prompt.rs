use leptos::prelude::*;
use leptos::task::spawn_local;
use thiserror::Error;

use crate::components::prompt::Prompt;

/// Relative endpoint queried for availability data. The handler behind it
/// belongs to the reservation backend.
pub const AVAILABILITY_ENDPOINT: &str = "/search-availability-json";

/// Failure modes of the availability lookup.
#[derive(Debug, Error)]
pub enum AvailabilityError {
    #[error("request to {AVAILABILITY_ENDPOINT} failed: {0}")]
    Fetch(String),
    #[error("availability response was not valid JSON: {0}")]
    Parse(String),
}

/// Button that queries the availability endpoint on demand and logs the
/// JSON payload to the browser console.
///
/// Every click launches its own request; overlapping lookups are neither
/// deduplicated nor cancelled and log in whatever order they resolve.
#[component]
pub fn AvailabilityPrompt() -> impl IntoView {
    let prompt = Prompt::new();

    let on_click = move |_| {
        let prompt = prompt.clone();
        spawn_local(async move {
            check_availability(prompt).await;
        });
    };

    view! {
        <button id="btnPrompt" class="btn-primary" on:click=on_click>
            "Check Availability"
        </button>
    }
}

#[cfg(feature = "hydrate")]
async fn check_availability(prompt: Prompt) {
    use crate::components::prompt::{ToastConfig, ToastIcon};

    match fetch_availability_json().await {
        // The payload stays opaque: logged, never deserialized.
        Ok(data) => web_sys::console::log_1(&data),
        Err(err) => {
            leptos::logging::error!("availability lookup failed: {err}");
            prompt.toast(ToastConfig {
                msg: "Unable to check availability right now".into(),
                icon: ToastIcon::Error,
                ..Default::default()
            });
        }
    }
}

#[cfg(not(feature = "hydrate"))]
async fn check_availability(_prompt: Prompt) {}

#[cfg(feature = "hydrate")]
async fn fetch_availability_json() -> Result<wasm_bindgen::JsValue, AvailabilityError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let window =
        web_sys::window().ok_or_else(|| AvailabilityError::Fetch("no window".into()))?;
    let response = JsFuture::from(window.fetch_with_str(AVAILABILITY_ENDPOINT))
        .await
        .map_err(|err| AvailabilityError::Fetch(format!("{err:?}")))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|err| AvailabilityError::Fetch(format!("{err:?}")))?;
    let body = response
        .json()
        .map_err(|err| AvailabilityError::Parse(format!("{err:?}")))?;
    JsFuture::from(body)
        .await
        .map_err(|err| AvailabilityError::Parse(format!("{err:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_errors_name_the_endpoint() {
        let err = AvailabilityError::Fetch("connection refused".into());
        assert_eq!(
            err.to_string(),
            "request to /search-availability-json failed: connection refused"
        );
    }

    #[test]
    fn parse_errors_read_as_parse_errors() {
        let err = AvailabilityError::Parse("unexpected token".into());
        assert_eq!(
            err.to_string(),
            "availability response was not valid JSON: unexpected token"
        );
    }
}
