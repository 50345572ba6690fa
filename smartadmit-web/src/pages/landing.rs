use crate::components::brand::Brand;
use crate::dom;
use crate::i18n::t;
use crate::router::Route;
use smartadmit_core::DemoResponse;
use smartadmit_core::constants::DEMO_ENDPOINT;
use thiserror::Error;
use wasm_bindgen_futures::JsFuture;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Error)]
pub enum DemoLoadError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("Response was not valid UTF-8")]
    Utf8,
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fetch the demo greeting. Purely informational; callers only log failures.
///
/// # Errors
/// Returns [`DemoLoadError`] when the request fails, the server answers with a
/// non-success status, or the body is not the expected JSON.
#[allow(clippy::future_not_send)]
pub async fn load_demo() -> Result<DemoResponse, DemoLoadError> {
    let response = dom::fetch_response(DEMO_ENDPOINT)
        .await
        .map_err(|err| DemoLoadError::Request(dom::js_error_message(&err)))?;

    if !response.ok() {
        return Err(DemoLoadError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    let text_js = JsFuture::from(
        response
            .text()
            .map_err(|err| DemoLoadError::Request(dom::js_error_message(&err)))?,
    )
    .await
    .map_err(|err| DemoLoadError::Request(dom::js_error_message(&err)))?;

    let text = text_js.as_string().ok_or(DemoLoadError::Utf8)?;
    Ok(DemoResponse::from_json(&text)?)
}

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let message = use_state(String::new);

    {
        let message = message.clone();
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                match load_demo().await {
                    Ok(demo) => message.set(demo.message),
                    Err(err) => {
                        log::warn!("demo endpoint unavailable: {err}");
                        dom::console_error(&format!("Failed to load demo message: {err}"));
                    }
                }
            });
        });
    }

    html! {
        <main class="landing" data-testid="landing-page">
            <Brand />
            <h1>{ t("landing.title") }</h1>
            <p class="landing-description">{ t("landing.description") }</p>
            <Link<Route> to={Route::Questionnaire} classes="btn-primary">
                { t("landing.start") }
            </Link<Route>>
            <p class="landing-duration">{ t("landing.duration") }</p>
            <p hidden={true} data-testid="demo-message">{ (*message).clone() }</p>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_errors_read_well() {
        let status = DemoLoadError::Status {
            status: 503,
            status_text: "Service Unavailable".into(),
        };
        assert_eq!(status.to_string(), "HTTP 503: Service Unavailable");
        let parse = DemoLoadError::from(serde_json::from_str::<DemoResponse>("{}").unwrap_err());
        assert!(parse.to_string().starts_with("JSON parsing error"));
        assert_eq!(DemoLoadError::Utf8.to_string(), "Response was not valid UTF-8");
    }
}
