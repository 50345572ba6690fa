use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{Duration, Instant};
use thirtyfour::prelude::*;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("__smartadmitTest is not available. Did you pass ?test=1 in the base URL?")]
    Unavailable,
    #[error("timed out after {waited:?} waiting for {what}; last state: {last:?}")]
    Timeout {
        what: String,
        waited: Duration,
        last: Box<WizardSnapshot>,
    },
}

/// Mirror of what `window.__smartadmitTest.state()` returns.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct WizardSnapshot {
    pub page: String,
    pub step: Option<u8>,
    pub step_name: Option<String>,
    pub can_advance: bool,
    pub form: Option<Value>,
}

impl WizardSnapshot {
    pub fn on_step(&self, name: &str) -> bool {
        self.page == "questionnaire" && self.step_name.as_deref() == Some(name)
    }

    /// A camelCase field out of the reported answers.
    pub fn form_field(&self, key: &str) -> Option<&Value> {
        self.form.as_ref().and_then(|form| form.get(key))
    }
}

#[derive(Debug, Clone)]
pub struct TestBridge<'a> {
    driver: &'a WebDriver,
    timeout: Duration,
}

impl<'a> TestBridge<'a> {
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self {
            driver,
            timeout: Duration::from_secs(5),
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub async fn ensure_available(&self) -> Result<()> {
        let result = self
            .driver
            .execute("return !!window.__smartadmitTest", vec![])
            .await?;
        if !result.json().as_bool().unwrap_or(false) {
            return Err(BridgeError::Unavailable.into());
        }
        Ok(())
    }

    async fn call(&self, method: &str) -> Result<bool> {
        let script = format!("return window.__smartadmitTest.{method}()");
        let result = self
            .driver
            .execute(script, vec![])
            .await
            .with_context(|| format!("calling bridge {method}()"))?;
        Ok(result.json().as_bool().unwrap_or(false))
    }

    /// Press "Next"; `false` when no questionnaire is mounted.
    pub async fn advance(&self) -> Result<bool> {
        self.call("advance").await
    }

    pub async fn back(&self) -> Result<bool> {
        self.call("back").await
    }

    pub async fn details(&self) -> Result<bool> {
        self.call("details").await
    }

    pub async fn reset(&self) -> Result<bool> {
        self.call("reset").await
    }

    pub async fn state(&self) -> Result<WizardSnapshot> {
        let result = self
            .driver
            .execute("return window.__smartadmitTest.state()", vec![])
            .await?;
        let v = result.json().clone();
        serde_json::from_value(v).context("parsing wizard snapshot")
    }

    /// Poll `state()` until `pred` holds; renders land asynchronously after each action.
    pub async fn wait_for(
        &self,
        what: &str,
        pred: impl Fn(&WizardSnapshot) -> bool,
    ) -> Result<WizardSnapshot> {
        let start = Instant::now();
        loop {
            let snapshot = self.state().await?;
            if pred(&snapshot) {
                return Ok(snapshot);
            }
            if start.elapsed() >= self.timeout {
                return Err(BridgeError::Timeout {
                    what: what.to_string(),
                    waited: start.elapsed(),
                    last: Box::new(snapshot),
                }
                .into());
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    pub async fn wait_for_step(&self, name: &str) -> Result<WizardSnapshot> {
        self.wait_for(&format!("step '{name}'"), |s| s.on_step(name))
            .await
    }

    pub async fn wait_for_page(&self, page: &str) -> Result<WizardSnapshot> {
        self.wait_for(&format!("page '{page}'"), |s| s.page == page)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn snapshot_parses_bridge_payload() {
        let payload = json!({
            "page": "questionnaire",
            "step": 3,
            "step_name": "sat",
            "can_advance": true,
            "form": { "major": "economics", "universities": ["Harvard University"] }
        });
        let snapshot: WizardSnapshot = serde_json::from_value(payload).unwrap();
        assert!(snapshot.on_step("sat"));
        assert!(!snapshot.on_step("gpa"));
        assert_eq!(snapshot.form_field("major"), Some(&json!("economics")));
        assert_eq!(snapshot.form_field("satScore"), None);
    }

    #[test]
    fn landing_snapshot_has_no_step() {
        let payload = json!({
            "page": "landing",
            "step": null,
            "step_name": null,
            "can_advance": false,
            "form": null
        });
        let snapshot: WizardSnapshot = serde_json::from_value(payload).unwrap();
        assert_eq!(snapshot.page, "landing");
        assert!(!snapshot.on_step("welcome"));
        assert!(snapshot.form_field("major").is_none());
    }

    #[test]
    fn timeout_message_names_the_wait() {
        let err = BridgeError::Timeout {
            what: "step 'major'".into(),
            waited: Duration::from_millis(5),
            last: Box::default(),
        };
        assert!(err.to_string().contains("waiting for step 'major'"));
    }
}
