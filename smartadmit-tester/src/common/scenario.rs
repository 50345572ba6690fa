use anyhow::{Context, Result};
use thirtyfour::prelude::*;

use crate::browser::TestBridge;
use crate::logic::WizardScript;

pub mod catalog;
pub mod guard;
pub mod smoke;
pub mod walkthrough;

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub base_url: String,
    pub bridge: TestBridge<'a>,
    pub verbose: bool,
}

// Logic test scenario
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub script: WizardScript,
}

impl TestScenario {
    #[must_use]
    pub fn new(name: impl Into<String>, script: WizardScript) -> Self {
        Self {
            name: name.into(),
            script,
        }
    }
}

// Browser test scenario
#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()>;

    /// Scenarios that only script the core return `false` and are skipped in browser mode.
    fn drives_browser(&self) -> bool {
        true
    }
}

// Combined scenario that can run both logic and browser tests
pub trait CombinedScenario: BrowserScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario>;
}

/// A catalog script with no browser counterpart.
#[derive(Clone)]
pub struct ScriptScenario {
    name: &'static str,
    script: fn() -> WizardScript,
}

impl ScriptScenario {
    pub const fn new(name: &'static str, script: fn() -> WizardScript) -> Self {
        Self { name, script }
    }
}

#[async_trait::async_trait]
impl BrowserScenario for ScriptScenario {
    async fn run_browser(&self, _driver: &WebDriver, _ctx: &ScenarioCtx<'_>) -> Result<()> {
        anyhow::bail!("{} has no browser script", self.name)
    }

    fn drives_browser(&self) -> bool {
        false
    }
}

impl CombinedScenario for ScriptScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(self.name, (self.script)()))
    }
}

/// Pick `value` in the `<select>` tagged `testid`.
pub(crate) async fn choose(driver: &WebDriver, testid: &str, value: &str) -> Result<()> {
    let css = format!("select[data-testid='{testid}'] option[value='{value}']");
    driver
        .find(By::Css(css))
        .await
        .with_context(|| format!("finding option {value} in {testid}"))?
        .click()
        .await?;
    Ok(())
}

/// Type into the input tagged `testid`, then blur it so the buffered value commits.
pub(crate) async fn type_into(driver: &WebDriver, testid: &str, text: &str) -> Result<()> {
    let css = format!("input[data-testid='{testid}']");
    let input = driver
        .find(By::Css(css))
        .await
        .with_context(|| format!("finding input {testid}"))?;
    input.click().await?;
    input.send_keys(text).await?;
    driver
        .execute("document.activeElement && document.activeElement.blur()", vec![])
        .await?;
    Ok(())
}

pub(crate) async fn click_testid(driver: &WebDriver, testid: &str) -> Result<()> {
    let css = format!("[data-testid='{testid}']");
    driver
        .find(By::Css(css))
        .await
        .with_context(|| format!("finding {testid}"))?
        .click()
        .await?;
    Ok(())
}

type BoxedScenario = Box<dyn CombinedScenario + Send + Sync>;

/// Every scenario key with its display name, in the order `all` runs them.
const SCENARIOS: &[(&str, &str)] = &[
    ("smoke", "Smoke Test"),
    ("happy-path", "Happy Path Walkthrough"),
    ("gating", "Step Gating"),
    ("university-limit", "University Limit"),
    ("hours-clamp", "Extracurricular Hours Clamp"),
    ("sat-hint", "SAT Bounds (Hint)"),
    ("sat-enforce", "SAT Bounds (Enforce)"),
    ("answer-now", "Answer Now Shortcut"),
    ("back-navigation", "Back Navigation"),
    ("restart", "Restart From Results"),
    ("route-guard", "Route Guard"),
];

fn display_name(key: &str) -> &'static str {
    SCENARIOS
        .iter()
        .find_map(|(k, name)| (*k == key).then_some(*name))
        .unwrap_or("Unnamed Scenario")
}

fn script(key: &'static str, script: fn() -> WizardScript) -> Option<BoxedScenario> {
    Some(Box::new(ScriptScenario::new(display_name(key), script)))
}

pub fn get_scenario(name: &str) -> Option<BoxedScenario> {
    match name.to_lowercase().as_str() {
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        "happy-path" | "happy" => Some(Box::new(walkthrough::HappyPathScenario)),
        "route-guard" | "guard" => Some(Box::new(guard::RouteGuardScenario)),
        "gating" => script("gating", catalog::gating_script),
        "university-limit" | "universities" => {
            script("university-limit", catalog::university_limit_script)
        }
        "hours-clamp" | "hours" => script("hours-clamp", catalog::hours_clamp_script),
        "sat-hint" => script("sat-hint", catalog::sat_hint_script),
        "sat-enforce" => script("sat-enforce", catalog::sat_enforce_script),
        "answer-now" => script("answer-now", catalog::answer_now_script),
        "back-navigation" | "back" => script("back-navigation", catalog::back_navigation_script),
        "restart" | "reset" => script("restart", catalog::restart_script),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.to_vec()
}

pub fn scenario_keys() -> impl Iterator<Item = &'static str> {
    SCENARIOS.iter().map(|(key, _)| *key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_scenario_resolves_with_a_logic_script() {
        for (key, name) in list_scenarios() {
            let scenario = get_scenario(key).unwrap_or_else(|| panic!("{key} missing"));
            let logic = scenario.as_logic_scenario().expect("logic script");
            assert_eq!(logic.name, name);
            assert!(!logic.script.actions.is_empty(), "{key} has no actions");
        }
    }

    #[test]
    fn aliases_and_case_resolve() {
        assert!(get_scenario("SMOKE").is_some());
        assert!(get_scenario("guard").is_some());
        assert!(get_scenario("universities").is_some());
        assert!(get_scenario("campaign").is_none());
    }

    #[test]
    fn only_interactive_scenarios_drive_the_browser() {
        let driven: Vec<&str> = scenario_keys()
            .filter(|key| get_scenario(key).is_some_and(|s| s.drives_browser()))
            .collect();
        assert_eq!(driven, vec!["smoke", "happy-path", "route-guard"]);
    }
}
