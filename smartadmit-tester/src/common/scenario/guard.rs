use anyhow::Result;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario, catalog};
use crate::common::page_url;

const UNKNOWN_PATHS: [&str; 3] = ["/admin", "/404", "/questionnaire/extra"];

pub struct RouteGuardScenario;

#[async_trait::async_trait]
impl BrowserScenario for RouteGuardScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(page_url(&ctx.base_url, "/questionnaire")).await?;
        ctx.bridge.ensure_available().await?;
        ctx.bridge.wait_for_step("welcome").await?;

        for path in UNKNOWN_PATHS {
            driver.goto(page_url(&ctx.base_url, path)).await?;
            ctx.bridge.wait_for_page("landing").await?;
            let url = driver.current_url().await?;
            anyhow::ensure!(
                !url.path().ends_with(path),
                "{path} should have been replaced by home, still at {url}"
            );
            anyhow::ensure!(
                driver.find_all(By::Css("[data-testid='not-found']")).await?.is_empty(),
                "{path} rendered the not-found page"
            );
            if ctx.verbose {
                println!("  🛡️  {path} redirected to {url}");
            }
        }

        Ok(())
    }
}

impl CombinedScenario for RouteGuardScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Route Guard", catalog::route_guard_script()))
    }
}
