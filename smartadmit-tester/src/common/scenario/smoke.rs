use anyhow::Result;
use std::time::Duration;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario, catalog, click_testid};

pub struct SmokeScenario;

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.base_url).await?;
        driver.find(By::Css("[data-testid='landing-page']")).await?;

        ctx.bridge.ensure_available().await?;
        ctx.bridge.wait_for_page("landing").await?;
        if ctx.verbose {
            println!("  🌐 Landing page loaded, bridge connected");
        }

        driver.find(By::Css("a.btn-primary")).await?.click().await?;
        ctx.bridge.wait_for_step("welcome").await?;
        if ctx.verbose {
            println!("  🖱️  Started questionnaire from the landing call to action");
        }

        click_testid(driver, "welcome-start").await?;
        let state = ctx.bridge.wait_for_step("major").await?;
        anyhow::ensure!(state.step == Some(1), "major is step 1, got {:?}", state.step);
        anyhow::ensure!(
            !state.can_advance,
            "an unanswered major should not allow advancing"
        );
        driver.find(By::Css("[data-testid='requirement']")).await?;

        ctx.bridge.advance().await?;
        tokio::time::sleep(Duration::from_millis(200)).await;
        let state = ctx.bridge.state().await?;
        if ctx.verbose {
            println!("  📊 Final state: {state:?}");
        }
        anyhow::ensure!(
            state.on_step("major"),
            "Next should be blocked on the major step, now on {:?}",
            state.step_name
        );

        Ok(())
    }
}

impl CombinedScenario for SmokeScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Smoke Test", catalog::smoke_script()))
    }
}
