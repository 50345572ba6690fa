use anyhow::{Context, Result};
use std::time::Duration;
use thirtyfour::prelude::*;

use super::{
    BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario, catalog, choose, click_testid,
    type_into,
};
use crate::browser::WizardSnapshot;
use crate::common::page_url;

/// Buffered fields commit after a quiet interval, so waits here are longer.
const FORM_WAIT: Duration = Duration::from_secs(8);

pub struct HappyPathScenario;

async fn next(driver: &WebDriver, ctx: &ScenarioCtx<'_>, to: &str) -> Result<WizardSnapshot> {
    click_testid(driver, "wizard-next").await?;
    ctx.bridge
        .wait_for_step(to)
        .await
        .with_context(|| format!("advancing to {to}"))
}

async fn wait_ready(ctx: &ScenarioCtx<'_>, step: &str) -> Result<WizardSnapshot> {
    ctx.bridge
        .clone()
        .with_timeout(FORM_WAIT)
        .wait_for(&format!("{step} answered"), |s| s.on_step(step) && s.can_advance)
        .await
}

#[async_trait::async_trait]
impl BrowserScenario for HappyPathScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(page_url(&ctx.base_url, "/questionnaire")).await?;
        ctx.bridge.ensure_available().await?;
        ctx.bridge.wait_for_step("welcome").await?;
        ctx.bridge.advance().await?;
        ctx.bridge.wait_for_step("major").await?;

        choose(driver, "major-select", "economics").await?;
        wait_ready(ctx, "major").await?;
        next(driver, ctx, "universities").await?;

        choose(driver, "university-select", "harvard").await?;
        wait_ready(ctx, "universities").await?;

        // Back keeps the answer, forward again via the bridge.
        ctx.bridge.back().await?;
        let state = ctx.bridge.wait_for_step("major").await?;
        anyhow::ensure!(
            state.form_field("major").and_then(|v| v.as_str()) == Some("economics"),
            "major lost after going back: {state:?}"
        );
        ctx.bridge.advance().await?;
        ctx.bridge.wait_for_step("universities").await?;
        next(driver, ctx, "sat").await?;

        type_into(driver, "sat-input", "1450").await?;
        ctx.bridge
            .clone()
            .with_timeout(FORM_WAIT)
            .wait_for("SAT committed", |s| {
                s.form_field("satScore").and_then(|v| v.as_str()) == Some("1450")
            })
            .await?;
        next(driver, ctx, "gpa").await?;

        choose(driver, "gpa-scale", "4.0").await?;
        type_into(driver, "gpa-input", "3.8").await?;
        wait_ready(ctx, "gpa").await?;
        next(driver, ctx, "grade-level").await?;

        choose(driver, "grade-select", "senior").await?;
        wait_ready(ctx, "grade-level").await?;
        next(driver, ctx, "extracurricular-hours").await?;
        next(driver, ctx, "extracurricular-types").await?;

        choose(driver, "activity-select", "debate").await?;
        wait_ready(ctx, "extracurricular-types").await?;
        click_testid(driver, "answer-now").await?;
        ctx.bridge.wait_for_step("activity-details").await?;
        if ctx.verbose {
            println!("  📝 Reached activity details via Answer now");
        }

        next(driver, ctx, "results").await?;
        driver
            .find(By::Css("[data-testid='results-score']"))
            .await
            .context("results summary not rendered")?;

        ctx.bridge.reset().await?;
        let state = ctx.bridge.wait_for_step("welcome").await?;
        anyhow::ensure!(
            state.form_field("major").is_none_or(serde_json::Value::is_null),
            "restart should clear answers: {state:?}"
        );
        ctx.bridge.details().await?;
        tokio::time::sleep(Duration::from_millis(200)).await;
        anyhow::ensure!(
            ctx.bridge.state().await?.on_step("welcome"),
            "answer-now must not open details from the welcome screen"
        );

        Ok(())
    }
}

impl CombinedScenario for HappyPathScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(
            "Happy Path Walkthrough",
            catalog::happy_path_script(),
        ))
    }
}
