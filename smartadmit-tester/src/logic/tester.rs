use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::common::scenario::TestScenario;

/// Failure trail length kept in reports.
const TRAIL_LEN: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
    #[serde(with = "duration_vec_serde")]
    pub performance_data: Vec<Duration>,
}

impl ScenarioResult {
    /// Single-shot result, used for browser runs.
    pub fn single(name: impl Into<String>, duration: Duration, failure: Option<String>) -> Self {
        let passed = failure.is_none();
        Self {
            scenario_name: name.into(),
            passed,
            iterations_run: 1,
            successful_iterations: usize::from(passed),
            failures: failure.into_iter().collect(),
            average_duration: duration,
            performance_data: vec![duration],
        }
    }
}

pub struct LogicTester {
    verbose: bool,
}

impl LogicTester {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn run_scenario(&self, scenario: &TestScenario, iterations: usize) -> ScenarioResult {
        if self.verbose {
            println!(
                "🧪 Testing scenario: {} ({} actions)",
                scenario.name.bright_white(),
                scenario.script.actions.len()
            );
        }

        let mut successes = 0;
        let mut failures = Vec::new();
        if iterations == 0 {
            failures.push("No iterations were run".to_string());
        }
        let mut performance_data = Vec::new();

        for i in 0..iterations {
            let start_time = Instant::now();
            let summary = scenario.script.run();

            if let Some(err) = scenario.script.evaluate(&summary) {
                failures.push(format!(
                    "Iteration {} (final step {}, {} rejected): {} | {}",
                    i + 1,
                    summary.final_step,
                    summary.rejections(),
                    err,
                    summary.trail(TRAIL_LEN)
                ));
                if self.verbose {
                    println!(
                        "  ❌ Iteration {}/{} failed: {}",
                        i + 1,
                        iterations,
                        err.red()
                    );
                }
            } else {
                successes += 1;
                let duration = start_time.elapsed();
                performance_data.push(duration);
                if self.verbose {
                    println!(
                        "  ✅ Iteration {}/{} passed ({duration:?}) final step: {}",
                        i + 1,
                        iterations,
                        summary.final_step
                    );
                }
            }
        }

        let average_duration = if performance_data.is_empty() {
            Duration::ZERO
        } else {
            performance_data.iter().sum::<Duration>()
                / u32::try_from(performance_data.len()).unwrap_or(1)
        };

        ScenarioResult {
            scenario_name: scenario.name.clone(),
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
            performance_data,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u128::deserialize(deserializer)?;
        Ok(Duration::from_millis(u64::try_from(millis).unwrap_or(0)))
    }
}

mod duration_vec_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(durations: &[Duration], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis: Vec<u128> = durations.iter().map(Duration::as_millis).collect();
        millis.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis_vec = Vec::<u128>::deserialize(deserializer)?;
        Ok(millis_vec
            .into_iter()
            .map(|m| Duration::from_millis(u64::try_from(m).unwrap_or(0)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{ScriptAction, ScriptSummary, WizardScript};
    use smartadmit_core::Step;

    fn reaches_major(summary: &ScriptSummary) -> anyhow::Result<()> {
        anyhow::ensure!(summary.final_step == Step::Major, "stuck at {}", summary.final_step);
        Ok(())
    }

    #[test]
    fn passing_script_counts_every_iteration() {
        let scenario = TestScenario::new(
            "Welcome",
            WizardScript::default()
                .with_action(ScriptAction::Advance)
                .with_expectation(reaches_major),
        );
        let result = LogicTester::new(false).run_scenario(&scenario, 3);
        assert!(result.passed);
        assert_eq!(result.iterations_run, 3);
        assert_eq!(result.successful_iterations, 3);
        assert_eq!(result.performance_data.len(), 3);
    }

    #[test]
    fn failing_script_reports_trail() {
        let scenario = TestScenario::new(
            "Stuck",
            WizardScript::default()
                .with_action(ScriptAction::Retreat)
                .with_expectation(reaches_major),
        );
        let result = LogicTester::new(false).run_scenario(&scenario, 2);
        assert!(!result.passed);
        assert_eq!(result.successful_iterations, 0);
        assert_eq!(result.failures.len(), 2);
        assert!(result.failures[0].contains("stuck at welcome"));
        assert!(result.failures[0].contains("[welcome] back -> stayed"));
        assert_eq!(result.average_duration, Duration::ZERO);
    }

    #[test]
    fn zero_iterations_never_pass() {
        let scenario = TestScenario::new(
            "Welcome",
            WizardScript::default()
                .with_action(ScriptAction::Advance)
                .with_expectation(reaches_major),
        );
        let result = LogicTester::new(false).run_scenario(&scenario, 0);
        assert!(!result.passed);
        assert_eq!(result.iterations_run, 0);
        assert_eq!(result.failures, vec!["No iterations were run".to_string()]);
    }

    #[test]
    fn durations_serialize_as_millis() {
        let result = ScenarioResult::single("[chrome] smoke", Duration::from_millis(1500), None);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["average_duration"], 1500);
        assert_eq!(json["performance_data"][0], 1500);

        let back: ScenarioResult = serde_json::from_value(json).unwrap();
        assert_eq!(back.average_duration, Duration::from_millis(1500));
    }

    #[test]
    fn single_failure_marks_result_failed() {
        let result = ScenarioResult::single("x", Duration::ZERO, Some("boom".into()));
        assert!(!result.passed);
        assert_eq!(result.successful_iterations, 0);
        assert_eq!(result.failures, vec!["boom".to_string()]);
    }
}
