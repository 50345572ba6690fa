//! Fixed content of the results screen.
//!
//! The summary is a literal document shipped with the app; nothing here is
//! computed from the applicant's answers.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_RESULTS_DATA: &str =
    include_str!("../../smartadmit-web/static/assets/data/results.json");

#[derive(Debug, Error)]
pub enum ResultsLoadError {
    #[error("results document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("results score {0} exceeds 100")]
    ScoreOutOfRange(u8),
}

/// How the applicant compares on one metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    InRange,
    BelowRange,
    AboveRange,
    Bonus,
}

impl Verdict {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InRange => "In the range",
            Self::BelowRange => "Below recommended range",
            Self::AboveRange => "Above recommended range",
            Self::Bonus => "Bonus advantage",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InRange => "in-range",
            Self::BelowRange => "below-range",
            Self::AboveRange => "above-range",
            Self::Bonus => "bonus",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramMatch {
    pub name: String,
    pub logo: String,
    pub chance: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub metric: String,
    pub yours: String,
    pub admitted: String,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Green,
    Yellow,
    Blue,
}

impl Tone {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextStep {
    pub number: String,
    pub title: String,
    pub description: String,
    pub action: String,
    #[serde(default)]
    pub tone: Tone,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultsSummary {
    pub score: u8,
    pub percentile: u8,
    pub profile_label: String,
    pub matches: Vec<ProgramMatch>,
    pub comparison: Vec<ComparisonRow>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub next_steps: Vec<NextStep>,
}

impl ResultsSummary {
    /// Parse a results document.
    ///
    /// # Errors
    ///
    /// Returns [`ResultsLoadError`] for malformed JSON or a score above 100.
    pub fn from_json(json: &str) -> Result<Self, ResultsLoadError> {
        let summary: Self = serde_json::from_str(json)?;
        if summary.score > 100 {
            return Err(ResultsLoadError::ScoreOutOfRange(summary.score));
        }
        Ok(summary)
    }

    /// Load the bundled document, falling back to an empty summary.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_RESULTS_DATA).unwrap_or_else(|err| {
            log::error!("failed to load bundled results: {err}");
            Self::default()
        })
    }
}

#[must_use]
pub fn summary() -> &'static ResultsSummary {
    static SUMMARY: Lazy<ResultsSummary> = Lazy::new(ResultsSummary::load_from_static);
    &SUMMARY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_summary_has_fixed_literals() {
        let results = summary();
        assert_eq!(results.score, 82);
        assert_eq!(results.percentile, 48);
        assert_eq!(results.profile_label, "Strong profile");
        assert_eq!(results.matches.len(), 4);
        assert!(results.matches.iter().all(|m| m.chance == 84));
        assert_eq!(results.comparison.len(), 5);
        assert_eq!(results.strengths.len(), 3);
        assert_eq!(results.improvements.len(), 2);
        assert_eq!(results.next_steps.len(), 3);
        assert_eq!(results.next_steps[2].action, "Set up your planner");
        assert_eq!(results.next_steps[1].tone, Tone::Yellow);
    }

    #[test]
    fn comparison_verdicts_map_to_labels() {
        let sat = summary()
            .comparison
            .iter()
            .find(|row| row.metric == "SAT")
            .unwrap();
        assert_eq!(sat.verdict, Verdict::BelowRange);
        assert_eq!(sat.verdict.label(), "Below recommended range");
    }

    #[test]
    fn malformed_documents_are_rejected() {
        assert!(matches!(
            ResultsSummary::from_json("{"),
            Err(ResultsLoadError::Parse(_))
        ));
        assert!(matches!(
            ResultsSummary::from_json(r#"{"score": 140}"#),
            Err(ResultsLoadError::ScoreOutOfRange(140))
        ));
        let sparse = ResultsSummary::from_json(r#"{"score": 10}"#).unwrap();
        assert!(sparse.matches.is_empty());
    }
}
