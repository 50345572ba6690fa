//! Ordered step table and per-step validity predicates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::TOTAL_STEPS;
use crate::form::{FormData, NumericCheck};

/// Whether SAT/GPA bounds gate advancing or are only shown as hints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundsPolicy {
    #[default]
    Hint,
    Enforce,
}

/// One screen of the questionnaire, in presentation order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    #[default]
    Welcome,
    Major,
    Universities,
    Sat,
    Gpa,
    GradeLevel,
    ExtracurricularHours,
    ExtracurricularTypes,
    ActivityDetails,
    Results,
}

impl Step {
    pub const ALL: [Self; TOTAL_STEPS as usize] = [
        Self::Welcome,
        Self::Major,
        Self::Universities,
        Self::Sat,
        Self::Gpa,
        Self::GradeLevel,
        Self::ExtracurricularHours,
        Self::ExtracurricularTypes,
        Self::ActivityDetails,
        Self::Results,
    ];

    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    #[must_use]
    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Results)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Major => "major",
            Self::Universities => "universities",
            Self::Sat => "sat",
            Self::Gpa => "gpa",
            Self::GradeLevel => "grade-level",
            Self::ExtracurricularHours => "extracurricular-hours",
            Self::ExtracurricularTypes => "extracurricular-types",
            Self::ActivityDetails => "activity-details",
            Self::Results => "results",
        }
    }

    /// i18n key of the hint shown while this step's requirement is unmet.
    #[must_use]
    pub const fn requirement_key(self) -> Option<&'static str> {
        match self {
            Self::Major => Some("requirements.major"),
            Self::Universities => Some("requirements.universities"),
            Self::Sat => Some("requirements.sat"),
            Self::Gpa => Some("requirements.gpa"),
            Self::GradeLevel => Some("requirements.grade_level"),
            Self::ExtracurricularTypes => Some("requirements.extracurricular_types"),
            _ => None,
        }
    }

    /// Whether the answers collected so far satisfy this step.
    #[must_use]
    pub fn is_satisfied(self, form: &FormData, bounds: BoundsPolicy) -> bool {
        match self {
            Self::Welcome
            | Self::ExtracurricularHours
            | Self::ActivityDetails
            | Self::Results => true,
            Self::Major => form.major().is_some(),
            Self::Universities => !form.universities().is_empty(),
            Self::Sat => match bounds {
                BoundsPolicy::Hint => true,
                BoundsPolicy::Enforce => form.sat_check().is_acceptable(),
            },
            Self::Gpa => {
                let answered = form.gpa_scale().is_some() && !form.gpa_score().is_empty();
                match bounds {
                    BoundsPolicy::Hint => answered,
                    BoundsPolicy::Enforce => {
                        answered && form.gpa_check() == NumericCheck::InRange
                    }
                }
            }
            Self::GradeLevel => form.grade_level().is_some(),
            Self::ExtracurricularTypes => !form.extracurricular_types().is_empty(),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Step {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|step| step.as_str() == s)
            .ok_or(())
    }
}
