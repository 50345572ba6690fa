//! Wizard controller: owns the current step and the answers collected so far.
//!
//! All mutation goes through the controller. Advancing is gated by the current
//! step's predicate; a blocked advance is a silent no-op for the UI and is only
//! reported through the returned [`Transition`] and debug logging.

use serde::{Deserialize, Serialize};

use crate::constants::{DEBUG_ENV_VAR, DEFAULT_QUIET_MS, TIMELINE_DOTS};
use crate::form::{Field, FieldValue, FormData, FormError};
use crate::options::ActivityType;
use crate::steps::{BoundsPolicy, Step};

#[cfg(debug_assertions)]
fn debug_log_enabled() -> bool {
    matches!(std::env::var(DEBUG_ENV_VAR), Ok(val) if val != "0")
}

#[cfg(not(debug_assertions))]
const fn debug_log_enabled() -> bool {
    false
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    pub bounds: BoundsPolicy,
    /// Quiet interval before a buffered text field commits.
    pub quiet_ms: u64,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            bounds: BoundsPolicy::Hint,
            quiet_ms: DEFAULT_QUIET_MS,
        }
    }
}

/// Result of an advance attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Advanced { from: Step, to: Step },
    Blocked { step: Step },
    AtEnd,
}

impl Transition {
    #[must_use]
    pub const fn moved(self) -> bool {
        matches!(self, Self::Advanced { .. })
    }
}

/// Label on the primary navigation button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryLabel {
    Next,
    Submit,
}

impl PrimaryLabel {
    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::Next => "wizard.next",
            Self::Submit => "wizard.submit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotState {
    Complete,
    Current,
    Upcoming,
}

/// Progress timeline shown above the question steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    pub active: usize,
}

impl Timeline {
    pub const LEN: usize = TIMELINE_DOTS;

    #[must_use]
    pub const fn dot(self, index: usize) -> DotState {
        if index < self.active {
            DotState::Complete
        } else if index == self.active {
            DotState::Current
        } else {
            DotState::Upcoming
        }
    }

    pub fn dots(self) -> impl Iterator<Item = DotState> {
        (0..Self::LEN).map(move |idx| self.dot(idx))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Wizard {
    step: Step,
    form: FormData,
    config: WizardConfig,
}

impl Wizard {
    #[must_use]
    pub fn new(config: WizardConfig) -> Self {
        Self {
            step: Step::Welcome,
            form: FormData::default(),
            config,
        }
    }

    #[must_use]
    pub const fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub const fn form(&self) -> &FormData {
        &self.form
    }

    #[must_use]
    pub const fn config(&self) -> WizardConfig {
        self.config
    }

    /// Whether the current step's predicate holds.
    #[must_use]
    pub fn is_step_valid(&self) -> bool {
        self.step.is_satisfied(&self.form, self.config.bounds)
    }

    /// State of the primary button: enabled unless on the last step or blocked.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        !self.step.is_terminal() && self.is_step_valid()
    }

    /// Move forward one step. The welcome screen always advances.
    pub fn advance(&mut self) -> Transition {
        let from = self.step;
        let Some(to) = from.next() else {
            return Transition::AtEnd;
        };
        if from != Step::Welcome && !self.is_step_valid() {
            if debug_log_enabled() {
                log::debug!("advance blocked at step {from}");
            }
            return Transition::Blocked { step: from };
        }
        self.step = to;
        if debug_log_enabled() {
            log::debug!("advanced {from} -> {to}");
        }
        Transition::Advanced { from, to }
    }

    /// Move back one step without re-checking anything.
    pub fn retreat(&mut self) -> Option<Step> {
        let prev = self.step.prev()?;
        if debug_log_enabled() {
            log::debug!("retreated {} -> {prev}", self.step);
        }
        self.step = prev;
        Some(prev)
    }

    /// "Answer now" shortcut from the activity-type step into the detail step.
    pub fn open_details(&mut self) -> Transition {
        if self.step != Step::ExtracurricularTypes {
            return Transition::Blocked { step: self.step };
        }
        self.advance()
    }

    pub fn reset(&mut self) {
        self.step = Step::Welcome;
        self.form = FormData::default();
    }

    /// # Errors
    ///
    /// Propagates [`FormError`] from [`FormData::update`]; the form is unchanged.
    pub fn update(&mut self, field: Field, value: FieldValue) -> Result<(), FormError> {
        let result = self.form.update(field, value);
        if let Err(err) = &result
            && debug_log_enabled()
        {
            log::debug!("rejected update: {err}");
        }
        result
    }

    /// # Errors
    ///
    /// See [`FormData::add_university`].
    pub fn add_university(&mut self, value: &str) -> Result<String, FormError> {
        self.form.add_university(value)
    }

    pub fn remove_university(&mut self, index: usize) -> Option<String> {
        self.form.remove_university(index)
    }

    pub fn add_activity_type(&mut self, kind: ActivityType) -> bool {
        self.form.add_activity_type(kind)
    }

    pub fn remove_activity_type(&mut self, index: usize) -> Option<ActivityType> {
        self.form.remove_activity_type(index)
    }

    pub fn set_extracurricular_hours(&mut self, raw: i64) -> u8 {
        self.form.set_extracurricular_hours(raw)
    }

    /// Welcome and results render full-screen without navigation chrome.
    #[must_use]
    pub const fn shows_chrome(&self) -> bool {
        !matches!(self.step, Step::Welcome | Step::Results)
    }

    #[must_use]
    pub const fn shows_back(&self) -> bool {
        self.step.index() > 1
    }

    #[must_use]
    pub const fn primary_label(&self) -> PrimaryLabel {
        if self.step.index() >= Step::ActivityDetails.index() {
            PrimaryLabel::Submit
        } else {
            PrimaryLabel::Next
        }
    }

    /// Progress dots for question steps; `None` on full-screen steps.
    #[must_use]
    pub fn timeline(&self) -> Option<Timeline> {
        if !self.shows_chrome() {
            return None;
        }
        let active = usize::from(self.step.index().saturating_sub(1)).min(TIMELINE_DOTS - 1);
        Some(Timeline { active })
    }

    /// Hint key for the current step's unmet requirement.
    #[must_use]
    pub fn requirement(&self) -> Option<&'static str> {
        if self.is_step_valid() {
            None
        } else {
            self.step.requirement_key()
        }
    }
}
