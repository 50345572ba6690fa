use smartadmit_core::{
    ActivityType, Field, FieldValue, FormData, GuardDecision, RouteGuard, Step, Transition,
    Wizard, WizardConfig,
};
use std::fmt;

/// One user gesture replayed against the wizard controller.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptAction {
    Advance,
    Retreat,
    OpenDetails,
    Reset,
    Update(Field, FieldValue),
    AddUniversity(String),
    RemoveUniversity(usize),
    AddActivity(ActivityType),
    RemoveActivity(usize),
    SetHours(i64),
    /// Ask the route guard about a path; does not touch the wizard.
    Visit(String),
}

impl ScriptAction {
    pub fn update(field: Field, value: impl Into<FieldValue>) -> Self {
        Self::Update(field, value.into())
    }

    pub fn add_university(value: impl Into<String>) -> Self {
        Self::AddUniversity(value.into())
    }

    pub fn visit(path: impl Into<String>) -> Self {
        Self::Visit(path.into())
    }
}

impl fmt::Display for ScriptAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Advance => f.write_str("advance"),
            Self::Retreat => f.write_str("back"),
            Self::OpenDetails => f.write_str("answer-now"),
            Self::Reset => f.write_str("reset"),
            Self::Update(field, value) => write!(f, "set {field}={value:?}"),
            Self::AddUniversity(name) => write!(f, "add university '{name}'"),
            Self::RemoveUniversity(index) => write!(f, "remove university #{index}"),
            Self::AddActivity(kind) => write!(f, "add activity {}", kind.as_str()),
            Self::RemoveActivity(index) => write!(f, "remove activity #{index}"),
            Self::SetHours(hours) => write!(f, "set hours {hours}"),
            Self::Visit(path) => write!(f, "visit {path}"),
        }
    }
}

/// What happened when one action was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Moved(Step),
    Blocked,
    AtEnd,
    Stayed,
    Accepted,
    Rejected(String),
    Clamped(u8),
    Route(GuardDecision),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moved(step) => write!(f, "moved to {step}"),
            Self::Blocked => f.write_str("blocked"),
            Self::AtEnd => f.write_str("at end"),
            Self::Stayed => f.write_str("stayed"),
            Self::Accepted => f.write_str("accepted"),
            Self::Rejected(reason) => write!(f, "rejected ({reason})"),
            Self::Clamped(hours) => write!(f, "stored {hours}"),
            Self::Route(GuardDecision::Pass) => f.write_str("route pass"),
            Self::Route(GuardDecision::Redirect(to)) => write!(f, "redirect to {to}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ActionRecord {
    pub action: ScriptAction,
    pub from: Step,
    pub outcome: Outcome,
}

#[derive(Debug, Clone)]
pub struct ScriptSummary {
    pub final_step: Step,
    pub can_advance: bool,
    pub requirement: Option<&'static str>,
    pub form: FormData,
    pub records: Vec<ActionRecord>,
}

impl ScriptSummary {
    /// Outcomes in order, without the actions that produced them.
    pub fn outcomes(&self) -> impl DoubleEndedIterator<Item = &Outcome> {
        self.records.iter().map(|record| &record.outcome)
    }

    pub fn rejections(&self) -> usize {
        self.outcomes()
            .filter(|outcome| matches!(outcome, Outcome::Rejected(_)))
            .count()
    }

    /// Outcome of the `n`th action (zero-based).
    pub fn outcome(&self, n: usize) -> Option<&Outcome> {
        self.records.get(n).map(|record| &record.outcome)
    }

    /// The last few actions, for failure messages.
    pub fn trail(&self, len: usize) -> String {
        if self.records.is_empty() {
            return "no actions recorded".to_string();
        }
        let skip = self.records.len().saturating_sub(len);
        self.records
            .iter()
            .skip(skip)
            .map(|record| format!("[{}] {} -> {}", record.from, record.action, record.outcome))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

pub type Expectation = fn(&ScriptSummary) -> anyhow::Result<()>;

/// A scripted questionnaire session with the checks its result must pass.
#[derive(Debug, Clone)]
pub struct WizardScript {
    pub config: WizardConfig,
    pub actions: Vec<ScriptAction>,
    pub expectations: Vec<Expectation>,
}

impl WizardScript {
    pub fn new(config: WizardConfig) -> Self {
        Self {
            config,
            actions: Vec::new(),
            expectations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_action(mut self, action: ScriptAction) -> Self {
        self.actions.push(action);
        self
    }

    #[must_use]
    pub fn with_actions(mut self, actions: impl IntoIterator<Item = ScriptAction>) -> Self {
        self.actions.extend(actions);
        self
    }

    #[must_use]
    pub fn with_expectation(mut self, expectation: Expectation) -> Self {
        self.expectations.push(expectation);
        self
    }

    pub fn run(&self) -> ScriptSummary {
        let mut wizard = Wizard::new(self.config);
        let guard = RouteGuard::default();
        let records = self
            .actions
            .iter()
            .map(|action| {
                let from = wizard.step();
                let outcome = apply(&mut wizard, &guard, action);
                log::trace!("[{from}] {action} -> {outcome}");
                ActionRecord {
                    action: action.clone(),
                    from,
                    outcome,
                }
            })
            .collect();

        ScriptSummary {
            final_step: wizard.step(),
            can_advance: wizard.can_advance(),
            requirement: wizard.requirement(),
            form: wizard.form().clone(),
            records,
        }
    }

    /// First failing expectation, if any.
    pub fn evaluate(&self, summary: &ScriptSummary) -> Option<String> {
        self.expectations
            .iter()
            .find_map(|expectation| expectation(summary).err())
            .map(|err| err.to_string())
    }
}

impl Default for WizardScript {
    fn default() -> Self {
        Self::new(WizardConfig::default())
    }
}

fn transition_outcome(transition: Transition) -> Outcome {
    match transition {
        Transition::Advanced { to, .. } => Outcome::Moved(to),
        Transition::Blocked { .. } => Outcome::Blocked,
        Transition::AtEnd => Outcome::AtEnd,
    }
}

fn apply(wizard: &mut Wizard, guard: &RouteGuard, action: &ScriptAction) -> Outcome {
    match action {
        ScriptAction::Advance => transition_outcome(wizard.advance()),
        ScriptAction::OpenDetails => transition_outcome(wizard.open_details()),
        ScriptAction::Retreat => wizard.retreat().map_or(Outcome::Stayed, Outcome::Moved),
        ScriptAction::Reset => {
            wizard.reset();
            Outcome::Moved(wizard.step())
        }
        ScriptAction::Update(field, value) => match wizard.update(*field, value.clone()) {
            Ok(()) => Outcome::Accepted,
            Err(err) => Outcome::Rejected(err.to_string()),
        },
        ScriptAction::AddUniversity(name) => match wizard.add_university(name) {
            Ok(_) => Outcome::Accepted,
            Err(err) => Outcome::Rejected(err.to_string()),
        },
        ScriptAction::RemoveUniversity(index) => wizard
            .remove_university(*index)
            .map_or(Outcome::Stayed, |_| Outcome::Accepted),
        ScriptAction::AddActivity(kind) => {
            if wizard.add_activity_type(*kind) {
                Outcome::Accepted
            } else {
                Outcome::Stayed
            }
        }
        ScriptAction::RemoveActivity(index) => wizard
            .remove_activity_type(*index)
            .map_or(Outcome::Stayed, |_| Outcome::Accepted),
        ScriptAction::SetHours(raw) => Outcome::Clamped(wizard.set_extracurricular_hours(*raw)),
        ScriptAction::Visit(path) => Outcome::Route(guard.check(path)),
    }
}
