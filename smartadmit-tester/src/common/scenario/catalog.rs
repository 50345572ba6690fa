//! Scripted questionnaire sessions replayed in logic mode.

use anyhow::ensure;
use smartadmit_core::{
    ActivityType, BoundsPolicy, Field, FieldValue, FormData, GuardDecision, MAX_EC_HOURS, MAX_UNIVERSITIES,
    Major, Step, WizardConfig,
};

use crate::logic::{Outcome, ScriptAction, ScriptSummary, WizardScript};

const CATALOG_PICKS: [&str; MAX_UNIVERSITIES + 1] =
    ["harvard", "stanford", "mit", "yale", "princeton", "columbia"];

/// Answers that satisfy `step`, followed by "Next".
fn answer(step: Step) -> Vec<ScriptAction> {
    let mut actions = match step {
        Step::Major => vec![ScriptAction::update(Field::Major, "economics")],
        Step::Universities => vec![
            ScriptAction::add_university("harvard"),
            ScriptAction::add_university("Reed College"),
        ],
        Step::Sat => vec![ScriptAction::update(Field::SatScore, "1450")],
        Step::Gpa => vec![
            ScriptAction::update(Field::GpaScale, "4.0"),
            ScriptAction::update(Field::GpaScore, "3.8"),
        ],
        Step::GradeLevel => vec![ScriptAction::update(Field::GradeLevel, "senior")],
        Step::ExtracurricularHours => vec![ScriptAction::SetHours(12)],
        Step::ExtracurricularTypes => vec![ScriptAction::AddActivity(ActivityType::Debate)],
        Step::ActivityDetails => vec![
            ScriptAction::update(Field::ActivityTitle, "Debate Club"),
            ScriptAction::update(Field::ActivityRole, "captain"),
            ScriptAction::update(Field::ActivityDuration, "2-years"),
            ScriptAction::update(Field::ActivityHoursPerWeek, "3-5"),
        ],
        Step::Welcome | Step::Results => Vec::new(),
    };
    actions.push(ScriptAction::Advance);
    actions
}

/// Answer every step from the welcome screen up to (not including) `stop`.
fn walk_to(stop: Step) -> Vec<ScriptAction> {
    Step::ALL
        .iter()
        .copied()
        .take_while(|step| *step < stop)
        .flat_map(answer)
        .collect()
}

fn expect_step(summary: &ScriptSummary, step: Step) -> anyhow::Result<()> {
    ensure!(
        summary.final_step == step,
        "expected to finish on {step}, finished on {}",
        summary.final_step
    );
    Ok(())
}

// smoke ---------------------------------------------------------------------

fn smoke_expectation(summary: &ScriptSummary) -> anyhow::Result<()> {
    expect_step(summary, Step::Major)?;
    ensure!(!summary.can_advance, "major starts unanswered");
    ensure!(
        summary.outcome(1) == Some(&Outcome::Blocked),
        "Next on an unanswered major should be blocked"
    );
    ensure!(
        summary.requirement.is_some(),
        "a blocked step should explain its requirement"
    );
    Ok(())
}

pub fn smoke_script() -> WizardScript {
    WizardScript::default()
        .with_actions([ScriptAction::Advance, ScriptAction::Advance])
        .with_expectation(smoke_expectation)
}

// happy path ------------------------------------------------------------------

fn happy_path_expectation(summary: &ScriptSummary) -> anyhow::Result<()> {
    expect_step(summary, Step::Results)?;
    ensure!(
        summary.rejections() == 0,
        "no answer should be rejected on the happy path"
    );
    ensure!(
        summary.records.last().map(|r| &r.outcome) == Some(&Outcome::AtEnd),
        "Next on the results step should be a no-op"
    );
    let form = &summary.form;
    ensure!(form.major() == Some(Major::Economics), "major not kept");
    ensure!(
        form.universities() == ["Harvard University", "Reed College"],
        "universities not kept: {:?}",
        form.universities()
    );
    ensure!(form.sat_score() == "1450", "SAT not kept");
    ensure!(form.extracurricular_hours() == 12, "hours not kept");
    ensure!(form.activity_title() == "Debate Club", "activity title not kept");
    Ok(())
}

pub fn happy_path_script() -> WizardScript {
    WizardScript::default()
        .with_actions(walk_to(Step::Results))
        .with_action(ScriptAction::Advance)
        .with_expectation(happy_path_expectation)
}

// gating ------------------------------------------------------------------------

/// Each gated step is tried once unanswered, then answered.
fn gating_actions() -> Vec<ScriptAction> {
    let mut actions = Vec::new();
    for step in Step::ALL.iter().copied().take_while(|s| *s < Step::Results) {
        if !step.is_satisfied(&FormData::default(), BoundsPolicy::Hint) {
            actions.push(ScriptAction::Advance);
        }
        actions.extend(answer(step));
    }
    actions
}

fn gating_expectation(summary: &ScriptSummary) -> anyhow::Result<()> {
    expect_step(summary, Step::Results)?;
    let blocked: Vec<Step> = summary
        .records
        .iter()
        .filter(|r| r.outcome == Outcome::Blocked)
        .map(|r| r.from)
        .collect();
    ensure!(
        blocked
            == [
                Step::Major,
                Step::Universities,
                Step::Gpa,
                Step::GradeLevel,
                Step::ExtracurricularTypes,
            ],
        "unexpected gates: {blocked:?}"
    );
    Ok(())
}

pub fn gating_script() -> WizardScript {
    WizardScript::default()
        .with_actions(gating_actions())
        .with_expectation(gating_expectation)
}

// university limit ----------------------------------------------------------------

fn university_limit_expectation(summary: &ScriptSummary) -> anyhow::Result<()> {
    let outcomes: Vec<&Outcome> = summary
        .records
        .iter()
        .filter(|r| r.from == Step::Universities)
        .map(|r| &r.outcome)
        .collect();
    ensure!(
        outcomes.len() == CATALOG_PICKS.len() + 3,
        "script left the universities step early"
    );
    ensure!(
        outcomes[..MAX_UNIVERSITIES]
            .iter()
            .all(|o| **o == Outcome::Accepted),
        "the first {MAX_UNIVERSITIES} picks should be accepted"
    );
    ensure!(
        matches!(outcomes[MAX_UNIVERSITIES], Outcome::Rejected(_)),
        "a sixth university must be rejected"
    );
    ensure!(
        matches!(outcomes[MAX_UNIVERSITIES + 1], Outcome::Rejected(_)),
        "a duplicate must be rejected"
    );
    let list = summary.form.universities();
    ensure!(
        list.len() == MAX_UNIVERSITIES,
        "list should end at the cap, has {}",
        list.len()
    );
    ensure!(
        list.last().map(String::as_str) == Some("Columbia University"),
        "a freed slot should take the sixth pick"
    );
    Ok(())
}

pub fn university_limit_script() -> WizardScript {
    WizardScript::default()
        .with_actions(walk_to(Step::Universities))
        .with_actions(CATALOG_PICKS.iter().map(|&slug| ScriptAction::add_university(slug)))
        .with_actions([
            ScriptAction::add_university("harvard"),
            ScriptAction::RemoveUniversity(0),
            ScriptAction::add_university("columbia"),
        ])
        .with_expectation(university_limit_expectation)
}

// hours clamp --------------------------------------------------------------------

fn hours_clamp_expectation(summary: &ScriptSummary) -> anyhow::Result<()> {
    let stored: Vec<u8> = summary
        .outcomes()
        .filter_map(|o| match o {
            Outcome::Clamped(hours) => Some(*hours),
            _ => None,
        })
        .collect();
    ensure!(
        stored == [0, MAX_EC_HOURS, 25],
        "hours should clamp into 0..={MAX_EC_HOURS}, stored {stored:?}"
    );
    ensure!(
        summary.form.extracurricular_hours() == MAX_EC_HOURS,
        "generic update should clamp too"
    );
    Ok(())
}

pub fn hours_clamp_script() -> WizardScript {
    WizardScript::default()
        .with_actions(walk_to(Step::ExtracurricularHours))
        .with_actions([
            ScriptAction::SetHours(-5),
            ScriptAction::SetHours(99),
            ScriptAction::SetHours(25),
            ScriptAction::Update(Field::ExtracurricularHours, FieldValue::Hours(1_000)),
        ])
        .with_expectation(hours_clamp_expectation)
}

// SAT bounds -----------------------------------------------------------------------

fn sat_out_of_range() -> [ScriptAction; 2] {
    [
        ScriptAction::update(Field::SatScore, "1700"),
        ScriptAction::Advance,
    ]
}

fn sat_hint_expectation(summary: &ScriptSummary) -> anyhow::Result<()> {
    expect_step(summary, Step::Gpa)?;
    ensure!(
        summary.form.sat_score() == "1700",
        "out-of-range SAT is kept as typed"
    );
    Ok(())
}

pub fn sat_hint_script() -> WizardScript {
    WizardScript::default()
        .with_actions(walk_to(Step::Sat))
        .with_actions(sat_out_of_range())
        .with_expectation(sat_hint_expectation)
}

fn sat_enforce_expectation(summary: &ScriptSummary) -> anyhow::Result<()> {
    expect_step(summary, Step::Gpa)?;
    let sat_gates = summary
        .records
        .iter()
        .filter(|r| r.from == Step::Sat && r.outcome == Outcome::Blocked)
        .count();
    ensure!(sat_gates == 1, "enforced bounds should block once, blocked {sat_gates}");
    Ok(())
}

pub fn sat_enforce_script() -> WizardScript {
    let config = WizardConfig {
        bounds: BoundsPolicy::Enforce,
        ..WizardConfig::default()
    };
    WizardScript::new(config)
        .with_actions(walk_to(Step::Sat))
        .with_actions(sat_out_of_range())
        .with_actions([
            ScriptAction::update(Field::SatScore, "1500"),
            ScriptAction::Advance,
        ])
        .with_expectation(sat_enforce_expectation)
}

// answer now -----------------------------------------------------------------------

fn answer_now_expectation(summary: &ScriptSummary) -> anyhow::Result<()> {
    expect_step(summary, Step::ActivityDetails)?;
    let blocked = summary
        .outcomes()
        .filter(|o| **o == Outcome::Blocked)
        .count();
    ensure!(
        blocked == 2,
        "answer-now without a type should be blocked, blocked {blocked} times"
    );
    ensure!(
        summary.outcomes().rev().nth(1) == Some(&Outcome::Stayed),
        "a repeated activity type should be ignored"
    );
    ensure!(
        summary.form.extracurricular_types() == [ActivityType::Research],
        "types should hold only the kept pick: {:?}",
        summary.form.extracurricular_types()
    );
    Ok(())
}

pub fn answer_now_script() -> WizardScript {
    WizardScript::default()
        .with_actions(walk_to(Step::ExtracurricularTypes))
        .with_actions([
            ScriptAction::OpenDetails,
            ScriptAction::AddActivity(ActivityType::Music),
            ScriptAction::RemoveActivity(0),
            ScriptAction::OpenDetails,
            ScriptAction::AddActivity(ActivityType::Research),
            ScriptAction::AddActivity(ActivityType::Research),
            ScriptAction::OpenDetails,
        ])
        .with_expectation(answer_now_expectation)
}

// back navigation ------------------------------------------------------------------

fn back_navigation_expectation(summary: &ScriptSummary) -> anyhow::Result<()> {
    expect_step(summary, Step::Welcome)?;
    ensure!(
        summary.outcomes().last() == Some(&Outcome::Stayed),
        "back on the welcome screen should stay put"
    );
    ensure!(
        summary.form.major() == Some(Major::Economics) && summary.form.gpa_score() == "3.8",
        "going back must keep earlier answers"
    );
    Ok(())
}

pub fn back_navigation_script() -> WizardScript {
    WizardScript::default()
        .with_actions(walk_to(Step::GradeLevel))
        .with_actions(std::iter::repeat_n(ScriptAction::Retreat, Step::GradeLevel.index().into()))
        .with_action(ScriptAction::Retreat)
        .with_expectation(back_navigation_expectation)
}

// restart ----------------------------------------------------------------------------

fn restart_expectation(summary: &ScriptSummary) -> anyhow::Result<()> {
    expect_step(summary, Step::Welcome)?;
    ensure!(
        summary.form == FormData::default(),
        "restart should clear every answer"
    );
    Ok(())
}

pub fn restart_script() -> WizardScript {
    WizardScript::default()
        .with_actions(walk_to(Step::Results))
        .with_action(ScriptAction::Reset)
        .with_expectation(restart_expectation)
}

// route guard --------------------------------------------------------------------------

const GUARDED_PATHS: [(&str, bool); 8] = [
    ("/", true),
    ("/questionnaire", true),
    ("/questionnaire?step=3", true),
    ("/questionnaire/", false),
    ("//", false),
    ("/admin", false),
    ("/404", false),
    ("/questionnaire/extra", false),
];

fn route_guard_expectation(summary: &ScriptSummary) -> anyhow::Result<()> {
    ensure!(
        summary.outcomes().count() == GUARDED_PATHS.len(),
        "expected one guard decision per path"
    );
    for ((path, allowed), outcome) in GUARDED_PATHS.iter().zip(summary.outcomes()) {
        match outcome {
            Outcome::Route(GuardDecision::Pass) => {
                ensure!(*allowed, "{path} should be redirected");
            }
            Outcome::Route(GuardDecision::Redirect(to)) => {
                ensure!(!allowed, "{path} should pass the guard");
                ensure!(to == "/", "{path} redirected to {to} instead of home");
            }
            other => anyhow::bail!("{path} produced {other}"),
        }
    }
    Ok(())
}

pub fn route_guard_script() -> WizardScript {
    WizardScript::default()
        .with_actions(GUARDED_PATHS.iter().map(|(path, _)| ScriptAction::visit(*path)))
        .with_expectation(route_guard_expectation)
}
