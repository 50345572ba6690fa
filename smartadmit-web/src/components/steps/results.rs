use crate::app::state::WizardAction;
use crate::components::brand::Brand;
use crate::i18n::{fmt_pct, t, tr};
use smartadmit_core::results::{self, ComparisonRow, NextStep, ProgramMatch};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ResultsProps {
    #[prop_or_default]
    pub dispatch: Callback<WizardAction>,
}

fn match_card(program: &ProgramMatch) -> Html {
    html! {
        <li class="match-card">
            <span class="match-logo" aria-hidden="true">{ program.logo.clone() }</span>
            <span class="match-name">{ program.name.clone() }</span>
            <span class="match-chance">{ fmt_pct(program.chance) }</span>
        </li>
    }
}

fn comparison_row(row: &ComparisonRow) -> Html {
    let verdict = row.verdict.as_str();
    html! {
        <tr>
            <th scope="row">{ row.metric.clone() }</th>
            <td>{ row.yours.clone() }</td>
            <td>{ row.admitted.clone() }</td>
            <td>
                <span class={classes!("verdict-dot", verdict)} aria-hidden="true"></span>
                { t(&format!("results.verdict.{verdict}")) }
            </td>
        </tr>
    }
}

fn next_step_card(step: &NextStep) -> Html {
    html! {
        <li class={classes!("next-step", step.tone.as_str())}>
            <span class="next-step-number">{ step.number.clone() }</span>
            <div>
                <h4>{ step.title.clone() }</h4>
                <p>{ step.description.clone() }</p>
                <button type="button" class="btn-tone">{ step.action.clone() }</button>
            </div>
        </li>
    }
}

/// Fixed summary screen. Nothing on it is derived from the answers.
#[function_component(ResultsStep)]
pub fn results_step(props: &ResultsProps) -> Html {
    let summary = results::summary();
    let pct = summary.percentile.to_string();
    let mut args = BTreeMap::new();
    args.insert("pct", pct.as_str());
    let restart = props.dispatch.reform(|_: MouseEvent| WizardAction::Reset);

    html! {
        <section class="results" data-testid="step-results">
            <header class="results-header">
                <Brand />
                <button type="button" class="btn-secondary" onclick={restart} data-testid="results-restart">
                    { t("results.restart") }
                </button>
            </header>

            <div class="score">
                <p class="score-caption">{ t("results.score_caption") }</p>
                <p class="score-value" data-testid="results-score">{ fmt_pct(summary.score) }</p>
                <p class="score-percentile">{ tr("results.percentile", Some(&args)) }</p>
                <p class="score-basis">{ t("results.basis") }</p>
                <span class="profile-label">{ summary.profile_label.clone() }</span>
            </div>

            <section class="matches">
                <header>
                    <h3>{ t("results.matches_title") }</h3>
                    <button type="button" class="btn-outline">{ t("results.view_more") }</button>
                </header>
                <ul>{ for summary.matches.iter().map(match_card) }</ul>
            </section>

            <section class="compare">
                <h3>
                    { t("results.compare_title") }
                    { " " }
                    <span class="compare-subtitle">{ t("results.compare_subtitle") }</span>
                </h3>
                <table>
                    <thead>
                        <tr>
                            <th scope="col">{ t("results.col_metric") }</th>
                            <th scope="col">{ t("results.col_you") }</th>
                            <th scope="col">{ t("results.col_admitted") }</th>
                            <th scope="col">{ t("results.col_insight") }</th>
                        </tr>
                    </thead>
                    <tbody>{ for summary.comparison.iter().map(comparison_row) }</tbody>
                </table>
            </section>

            <div class="feedback">
                <section class="strengths">
                    <h3>{ t("results.strengths_title") }</h3>
                    <ul>{ for summary.strengths.iter().map(|s| html! { <li>{ s.clone() }</li> }) }</ul>
                </section>
                <section class="improvements">
                    <h3>{ t("results.improvements_title") }</h3>
                    <ul>{ for summary.improvements.iter().map(|s| html! { <li>{ s.clone() }</li> }) }</ul>
                    <button type="button" class="btn-outline">{ t("results.improve_cta") }</button>
                </section>
            </div>

            <section class="next-steps">
                <h3>{ t("results.next_steps_title") }</h3>
                <ol>{ for summary.next_steps.iter().map(next_step_card) }</ol>
            </section>
        </section>
    }
}
