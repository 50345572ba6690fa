use crate::a11y;
use crate::app::BridgeSlot;
use crate::app::state::{WizardAction, use_wizard};
use crate::components::brand::Brand;
use crate::components::progress_timeline::ProgressTimeline;
use crate::components::steps::StepProps;
use crate::components::steps::details::DetailsStep;
use crate::components::steps::ec_hours::EcHoursStep;
use crate::components::steps::ec_types::EcTypesStep;
use crate::components::steps::gpa::GpaStep;
use crate::components::steps::grade_level::GradeLevelStep;
use crate::components::steps::major::MajorStep;
use crate::components::steps::results::ResultsStep;
use crate::components::steps::sat::SatStep;
use crate::components::steps::universities::UniversitiesStep;
use crate::components::steps::welcome::WelcomeStep;
use crate::i18n::t;
use crate::router::Route;
use smartadmit_core::{Step, Wizard, WizardConfig};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct QuestionnaireProps {
    #[prop_or_default]
    pub config: WizardConfig,
}

fn render_question(step: Step, props: StepProps) -> Html {
    match step {
        Step::Major => html! { <MajorStep ..props /> },
        Step::Universities => html! { <UniversitiesStep ..props /> },
        Step::Sat => html! { <SatStep ..props /> },
        Step::Gpa => html! { <GpaStep ..props /> },
        Step::GradeLevel => html! { <GradeLevelStep ..props /> },
        Step::ExtracurricularHours => html! { <EcHoursStep ..props /> },
        Step::ExtracurricularTypes => html! { <EcTypesStep ..props /> },
        Step::ActivityDetails => html! { <DetailsStep ..props /> },
        Step::Welcome | Step::Results => Html::default(),
    }
}

fn wizard_chrome(wizard: &Wizard, dispatch: &Callback<WizardAction>) -> Html {
    let step = wizard.step();
    let props = StepProps {
        form: wizard.form().clone(),
        dispatch: dispatch.clone(),
        config: wizard.config(),
    };
    let back = dispatch.reform(|_: MouseEvent| WizardAction::Retreat);
    let next = dispatch.reform(|_: MouseEvent| WizardAction::Advance);
    let requirement = wizard.requirement();

    html! {
        <main class="questionnaire" data-testid="questionnaire" data-step={step.as_str()}>
            <div class="questionnaire-brand"><Brand /></div>
            if let Some(timeline) = wizard.timeline() {
                <ProgressTimeline {timeline} />
            }
            <div class="step-frame" key={step.as_str()}>
                { render_question(step, props) }
                if let Some(key) = requirement {
                    <p class="requirement" role="status" data-testid="requirement">{ t(key) }</p>
                }
            </div>
            <nav class="wizard-nav">
                if wizard.shows_back() {
                    <button type="button" class="btn-outline" onclick={back} data-testid="wizard-back">
                        { t("wizard.back") }
                    </button>
                } else {
                    <span></span>
                }
                <button
                    type="button"
                    class="btn-primary"
                    disabled={!wizard.can_advance()}
                    aria-disabled={(!wizard.can_advance()).to_string()}
                    onclick={next}
                    data-testid="wizard-next"
                >
                    { t(wizard.primary_label().i18n_key()) }
                </button>
            </nav>
        </main>
    }
}

/// Hosts one wizard for as long as the route stays mounted.
#[function_component(QuestionnairePage)]
pub fn questionnaire_page(props: &QuestionnaireProps) -> Html {
    let handle = use_wizard(props.config);
    let navigator = use_navigator();
    let bridge = use_context::<BridgeSlot>();
    let wizard = handle.wizard();
    let step = wizard.step();

    if let Some(bridge) = &bridge {
        bridge.publish_wizard(wizard, &handle.dispatch);
    }
    {
        let bridge = bridge.clone();
        use_effect_with((), move |()| {
            move || {
                if let Some(bridge) = bridge {
                    bridge.release_wizard();
                }
            }
        });
    }
    use_effect_with(step, |step| a11y::set_status(&a11y::step_announcement(*step)));

    match step {
        Step::Welcome => {
            let on_start = handle.dispatch.reform(|()| WizardAction::Advance);
            let on_skip = Callback::from(move |()| {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Home);
                }
            });
            html! { <WelcomeStep {on_start} {on_skip} /> }
        }
        Step::Results => html! { <ResultsStep dispatch={handle.dispatch.clone()} /> },
        _ => wizard_chrome(wizard, &handle.dispatch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use smartadmit_core::{ActivityType, Field, FieldValue, Major};
    use yew::LocalServerRenderer;

    #[derive(Properties, PartialEq, Clone)]
    struct ChromeProps {
        wizard: Wizard,
    }

    #[function_component(ChromeHarness)]
    fn chrome_harness(props: &ChromeProps) -> Html {
        wizard_chrome(&props.wizard, &Callback::noop())
    }

    fn render(wizard: Wizard) -> String {
        block_on(LocalServerRenderer::<ChromeHarness>::with_props(ChromeProps { wizard }).render())
    }

    fn walk_to(step: Step) -> Wizard {
        let mut wizard = Wizard::default();
        wizard
            .update(Field::Major, FieldValue::from(Major::Physics.as_str()))
            .unwrap();
        wizard.add_university("rice").unwrap();
        wizard.update(Field::GpaScale, FieldValue::from("4.0")).unwrap();
        wizard.update(Field::GpaScore, FieldValue::from("3.9")).unwrap();
        wizard.update(Field::GradeLevel, FieldValue::from("senior")).unwrap();
        wizard.add_activity_type(ActivityType::Research);
        while wizard.step() < step {
            assert!(wizard.advance().moved());
        }
        wizard
    }

    #[test]
    fn first_question_hides_back_and_blocks_next() {
        let mut wizard = Wizard::default();
        wizard.advance();
        let html = render(wizard);
        assert!(html.contains("data-testid=\"step-major\""));
        assert!(!html.contains("wizard-back"));
        assert!(html.contains("aria-disabled=\"true\""));
        assert!(html.contains("Please select your intended major to continue"));
        assert!(html.contains(">Next<"));
    }

    #[test]
    fn later_steps_show_back_and_submit() {
        let html = render(walk_to(Step::ActivityDetails));
        assert!(html.contains("data-testid=\"step-details\""));
        assert!(html.contains("wizard-back"));
        assert!(html.contains(">Submit<"));
        assert!(!html.contains("data-testid=\"requirement\""));
    }

    #[test]
    fn answered_step_drops_requirement_hint() {
        let html = render(walk_to(Step::Universities));
        assert!(html.contains("Rice University"));
        assert!(html.contains("Selected Universities (1/5):"));
        assert!(!html.contains("data-testid=\"requirement\""));
        assert!(html.contains("aria-disabled=\"false\""));
    }

    #[test]
    fn welcome_page_renders_full_screen() {
        let html = block_on(LocalServerRenderer::<QuestionnairePage>::new().render());
        assert!(html.contains("data-testid=\"step-welcome\""));
        assert!(!html.contains("data-testid=\"timeline\""));
    }
}
