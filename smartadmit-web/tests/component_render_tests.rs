use futures::executor::block_on;
use smartadmit_core::{ActivityType, Field, FieldValue, FormData, GpaScale, WizardConfig};
use smartadmit_web::components::steps::StepProps;
use smartadmit_web::components::steps::details::DetailsStep;
use smartadmit_web::components::steps::ec_hours::EcHoursStep;
use smartadmit_web::components::steps::ec_types::EcTypesStep;
use smartadmit_web::components::steps::gpa::GpaStep;
use smartadmit_web::components::steps::grade_level::GradeLevelStep;
use smartadmit_web::components::steps::major::MajorStep;
use smartadmit_web::components::steps::results::{ResultsProps, ResultsStep};
use smartadmit_web::components::steps::sat::SatStep;
use smartadmit_web::components::steps::universities::UniversitiesStep;
use yew::{BaseComponent, Callback, LocalServerRenderer};

fn props(form: FormData) -> StepProps {
    StepProps {
        form,
        dispatch: Callback::noop(),
        config: WizardConfig::default(),
    }
}

fn render<C>(form: FormData) -> String
where
    C: BaseComponent<Properties = StepProps>,
{
    block_on(LocalServerRenderer::<C>::with_props(props(form)).render())
}

fn form_with(updates: &[(Field, &str)]) -> FormData {
    let mut form = FormData::default();
    for (field, value) in updates {
        form.update(*field, FieldValue::from(*value)).unwrap();
    }
    form
}

#[test]
fn major_step_lists_every_major() {
    let html = render::<MajorStep>(FormData::default());
    assert!(html.contains("What do you want to study?"));
    assert!(html.contains("Select your intended major from the list below."));
    assert!(html.contains("English Literature"));
    assert!(html.contains("History"));
    assert!(html.contains("select-invalid"));

    let answered = render::<MajorStep>(form_with(&[(Field::Major, "biology")]));
    assert!(!answered.contains("select-invalid"));
}

#[test]
fn universities_step_shows_selection_and_limit() {
    let mut form = FormData::default();
    for slug in ["harvard", "stanford", "mit", "yale", "princeton"] {
        form.add_university(slug).unwrap();
    }
    let html = render::<UniversitiesStep>(form);
    assert!(html.contains("Selected Universities (5/5):"));
    assert!(html.contains("Massachusetts Institute of Technology"));
    assert!(html.contains("Maximum of 5 universities selected"));
    assert!(html.contains("(Select up to 5)"));

    let empty = render::<UniversitiesStep>(FormData::default());
    assert!(!empty.contains("Selected Universities"));
    assert!(!empty.contains("university-limit"));
}

#[test]
fn sat_step_hints_only_once_answered() {
    let blank = render::<SatStep>(FormData::default());
    assert!(blank.contains("(optional if not taken yet)"));
    assert!(!blank.contains("Score range"));

    let answered = render::<SatStep>(form_with(&[(Field::SatScore, "1450")]));
    assert!(answered.contains("Score range: 400-1600 • Average: ~1050"));
    assert!(!answered.contains("role=\"alert\""));

    let outside = render::<SatStep>(form_with(&[(Field::SatScore, "1700")]));
    assert!(outside.contains("role=\"alert\""));
}

#[test]
fn gpa_step_hint_follows_scale() {
    let html = render::<GpaStep>(form_with(&[(Field::GpaScale, GpaScale::FivePoint.as_str())]));
    assert!(html.contains("Range: 0.0 - 5.0 • Average: ~3.5"));
    let other = render::<GpaStep>(form_with(&[(Field::GpaScale, "other")]));
    assert!(!other.contains("Range:"));
}

#[test]
fn grade_level_step_lists_levels() {
    let html = render::<GradeLevelStep>(FormData::default());
    assert!(html.contains("What is your current grade or class level?"));
    assert!(html.contains("Gap Year"));
    assert!(html.contains("Transfer Student"));
}

#[test]
fn hours_step_reports_current_selection() {
    let html = render::<EcHoursStep>(FormData::default());
    assert!(html.contains("Current selection: 10 hours per week"));
    assert!(html.contains("40+"));

    let mut form = FormData::default();
    form.set_extracurricular_hours(1);
    let single = render::<EcHoursStep>(form);
    assert!(single.contains("Current selection: 1 hour per week"));
}

#[test]
fn activity_types_step_lists_chips_and_shortcut() {
    let mut form = FormData::default();
    form.add_activity_type(ActivityType::Volunteering);
    form.add_activity_type(ActivityType::Technology);
    let html = render::<EcTypesStep>(form);
    assert!(html.contains("Selected Activities:"));
    assert!(html.contains("Volunteering/Community Service"));
    assert!(html.contains("Technology/Coding"));
    assert!(html.contains("Answer now"));
    assert!(html.contains("Select all that apply:"));
}

#[test]
fn details_step_renders_optional_questions() {
    let html = render::<DetailsStep>(form_with(&[(Field::ActivityRole, "captain")]));
    assert!(html.contains("More Questions"));
    assert!(html.contains("Activity Title:"));
    assert!(html.contains("Your Role:"));
    assert!(html.contains("Duration:"));
    assert!(html.contains("(optional)"));
    assert!(html.contains("4 years or more"));
    assert!(html.contains("20+ hours"));
}

#[test]
fn results_step_renders_static_summary() {
    let props = ResultsProps {
        dispatch: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ResultsStep>::with_props(props).render());
    assert!(html.contains("82%"));
    assert!(html.contains("Better than 48% students"));
    assert!(html.contains("Strong profile"));
    assert_eq!(html.matches("class=\"match-card\"").count(), 4);
    assert!(html.contains("Below recommended range"));
    assert!(html.contains("Bonus advantage"));
    assert!(html.contains("What&#x27;s Working for You") || html.contains("What's Working for You"));
    assert_eq!(html.matches("class=\"next-step ").count(), 3);
}
