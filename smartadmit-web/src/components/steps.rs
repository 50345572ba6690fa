//! One view per questionnaire step.
//!
//! Question views receive the current answers and the wizard dispatcher; they
//! never hold answers of their own beyond what [`BufferedInput`] keeps while a
//! write is pending.
//!
//! [`BufferedInput`]: crate::components::buffered_input::BufferedInput

pub mod details;
pub mod ec_hours;
pub mod ec_types;
pub mod gpa;
pub mod grade_level;
pub mod major;
pub mod results;
pub mod sat;
pub mod universities;
pub mod welcome;

use crate::app::state::WizardAction;
use smartadmit_core::{Field, FieldValue, FormData, WizardConfig};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StepProps {
    pub form: FormData,
    pub dispatch: Callback<WizardAction>,
    #[prop_or_default]
    pub config: WizardConfig,
}

/// Callback that writes a text value into `field`.
#[must_use]
pub fn text_update(dispatch: &Callback<WizardAction>, field: Field) -> Callback<String> {
    dispatch.reform(move |value: String| WizardAction::Update(field, FieldValue::Text(value)))
}

#[derive(Properties, PartialEq, Clone)]
pub struct StepHeadingProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub note: Option<AttrValue>,
}

#[function_component(StepHeading)]
pub fn step_heading(props: &StepHeadingProps) -> Html {
    html! {
        <header class="step-heading">
            <h2 class="step-title">{ props.title.clone() }</h2>
            if props.subtitle.is_some() || props.note.is_some() {
                <p class="step-subtitle">
                    if let Some(subtitle) = &props.subtitle {
                        <span class="subtitle-main">{ subtitle.clone() }</span>
                    }
                    if let Some(note) = &props.note {
                        { " " }
                        <span class="subtitle-note">{ note.clone() }</span>
                    }
                </p>
            }
        </header>
    }
}
