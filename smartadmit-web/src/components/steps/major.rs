use super::{StepHeading, StepProps, text_update};
use crate::components::option_select::{OptionSelect, SelectOption};
use crate::i18n::t;
use smartadmit_core::{Field, Major};
use yew::prelude::*;

#[function_component(MajorStep)]
pub fn major_step(props: &StepProps) -> Html {
    let selected = props.form.major();
    let value = selected.map(Major::as_str).unwrap_or_default();
    html! {
        <section class="step" data-testid="step-major">
            <StepHeading title={t("steps.major.title")} subtitle={Some(AttrValue::from(t("steps.major.subtitle")))} />
            <div class="step-body">
                <OptionSelect
                    options={SelectOption::from_choices::<Major>()}
                    value={AttrValue::Static(value)}
                    invalid={selected.is_none()}
                    label={Some(AttrValue::from(t("steps.major.title")))}
                    testid={Some(AttrValue::Static("major-select"))}
                    on_change={text_update(&props.dispatch, Field::Major)}
                />
            </div>
        </section>
    }
}
