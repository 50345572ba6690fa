use super::{StepHeading, StepProps, text_update};
use crate::components::option_select::{OptionSelect, SelectOption};
use crate::i18n::t;
use smartadmit_core::{Field, GradeLevel};
use yew::prelude::*;

#[function_component(GradeLevelStep)]
pub fn grade_level_step(props: &StepProps) -> Html {
    let selected = props.form.grade_level();
    html! {
        <section class="step" data-testid="step-grade-level">
            <StepHeading title={t("steps.grade_level.title")} />
            <div class="step-body">
                <OptionSelect
                    options={SelectOption::from_choices::<GradeLevel>()}
                    value={AttrValue::Static(selected.map(GradeLevel::as_str).unwrap_or_default())}
                    invalid={selected.is_none()}
                    label={Some(AttrValue::from(t("steps.grade_level.title")))}
                    testid={Some(AttrValue::Static("grade-select"))}
                    on_change={text_update(&props.dispatch, Field::GradeLevel)}
                />
            </div>
        </section>
    }
}
