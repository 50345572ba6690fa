use super::{StepHeading, StepProps};
use crate::app::state::WizardAction;
use crate::components::chip_list::ChipList;
use crate::components::option_select::{OptionSelect, SelectOption};
use crate::i18n::t;
use smartadmit_core::ActivityType;
use yew::prelude::*;

#[function_component(EcTypesStep)]
pub fn ec_types_step(props: &StepProps) -> Html {
    let chosen = props.form.extracurricular_types();

    let on_pick = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |value: String| {
            if let Ok(kind) = value.parse::<ActivityType>() {
                dispatch.emit(WizardAction::AddActivityType(kind));
            }
        })
    };
    let on_remove = props.dispatch.reform(WizardAction::RemoveActivityType);
    let on_details = props.dispatch.reform(|_: MouseEvent| WizardAction::OpenDetails);

    html! {
        <section class="step" data-testid="step-ec-types">
            <StepHeading title={t("steps.ec_types.title")} />
            <div class="step-body">
                <p class="step-kicker">{ t("steps.ec_types.select_all") }</p>
                <OptionSelect
                    options={SelectOption::from_choices::<ActivityType>()}
                    invalid={chosen.is_empty()}
                    label={Some(AttrValue::from(t("steps.ec_types.title")))}
                    testid={Some(AttrValue::Static("activity-select"))}
                    on_change={on_pick}
                />
                if !chosen.is_empty() {
                    <div class="selection">
                        <p class="selection-title">{ t("steps.ec_types.selected") }</p>
                        <ChipList
                            items={chosen.iter().map(|kind| AttrValue::Static(kind.label())).collect::<Vec<_>>()}
                            testid={Some(AttrValue::Static("activity-chips"))}
                            {on_remove}
                        />
                    </div>
                }
            </div>
            <aside class="details-prompt">
                <p>{ t("steps.ec_types.details_prompt") }</p>
                <button
                    type="button"
                    class="btn-primary"
                    disabled={chosen.is_empty()}
                    onclick={on_details}
                    data-testid="answer-now"
                >
                    { t("steps.ec_types.answer_now") }
                </button>
            </aside>
        </section>
    }
}
