use super::{StepHeading, StepProps};
use crate::app::state::WizardAction;
use crate::components::chip_list::ChipList;
use crate::components::option_select::{OptionSelect, SelectOption};
use crate::i18n::{t, tr};
use smartadmit_core::{MAX_UNIVERSITIES, UNIVERSITY_CATALOG};
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use yew::prelude::*;

fn catalog_options() -> Vec<SelectOption> {
    UNIVERSITY_CATALOG
        .iter()
        .map(|&(slug, name)| SelectOption::new(slug, name))
        .collect()
}

/// Picker plus free-text entry; both append to the ordered selection.
#[function_component(UniversitiesStep)]
pub fn universities_step(props: &StepProps) -> Html {
    let typed = use_state(String::new);
    let chosen = props.form.universities();
    let at_limit = props.form.university_limit_reached();

    let on_pick = props.dispatch.reform(WizardAction::AddUniversity);
    let on_remove = props.dispatch.reform(WizardAction::RemoveUniversity);

    let on_type = {
        let typed = typed.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                typed.set(input.value());
            }
        })
    };
    let on_add = {
        let typed = typed.clone();
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !typed.trim().is_empty() {
                dispatch.emit(WizardAction::AddUniversity((*typed).clone()));
                typed.set(String::new());
            }
        })
    };

    let count = chosen.len().to_string();
    let max = MAX_UNIVERSITIES.to_string();
    let mut args = BTreeMap::new();
    args.insert("count", count.as_str());
    args.insert("max", max.as_str());

    html! {
        <section class="step" data-testid="step-universities">
            <StepHeading
                title={t("steps.universities.title")}
                subtitle={Some(AttrValue::from(t("steps.universities.subtitle")))}
                note={Some(AttrValue::from(t("steps.universities.limit_note")))}
            />
            <div class="step-body">
                <OptionSelect
                    options={catalog_options()}
                    invalid={chosen.is_empty()}
                    disabled={at_limit}
                    label={Some(AttrValue::from(t("steps.universities.title")))}
                    testid={Some(AttrValue::Static("university-select"))}
                    on_change={on_pick}
                />
                <form class="custom-university" onsubmit={on_add}>
                    <input
                        type="text"
                        class="text-input"
                        placeholder={t("steps.universities.custom_placeholder")}
                        aria-label={t("steps.universities.custom_placeholder")}
                        value={(*typed).clone()}
                        disabled={at_limit}
                        autocomplete="off"
                        data-testid="university-custom"
                        oninput={on_type}
                    />
                    <button type="submit" class="btn-secondary" disabled={at_limit} data-testid="university-add">
                        { t("steps.universities.add") }
                    </button>
                </form>
                if !chosen.is_empty() {
                    <div class="selection">
                        <p class="selection-title">{ tr("steps.universities.selected", Some(&args)) }</p>
                        <ChipList
                            items={chosen.iter().cloned().map(AttrValue::from).collect::<Vec<_>>()}
                            testid={Some(AttrValue::Static("university-chips"))}
                            {on_remove}
                        />
                    </div>
                }
                if at_limit {
                    <p class="step-note" data-testid="university-limit">
                        { tr("steps.universities.maximum", Some(&args)) }
                    </p>
                }
            </div>
        </section>
    }
}
