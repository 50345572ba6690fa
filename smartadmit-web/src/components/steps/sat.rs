use super::{StepHeading, StepProps, text_update};
use crate::components::buffered_input::BufferedInput;
use crate::i18n::{t, tr};
use smartadmit_core::constants::{SAT_AVERAGE, SAT_MAX, SAT_MIN};
use smartadmit_core::{Field, NumericCheck};
use std::collections::BTreeMap;
use yew::prelude::*;

#[function_component(SatStep)]
pub fn sat_step(props: &StepProps) -> Html {
    let score = props.form.sat_score();
    let check = props.form.sat_check();
    let flagged = matches!(check, NumericCheck::OutOfRange | NumericCheck::Invalid);

    let (min, max, avg) = (SAT_MIN.to_string(), SAT_MAX.to_string(), SAT_AVERAGE.to_string());
    let mut args = BTreeMap::new();
    args.insert("min", min.as_str());
    args.insert("max", max.as_str());
    args.insert("avg", avg.as_str());

    html! {
        <section class="step" data-testid="step-sat">
            <StepHeading
                title={t("steps.sat.title")}
                subtitle={Some(AttrValue::from(t("steps.sat.subtitle")))}
                note={Some(AttrValue::from(t("steps.sat.optional")))}
            />
            <div class="step-body">
                <BufferedInput
                    value={AttrValue::from(score.to_string())}
                    placeholder={t("steps.sat.placeholder")}
                    inputmode={Some(AttrValue::Static("numeric"))}
                    label={Some(AttrValue::from(t("steps.sat.title")))}
                    describedby={Some(AttrValue::Static("sat-hint"))}
                    invalid={flagged}
                    testid={Some(AttrValue::Static("sat-input"))}
                    quiet_ms={props.config.quiet_ms}
                    on_commit={text_update(&props.dispatch, Field::SatScore)}
                />
                <div class="field-hint" id="sat-hint">
                    if !score.is_empty() {
                        <p>{ tr("steps.sat.hint", Some(&args)) }</p>
                    }
                    if flagged {
                        <p class="field-warning" role="alert">{ tr("steps.sat.out_of_range", Some(&args)) }</p>
                    }
                </div>
            </div>
        </section>
    }
}
