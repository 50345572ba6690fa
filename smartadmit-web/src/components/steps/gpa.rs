use super::{StepHeading, StepProps, text_update};
use crate::components::buffered_input::BufferedInput;
use crate::components::option_select::{OptionSelect, SelectOption};
use crate::i18n::{t, tr};
use smartadmit_core::{Field, GpaScale, NumericCheck, ScaleRange};
use std::collections::BTreeMap;
use yew::prelude::*;

/// "Range: 0.0 - 4.0 • Average: ~3.0"; the 100-point scale prints whole numbers.
fn scale_hint(range: ScaleRange) -> String {
    let places = if range.max >= 10.0 { 0 } else { 1 };
    let min = format!("{:.places$}", range.min);
    let max = format!("{:.places$}", range.max);
    let avg = format!("{:.places$}", range.average);
    let mut args = BTreeMap::new();
    args.insert("min", min.as_str());
    args.insert("max", max.as_str());
    args.insert("avg", avg.as_str());
    tr("steps.gpa.hint", Some(&args))
}

#[function_component(GpaStep)]
pub fn gpa_step(props: &StepProps) -> Html {
    let scale = props.form.gpa_scale();
    let score = props.form.gpa_score();
    let flagged = matches!(
        props.form.gpa_check(),
        NumericCheck::OutOfRange | NumericCheck::Invalid
    );
    let range = scale.and_then(GpaScale::range);

    html! {
        <section class="step" data-testid="step-gpa">
            <StepHeading title={t("steps.gpa.title")} subtitle={Some(AttrValue::from(t("steps.gpa.subtitle")))} />
            <div class="step-body gpa-row">
                <OptionSelect
                    options={SelectOption::from_choices::<GpaScale>()}
                    value={AttrValue::Static(scale.map(GpaScale::as_str).unwrap_or_default())}
                    invalid={scale.is_none()}
                    label={Some(AttrValue::from(t("steps.gpa.subtitle")))}
                    testid={Some(AttrValue::Static("gpa-scale"))}
                    on_change={text_update(&props.dispatch, Field::GpaScale)}
                />
                <BufferedInput
                    value={AttrValue::from(score.to_string())}
                    placeholder={t("steps.gpa.placeholder")}
                    inputmode={Some(AttrValue::Static("decimal"))}
                    label={Some(AttrValue::from(t("steps.gpa.placeholder")))}
                    describedby={Some(AttrValue::Static("gpa-hint"))}
                    invalid={flagged || score.is_empty()}
                    testid={Some(AttrValue::Static("gpa-input"))}
                    quiet_ms={props.config.quiet_ms}
                    on_commit={text_update(&props.dispatch, Field::GpaScore)}
                />
            </div>
            <div class="field-hint" id="gpa-hint">
                if let Some(range) = range {
                    <p>{ scale_hint(range) }</p>
                }
                if flagged {
                    <p class="field-warning" role="alert">{ t("steps.gpa.out_of_range") }</p>
                }
            </div>
        </section>
    }
}
