use super::{StepProps, StepHeading, text_update};
use crate::components::buffered_input::BufferedInput;
use crate::components::option_select::{OptionSelect, SelectOption};
use crate::i18n::t;
use smartadmit_core::{ActivityDuration, ActivityRole, Field, HoursBand};
use yew::prelude::*;

/// Optional follow-up about one activity. Nothing here gates the wizard.
#[function_component(DetailsStep)]
pub fn details_step(props: &StepProps) -> Html {
    let form = &props.form;
    html! {
        <section class="step" data-testid="step-details">
            <StepHeading title={t("steps.details.title")} />
            <div class="step-body details">
                <label class="field">
                    <span class="field-label">{ t("steps.details.activity_title") }</span>
                    <BufferedInput
                        value={AttrValue::from(form.activity_title().to_string())}
                        placeholder={t("steps.details.title_placeholder")}
                        testid={Some(AttrValue::Static("activity-title"))}
                        quiet_ms={props.config.quiet_ms}
                        on_commit={text_update(&props.dispatch, Field::ActivityTitle)}
                    />
                </label>
                <label class="field">
                    <span class="field-label">{ t("steps.details.role") }</span>
                    <OptionSelect
                        options={SelectOption::from_choices::<ActivityRole>()}
                        value={AttrValue::Static(form.activity_role().map(ActivityRole::as_str).unwrap_or_default())}
                        testid={Some(AttrValue::Static("activity-role"))}
                        on_change={text_update(&props.dispatch, Field::ActivityRole)}
                    />
                </label>
                <label class="field">
                    <span class="field-label">{ t("steps.details.duration") }</span>
                    <OptionSelect
                        options={SelectOption::from_choices::<ActivityDuration>()}
                        value={AttrValue::Static(form.activity_duration().map(ActivityDuration::as_str).unwrap_or_default())}
                        testid={Some(AttrValue::Static("activity-duration"))}
                        on_change={text_update(&props.dispatch, Field::ActivityDuration)}
                    />
                </label>
                <label class="field">
                    <span class="field-label">
                        { t("steps.details.hours") }
                        { " " }
                        <span class="field-optional">{ t("steps.details.optional") }</span>
                        { ":" }
                    </span>
                    <OptionSelect
                        options={SelectOption::from_choices::<HoursBand>()}
                        value={AttrValue::Static(form.activity_hours_per_week().map(HoursBand::as_str).unwrap_or_default())}
                        testid={Some(AttrValue::Static("activity-hours"))}
                        on_change={text_update(&props.dispatch, Field::ActivityHoursPerWeek)}
                    />
                </label>
            </div>
        </section>
    }
}
