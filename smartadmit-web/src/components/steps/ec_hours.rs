use super::{StepHeading, StepProps};
use crate::app::state::WizardAction;
use crate::i18n::{t, tr};
use smartadmit_core::MAX_EC_HOURS;
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use yew::prelude::*;

const TICK_EVERY: u8 = 5;

fn fill_percent(hours: u8) -> u32 {
    u32::from(hours) * 100 / u32::from(MAX_EC_HOURS)
}

/// Slider from 0 to the cap; the last tick reads "40+".
#[function_component(EcHoursStep)]
pub fn ec_hours_step(props: &StepProps) -> Html {
    let hours = props.form.extracurricular_hours();
    let on_input = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                && let Ok(raw) = input.value().parse::<i64>()
            {
                dispatch.emit(WizardAction::SetHours(raw));
            }
        })
    };

    let count = hours.to_string();
    let mut args = BTreeMap::new();
    args.insert("count", count.as_str());
    let fill = format!("width: {}%", fill_percent(hours));

    html! {
        <section class="step" data-testid="step-ec-hours">
            <StepHeading title={t("steps.ec_hours.title")} />
            <div class="step-body hours">
                <div class="hours-track">
                    <div class="hours-fill" style={fill}></div>
                    <input
                        type="range"
                        class="hours-range"
                        min="0"
                        max={MAX_EC_HOURS.to_string()}
                        step="1"
                        value={count.clone()}
                        aria-label={t("steps.ec_hours.title")}
                        aria-valuetext={tr("steps.ec_hours.current", Some(&args))}
                        data-testid="hours-range"
                        oninput={on_input}
                    />
                </div>
                <ol class="hours-ticks" aria-hidden="true">
                    { for (0..MAX_EC_HOURS).step_by(usize::from(TICK_EVERY)).map(|tick| html! { <li>{ tick.to_string() }</li> }) }
                    <li>{ t("steps.ec_hours.max_tick") }</li>
                </ol>
                <p class="hours-current" data-testid="hours-current">{ tr("steps.ec_hours.current", Some(&args)) }</p>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_tracks_the_cap() {
        assert_eq!(fill_percent(0), 0);
        assert_eq!(fill_percent(10), 25);
        assert_eq!(fill_percent(MAX_EC_HOURS), 100);
    }
}
