use crate::i18n::{t, tr};
use smartadmit_core::{DotState, Timeline};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProgressTimelineProps {
    pub timeline: Timeline,
}

fn dot_class(state: DotState) -> &'static str {
    match state {
        DotState::Complete => "timeline-dot complete",
        DotState::Current => "timeline-dot current",
        DotState::Upcoming => "timeline-dot upcoming",
    }
}

/// Seven dots joined by connectors; connectors left of the active dot are filled.
#[function_component(ProgressTimeline)]
pub fn progress_timeline(props: &ProgressTimelineProps) -> Html {
    let timeline = props.timeline;
    let last = Timeline::LEN - 1;
    html! {
        <ol class="timeline" aria-label={t("wizard.timeline_label")} data-testid="timeline">
            { for timeline.dots().enumerate().map(|(index, state)| {
                let number = (index + 1).to_string();
                let mut args = BTreeMap::new();
                args.insert("index", number.as_str());
                let label = tr("wizard.timeline_dot", Some(&args));
                let current = (state == DotState::Current).then_some("step");
                html! {
                    <li class="timeline-item">
                        <span class={dot_class(state)} aria-label={label} aria-current={current}>
                            if state == DotState::Complete { { "✓" } }
                        </span>
                        if index < last {
                            <span class={classes!("timeline-connector", (state == DotState::Complete).then_some("filled"))}></span>
                        }
                    </li>
                }
            })}
        </ol>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use smartadmit_core::Wizard;
    use yew::LocalServerRenderer;

    #[test]
    fn first_question_marks_first_dot_current() {
        let mut wizard = Wizard::default();
        wizard.advance();
        let props = ProgressTimelineProps {
            timeline: wizard.timeline().unwrap(),
        };
        let html = block_on(LocalServerRenderer::<ProgressTimeline>::with_props(props).render());
        assert_eq!(html.matches("timeline-dot current").count(), 1);
        assert_eq!(html.matches("timeline-dot upcoming").count(), 6);
        assert!(html.contains("aria-current=\"step\""));
        assert!(html.contains("Question group 7"));
    }
}
