use smartadmit_core::Choice;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SelectOption {
    pub value: AttrValue,
    pub label: AttrValue,
}

impl SelectOption {
    #[must_use]
    pub fn new(value: &'static str, label: &'static str) -> Self {
        Self {
            value: AttrValue::Static(value),
            label: AttrValue::Static(label),
        }
    }

    /// One entry per member of a closed option set, in declaration order.
    #[must_use]
    pub fn from_choices<C: Choice>() -> Vec<Self> {
        C::all()
            .iter()
            .map(|choice| Self::new(choice.id(), choice.label()))
            .collect()
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct OptionSelectProps {
    pub options: Vec<SelectOption>,
    /// Selected identifier; empty shows the placeholder.
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub invalid: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub testid: Option<AttrValue>,
    #[prop_or_default]
    pub on_change: Callback<String>,
}

/// Native `<select>` with a `--Select--` placeholder entry.
#[function_component(OptionSelect)]
pub fn option_select(props: &OptionSelectProps) -> Html {
    let on_change = {
        let cb = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                cb.emit(sel.value());
            }
        })
    };
    let class = classes!("select", props.invalid.then_some("select-invalid"));
    let placeholder = crate::i18n::t("wizard.select_placeholder");

    html! {
        <select
            class={class}
            id={props.id.clone()}
            aria-label={props.label.clone()}
            aria-invalid={props.invalid.to_string()}
            data-testid={props.testid.clone()}
            disabled={props.disabled}
            onchange={on_change}
        >
            <option value="" selected={props.value.is_empty()}>{ placeholder }</option>
            { for props.options.iter().map(|opt| {
                let selected = opt.value == props.value;
                html! { <option value={opt.value.clone()} {selected}>{ opt.label.clone() }</option> }
            })}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use smartadmit_core::GpaScale;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_placeholder_and_marks_selection() {
        let props = OptionSelectProps {
            options: SelectOption::from_choices::<GpaScale>(),
            value: AttrValue::from("5.0"),
            invalid: false,
            disabled: false,
            id: None,
            label: Some(AttrValue::from("GPA scale")),
            testid: Some(AttrValue::from("gpa-scale")),
            on_change: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<OptionSelect>::with_props(props).render());
        assert!(html.contains("--Select--"));
        assert!(html.contains("5.0 Scale (Weighted)"));
        assert!(html.contains("data-testid=\"gpa-scale\""));
        assert!(html.contains("aria-invalid=\"false\""));
    }

    #[test]
    fn invalid_state_is_exposed() {
        let props = OptionSelectProps {
            options: vec![SelectOption::new("a", "Alpha")],
            value: AttrValue::default(),
            invalid: true,
            disabled: false,
            id: None,
            label: None,
            testid: None,
            on_change: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<OptionSelect>::with_props(props).render());
        assert!(html.contains("select-invalid"));
        assert!(html.contains("aria-invalid=\"true\""));
    }
}
