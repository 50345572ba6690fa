use crate::i18n::tr;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ChipListProps {
    pub items: Vec<AttrValue>,
    #[prop_or_default]
    pub testid: Option<AttrValue>,
    /// Receives the index of the chip whose remove button was pressed.
    #[prop_or_default]
    pub on_remove: Callback<usize>,
}

#[function_component(ChipList)]
pub fn chip_list(props: &ChipListProps) -> Html {
    html! {
        <ul class="chip-list" data-testid={props.testid.clone()}>
            { for props.items.iter().enumerate().map(|(index, item)| {
                let on_remove = props.on_remove.reform(move |_: MouseEvent| index);
                let mut args = BTreeMap::new();
                args.insert("item", item.as_str());
                let remove_label = tr("wizard.remove", Some(&args));
                html! {
                    <li class="chip">
                        <span>{ item.clone() }</span>
                        <button type="button" class="chip-remove" aria-label={remove_label} onclick={on_remove}>
                            { "×" }
                        </button>
                    </li>
                }
            })}
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn chips_carry_named_remove_buttons() {
        let props = ChipListProps {
            items: vec![AttrValue::from("Yale University"), AttrValue::from("Rice University")],
            testid: Some(AttrValue::from("chips")),
            on_remove: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ChipList>::with_props(props).render());
        assert_eq!(html.matches("class=\"chip\"").count(), 2);
        assert!(html.contains("aria-label=\"Remove Yale University\""));
    }
}
