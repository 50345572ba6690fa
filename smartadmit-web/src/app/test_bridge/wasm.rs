use super::BridgeSlot;
use crate::app::state::WizardAction;
use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

const BRIDGE_GLOBAL: &str = "__smartadmitTest";

struct BridgeBindings {
    _state: Closure<dyn FnMut() -> JsValue>,
    _advance: Closure<dyn FnMut() -> JsValue>,
    _back: Closure<dyn FnMut() -> JsValue>,
    _details: Closure<dyn FnMut() -> JsValue>,
    _reset: Closure<dyn FnMut() -> JsValue>,
}

impl BridgeBindings {
    fn keep(&self) {
        let _ = (
            &self._state,
            &self._advance,
            &self._back,
            &self._details,
            &self._reset,
        );
    }
}

fn action_binding(slot: &BridgeSlot, action: WizardAction) -> Closure<dyn FnMut() -> JsValue> {
    let slot = slot.clone();
    Closure::wrap(Box::new(move || JsValue::from_bool(slot.dispatch(action.clone())))
        as Box<dyn FnMut() -> JsValue>)
}

fn build_bridge(slot: &BridgeSlot) -> BridgeBindings {
    let state_slot = slot.clone();
    let state = Closure::wrap(Box::new(move || {
        serde_wasm_bindgen::to_value(&state_slot.snapshot()).unwrap_or(JsValue::NULL)
    }) as Box<dyn FnMut() -> JsValue>);

    BridgeBindings {
        _state: state,
        _advance: action_binding(slot, WizardAction::Advance),
        _back: action_binding(slot, WizardAction::Retreat),
        _details: action_binding(slot, WizardAction::OpenDetails),
        _reset: action_binding(slot, WizardAction::Reset),
    }
}

fn attach_bridge(bindings: &BridgeBindings) {
    let bridge = js_sys::Object::new();
    let entries: [(&str, &Closure<dyn FnMut() -> JsValue>); 5] = [
        ("state", &bindings._state),
        ("advance", &bindings._advance),
        ("back", &bindings._back),
        ("details", &bindings._details),
        ("reset", &bindings._reset),
    ];
    for (name, closure) in entries {
        let _ = js_sys::Reflect::set(
            &bridge,
            &JsValue::from_str(name),
            closure.as_ref().unchecked_ref(),
        );
    }
    let _ = js_sys::Reflect::set(&dom::window(), &JsValue::from_str(BRIDGE_GLOBAL), &bridge);
}

#[hook]
pub fn use_test_bridge(slot: &BridgeSlot) {
    let bridge_handle = use_mut_ref(|| None::<BridgeBindings>);
    let installed = use_mut_ref(|| false);
    let slot = slot.clone();

    use_effect_with((), move |()| {
        let cleanup = || {};
        if *installed.borrow() {
            return cleanup;
        }
        *installed.borrow_mut() = true;
        if dom::query_flag("test") {
            let bindings = build_bridge(&slot);
            attach_bridge(&bindings);
            bindings.keep();
            log::debug!("test bridge installed on window.{BRIDGE_GLOBAL}");
            *bridge_handle.borrow_mut() = Some(bindings);
        }
        cleanup
    });
}
