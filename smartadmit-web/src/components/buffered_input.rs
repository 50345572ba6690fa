//! Text input that commits to the form after a quiet interval or on blur.

use crate::dom;
use smartadmit_core::{DEFAULT_QUIET_MS, FieldBuffer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BufferedInputProps {
    /// Committed value from the form; adopted whenever no local edit is pending.
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub inputmode: Option<AttrValue>,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub describedby: Option<AttrValue>,
    #[prop_or_default]
    pub invalid: bool,
    #[prop_or_default]
    pub testid: Option<AttrValue>,
    #[prop_or(DEFAULT_QUIET_MS)]
    pub quiet_ms: u64,
    #[prop_or_default]
    pub on_commit: Callback<String>,
}

type SharedBuffer = Rc<RefCell<FieldBuffer>>;
type SharedTimer = Rc<RefCell<Option<i32>>>;

fn cancel_timer(timer: &SharedTimer) {
    if let Some(handle) = timer.borrow_mut().take() {
        dom::clear_timeout(handle);
    }
}

fn flush(buffer: &SharedBuffer, timer: &SharedTimer, commit: &Callback<String>) {
    cancel_timer(timer);
    let flushed = buffer.borrow_mut().blur();
    if let Some(value) = flushed {
        commit.emit(value);
    }
}

fn schedule(buffer: &SharedBuffer, timer: &SharedTimer, commit: &Callback<String>, text: String) {
    let now = dom::now_ms();
    let ticket = buffer.borrow_mut().input(text, now);
    cancel_timer(timer);

    let fire_buffer = Rc::clone(buffer);
    let fire_timer = Rc::clone(timer);
    let fire_commit = commit.clone();
    let scheduled = dom::set_timeout(
        move || {
            fire_timer.borrow_mut().take();
            let fired = fire_buffer.borrow_mut().fire(ticket);
            if let Some(value) = fired {
                fire_commit.emit(value);
            }
        },
        ticket.delay_from(now),
    );
    match scheduled {
        Ok(handle) => *timer.borrow_mut() = Some(handle),
        Err(err) => {
            log::warn!("setTimeout failed, committing now: {}", dom::js_error_message(&err));
            flush(buffer, timer, commit);
        }
    }
}

#[function_component(BufferedInput)]
pub fn buffered_input(props: &BufferedInputProps) -> Html {
    let buffer: SharedBuffer =
        use_mut_ref(|| FieldBuffer::new(props.value.to_string(), props.quiet_ms));
    let timer: SharedTimer = use_mut_ref(|| None::<i32>);
    let rerender = use_force_update();

    {
        let buffer = Rc::clone(&buffer);
        let rerender = rerender.clone();
        use_effect_with(props.value.clone(), move |value| {
            if buffer.borrow_mut().sync(value) {
                rerender.force_update();
            }
        });
    }

    {
        let buffer = Rc::clone(&buffer);
        let timer = Rc::clone(&timer);
        let commit = props.on_commit.clone();
        use_effect_with((), move |()| move || flush(&buffer, &timer, &commit));
    }

    let oninput = {
        let buffer = Rc::clone(&buffer);
        let timer = Rc::clone(&timer);
        let commit = props.on_commit.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                schedule(&buffer, &timer, &commit, input.value());
                rerender.force_update();
            }
        })
    };

    let onblur = {
        let buffer = Rc::clone(&buffer);
        let timer = Rc::clone(&timer);
        let commit = props.on_commit.clone();
        Callback::from(move |_: FocusEvent| flush(&buffer, &timer, &commit))
    };

    let value = buffer.borrow().value().to_string();
    html! {
        <input
            class={classes!("text-input", props.invalid.then_some("input-invalid"))}
            type={props.input_type.clone()}
            inputmode={props.inputmode.clone()}
            placeholder={props.placeholder.clone()}
            aria-label={props.label.clone()}
            aria-describedby={props.describedby.clone()}
            aria-invalid={props.invalid.to_string()}
            data-testid={props.testid.clone()}
            {value}
            {oninput}
            {onblur}
        />
    }
}
