use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlInputElement};
use yew::prelude::*;

use smartadmit_web::components::buffered_input::{BufferedInput, BufferedInputProps};
use smartadmit_web::dom;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(commits: Rc<RefCell<Vec<String>>>) -> web_sys::Element {
    let root = dom::document().create_element("div").expect("root");
    dom::document().body().expect("body").append_child(&root).expect("append");
    let props = BufferedInputProps {
        value: AttrValue::from(""),
        placeholder: AttrValue::from("Type"),
        input_type: AttrValue::from("text"),
        inputmode: None,
        label: None,
        describedby: None,
        invalid: false,
        testid: Some(AttrValue::from("buffered")),
        quiet_ms: 50,
        on_commit: Callback::from(move |v: String| commits.borrow_mut().push(v)),
    };
    yew::Renderer::<BufferedInput>::with_root_and_props(root.clone(), props).render();
    root
}

fn input_element(root: &web_sys::Element) -> HtmlInputElement {
    root.query_selector("input")
        .unwrap()
        .expect("input rendered")
        .dyn_into::<HtmlInputElement>()
        .expect("input element")
}

fn type_text(input: &HtmlInputElement, text: &str) {
    input.set_value(text);
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("input", &init).expect("event");
    input.dispatch_event(&event).expect("dispatch");
}

async fn sleep(ms: u64) {
    yew::platform::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[wasm_bindgen_test]
async fn keystrokes_commit_once_after_quiet_interval() {
    let commits = Rc::new(RefCell::new(Vec::new()));
    let root = mount(Rc::clone(&commits));
    sleep(10).await;
    let input = input_element(&root);

    type_text(&input, "1");
    type_text(&input, "14");
    type_text(&input, "145");
    sleep(10).await;
    assert!(commits.borrow().is_empty());

    sleep(100).await;
    assert_eq!(commits.borrow().as_slice(), ["145"]);
}

#[wasm_bindgen_test]
async fn blur_commits_immediately_without_duplicate() {
    let commits = Rc::new(RefCell::new(Vec::new()));
    let root = mount(Rc::clone(&commits));
    sleep(10).await;
    let input = input_element(&root);

    type_text(&input, "3.9");
    let blur = Event::new("blur").expect("blur event");
    input.dispatch_event(&blur).expect("dispatch blur");
    assert_eq!(commits.borrow().as_slice(), ["3.9"]);

    sleep(100).await;
    assert_eq!(commits.borrow().len(), 1);
}
