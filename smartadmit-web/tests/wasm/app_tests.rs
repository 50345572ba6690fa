use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use wasm_bindgen::JsCast;
use yew::Renderer;

use smartadmit_web::app::App;
use smartadmit_web::dom;

wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

async fn settle() {
    yew::platform::time::sleep(std::time::Duration::from_millis(20)).await;
}

fn click(selector: &str) {
    dom::document()
        .query_selector(selector)
        .expect("query")
        .unwrap_or_else(|| panic!("{selector} missing"))
        .dyn_into::<HtmlElement>()
        .expect("html element")
        .click();
}

#[wasm_bindgen_test]
async fn landing_renders_and_start_reaches_welcome() {
    Renderer::<App>::with_root(ensure_app_root()).render();
    settle().await;
    let doc = dom::document();
    assert!(doc.query_selector("[data-testid='landing-page']").unwrap().is_some());
    assert!(doc.get_element_by_id(smartadmit_web::a11y::LIVE_REGION_ID).is_some());

    click("a.btn-primary");
    settle().await;
    assert!(doc.query_selector("[data-testid='step-welcome']").unwrap().is_some());

    click("[data-testid='welcome-start']");
    settle().await;
    assert!(doc.query_selector("[data-testid='step-major']").unwrap().is_some());
    let next = doc
        .query_selector("[data-testid='wizard-next']")
        .unwrap()
        .expect("next button");
    assert_eq!(next.get_attribute("aria-disabled").as_deref(), Some("true"));
    let status = doc
        .get_element_by_id(smartadmit_web::a11y::LIVE_REGION_ID)
        .and_then(|node| node.text_content())
        .unwrap_or_default();
    assert_eq!(status, "Step 2 of 10");
}
