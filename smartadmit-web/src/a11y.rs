// Accessibility helpers

use smartadmit_core::{Step, TOTAL_STEPS};
use std::collections::BTreeMap;

/// Id of the polite live region rendered by the app shell.
pub const LIVE_REGION_ID: &str = "wizard-status";

/// Focus ring and screen-reader utility CSS, injected once by the app shell.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #467896;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Text announced when the wizard lands on `step`.
#[must_use]
pub fn step_announcement(step: Step) -> String {
    let current = (step.index() + 1).to_string();
    let total = TOTAL_STEPS.to_string();
    let mut args = BTreeMap::new();
    args.insert("current", current.as_str());
    args.insert("total", total.as_str());
    crate::i18n::tr("wizard.step_status", Some(&args))
}

/// Replace the live region text so assistive tech reads it out.
pub fn set_status(msg: &str) {
    if let Some(node) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(LIVE_REGION_ID))
    {
        node.set_text_content(Some(msg));
    }
}
