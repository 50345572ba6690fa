#[cfg(not(target_arch = "wasm32"))]
mod stub;
#[cfg(target_arch = "wasm32")]
mod wasm;

use crate::app::state::WizardAction;
use serde::Serialize;
use smartadmit_core::{FormData, Page, Wizard};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// What `window.__smartadmitTest.state()` reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BridgeState {
    pub page: &'static str,
    pub step: Option<u8>,
    pub step_name: Option<&'static str>,
    pub can_advance: bool,
    pub form: Option<FormData>,
}

impl BridgeState {
    fn on_page(page: Page) -> Self {
        Self {
            page: page.as_str(),
            step: None,
            step_name: None,
            can_advance: false,
            form: None,
        }
    }

    fn with_wizard(wizard: &Wizard) -> Self {
        Self {
            page: Page::Questionnaire.as_str(),
            step: Some(wizard.step().index()),
            step_name: Some(wizard.step().as_str()),
            can_advance: wizard.can_advance(),
            form: Some(wizard.form().clone()),
        }
    }
}

impl Default for BridgeState {
    fn default() -> Self {
        Self::on_page(Page::Landing)
    }
}

#[derive(Default)]
struct SlotInner {
    state: BridgeState,
    dispatch: Option<Callback<WizardAction>>,
}

/// Latest page and wizard snapshot, written by the views on every render.
#[derive(Clone, Default)]
pub struct BridgeSlot(Rc<RefCell<SlotInner>>);

impl PartialEq for BridgeSlot {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl BridgeSlot {
    /// Record a non-questionnaire page; the questionnaire overwrites this with its own snapshot.
    pub fn publish_page(&self, page: Page) {
        let mut inner = self.0.borrow_mut();
        if page != Page::Questionnaire {
            inner.dispatch = None;
            inner.state = BridgeState::on_page(page);
        }
    }

    pub fn publish_wizard(&self, wizard: &Wizard, dispatch: &Callback<WizardAction>) {
        let mut inner = self.0.borrow_mut();
        inner.state = BridgeState::with_wizard(wizard);
        inner.dispatch = Some(dispatch.clone());
    }

    /// Forget the wizard when the questionnaire unmounts.
    pub fn release_wizard(&self) {
        let mut inner = self.0.borrow_mut();
        inner.dispatch = None;
        inner.state.form = None;
        inner.state.step = None;
        inner.state.step_name = None;
        inner.state.can_advance = false;
    }

    #[must_use]
    pub fn snapshot(&self) -> BridgeState {
        self.0.borrow().state.clone()
    }

    /// Forward an action to the mounted wizard; `false` when none is mounted.
    pub fn dispatch(&self, action: WizardAction) -> bool {
        let dispatch = self.0.borrow().dispatch.clone();
        dispatch.is_some_and(|cb| {
            cb.emit(action);
            true
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_test_bridge(slot: &BridgeSlot) {
    stub::use_test_bridge(slot);
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_test_bridge(slot: &BridgeSlot) {
    wasm::use_test_bridge(slot);
}
