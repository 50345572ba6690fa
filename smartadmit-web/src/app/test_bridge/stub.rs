use super::BridgeSlot;
use yew::prelude::*;

#[hook]
pub fn use_test_bridge(slot: &BridgeSlot) {
    let _ = slot;
}
