use smartadmit_core::{ActivityType, Field, FieldValue, Transition, Wizard, WizardConfig};
use std::rc::Rc;
use yew::prelude::*;

/// Everything a questionnaire view can ask the wizard to do.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardAction {
    Advance,
    Retreat,
    OpenDetails,
    Reset,
    Update(Field, FieldValue),
    AddUniversity(String),
    RemoveUniversity(usize),
    AddActivityType(ActivityType),
    RemoveActivityType(usize),
    SetHours(i64),
}

/// Reducer wrapper so yew can own one [`Wizard`] per questionnaire mount.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WizardState {
    pub wizard: Wizard,
}

impl WizardState {
    #[must_use]
    pub fn new(config: WizardConfig) -> Self {
        Self {
            wizard: Wizard::new(config),
        }
    }
}

impl Reducible for WizardState {
    type Action = WizardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let wizard = &mut next.wizard;
        match action {
            WizardAction::Advance => {
                if let Transition::Advanced { from, to } = wizard.advance() {
                    log::debug!("wizard advanced {from} -> {to}");
                }
            }
            WizardAction::OpenDetails => {
                wizard.open_details();
            }
            WizardAction::Retreat => {
                wizard.retreat();
            }
            WizardAction::Reset => wizard.reset(),
            WizardAction::Update(field, value) => {
                if let Err(err) = wizard.update(field, value) {
                    log::warn!("ignored write to {field}: {err}");
                    return self;
                }
            }
            WizardAction::AddUniversity(value) => {
                if let Err(err) = wizard.add_university(&value) {
                    log::debug!("university not added: {err}");
                    return self;
                }
            }
            WizardAction::RemoveUniversity(index) => {
                wizard.remove_university(index);
            }
            WizardAction::AddActivityType(kind) => {
                if !wizard.add_activity_type(kind) {
                    return self;
                }
            }
            WizardAction::RemoveActivityType(index) => {
                wizard.remove_activity_type(index);
            }
            WizardAction::SetHours(raw) => {
                wizard.set_extracurricular_hours(raw);
            }
        }
        if next == *self { self } else { Rc::new(next) }
    }
}

/// Reducer handle plus a `Callback` form of its dispatcher for child props.
#[derive(Clone)]
pub struct WizardHandle {
    pub state: UseReducerHandle<WizardState>,
    pub dispatch: Callback<WizardAction>,
}

impl WizardHandle {
    #[must_use]
    pub fn wizard(&self) -> &Wizard {
        &self.state.wizard
    }
}

#[hook]
pub fn use_wizard(config: WizardConfig) -> WizardHandle {
    let state = use_reducer(move || WizardState::new(config));
    let dispatch = {
        let dispatcher = state.dispatcher();
        Callback::from(move |action: WizardAction| dispatcher.dispatch(action))
    };
    WizardHandle { state, dispatch }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartadmit_core::{Major, Step};

    fn reduce(state: Rc<WizardState>, action: WizardAction) -> Rc<WizardState> {
        state.reduce(action)
    }

    #[test]
    fn blocked_advance_keeps_the_same_state() {
        let start = Rc::new(WizardState::default());
        let welcome = reduce(start, WizardAction::Advance);
        assert_eq!(welcome.wizard.step(), Step::Major);
        let blocked = reduce(Rc::clone(&welcome), WizardAction::Advance);
        assert!(Rc::ptr_eq(&welcome, &blocked));
    }

    #[test]
    fn rejected_write_is_a_no_op() {
        let start = Rc::new(WizardState::default());
        let after = reduce(
            Rc::clone(&start),
            WizardAction::Update(Field::Major, FieldValue::from("astrology")),
        );
        assert!(Rc::ptr_eq(&start, &after));
        assert_eq!(after.wizard.form().major(), None);
    }

    #[test]
    fn major_answer_unlocks_next_step() {
        let mut state = reduce(Rc::new(WizardState::default()), WizardAction::Advance);
        state = reduce(
            state,
            WizardAction::Update(Field::Major, FieldValue::from(Major::Economics.as_str())),
        );
        state = reduce(state, WizardAction::Advance);
        assert_eq!(state.wizard.step(), Step::Universities);
        state = reduce(state, WizardAction::Retreat);
        assert_eq!(state.wizard.step(), Step::Major);
        assert_eq!(state.wizard.form().major(), Some(Major::Economics));
    }

    #[test]
    fn hours_and_lists_route_through_the_wizard() {
        let mut state = Rc::new(WizardState::default());
        state = reduce(state, WizardAction::SetHours(95));
        assert_eq!(state.wizard.form().extracurricular_hours(), 40);
        state = reduce(state, WizardAction::AddUniversity("mit".into()));
        state = reduce(state, WizardAction::AddUniversity("Tufts University".into()));
        assert_eq!(
            state.wizard.form().universities(),
            ["Massachusetts Institute of Technology", "Tufts University"]
        );
        state = reduce(state, WizardAction::RemoveUniversity(0));
        assert_eq!(state.wizard.form().universities(), ["Tufts University"]);
        state = reduce(state, WizardAction::AddActivityType(ActivityType::Debate));
        let same = reduce(Rc::clone(&state), WizardAction::AddActivityType(ActivityType::Debate));
        assert!(Rc::ptr_eq(&state, &same));
        state = reduce(state, WizardAction::Reset);
        assert_eq!(state.wizard.step(), Step::Welcome);
        assert!(state.wizard.form().universities().is_empty());
    }
}
