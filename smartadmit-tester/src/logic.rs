pub mod reports;
pub mod script;
pub mod tester;

pub use script::{Outcome, ScriptAction, ScriptSummary, WizardScript};
pub use tester::*;
