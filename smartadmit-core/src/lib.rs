//! SmartAdmit core
//!
//! Platform-agnostic logic for the SmartAdmit admissions questionnaire: the answer
//! record and its option catalogs, the step table with its validity predicates, the
//! wizard controller, the deferred-write input buffer, and the route allow-list.
//! This crate has no UI or browser dependencies.

pub mod buffer;
pub mod constants;
pub mod demo;
pub mod form;
pub mod options;
pub mod results;
pub mod routes;
pub mod steps;
pub mod wizard;

// Re-export commonly used types
pub use buffer::{FieldBuffer, Ticket};
pub use constants::{DEFAULT_QUIET_MS, MAX_EC_HOURS, MAX_UNIVERSITIES, TOTAL_STEPS};
pub use demo::DemoResponse;
pub use form::{Field, FieldValue, FormData, FormError, NumericCheck, ValueKind};
pub use options::{
    ActivityDuration, ActivityRole, ActivityType, Choice, GpaScale, GradeLevel, HoursBand, Major,
    ScaleRange, UNIVERSITY_CATALOG, university_name,
};
pub use results::{
    ComparisonRow, NextStep, ProgramMatch, ResultsLoadError, ResultsSummary, Tone, Verdict,
};
pub use routes::{GuardDecision, Page, RouteGuard};
pub use steps::{BoundsPolicy, Step};
pub use wizard::{DotState, PrimaryLabel, Timeline, Transition, Wizard, WizardConfig};
