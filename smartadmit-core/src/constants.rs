//! Fixed limits and defaults for the questionnaire.
//!
//! Kept together so a change to any bound is a reviewed code change rather than
//! runtime configuration.

// Logging ------------------------------------------------------------------
pub(crate) const DEBUG_ENV_VAR: &str = "SMARTADMIT_DEBUG_LOGS";

// Steps --------------------------------------------------------------------
pub const TOTAL_STEPS: u8 = 10;
pub const FIRST_QUESTION_STEP: u8 = 1;
pub const LAST_STEP: u8 = TOTAL_STEPS - 1;
pub const TIMELINE_DOTS: usize = 7;

// Universities -------------------------------------------------------------
pub const MAX_UNIVERSITIES: usize = 5;

// Extracurricular hours slider ---------------------------------------------
pub const MAX_EC_HOURS: u8 = 40;
pub const DEFAULT_EC_HOURS: u8 = 10;

// SAT ----------------------------------------------------------------------
pub const SAT_MIN: u16 = 400;
pub const SAT_MAX: u16 = 1600;
pub const SAT_AVERAGE: u16 = 1050;

// Text input buffering -----------------------------------------------------
pub const DEFAULT_QUIET_MS: u64 = 300;

// Routing ------------------------------------------------------------------
pub const HOME_PATH: &str = "/";
pub const QUESTIONNAIRE_PATH: &str = "/questionnaire";
pub const DEMO_ENDPOINT: &str = "/api/demo";
