//! Allow-list route guard and path classification.

use crate::constants::{HOME_PATH, QUESTIONNAIRE_PATH};

/// Top-level page a path resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Landing,
    Questionnaire,
    NotFound,
}

impl Page {
    #[must_use]
    pub fn for_path(path: &str) -> Self {
        match path_only(path) {
            HOME_PATH => Self::Landing,
            QUESTIONNAIRE_PATH => Self::Questionnaire,
            _ => Self::NotFound,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Questionnaire => "questionnaire",
            Self::NotFound => "not-found",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Pass,
    Redirect(String),
}

impl GuardDecision {
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// Drops the query and fragment; the path itself is compared as given.
fn path_only(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

/// Permits only allow-listed paths; everything else redirects home.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGuard {
    allowed: Vec<String>,
    fallback: String,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new([HOME_PATH, QUESTIONNAIRE_PATH])
    }
}

impl RouteGuard {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: paths.into_iter().map(Into::into).collect(),
            fallback: HOME_PATH.to_string(),
        }
    }

    #[must_use]
    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    #[must_use]
    pub fn check(&self, path: &str) -> GuardDecision {
        let path = path_only(path);
        if self.allowed.iter().any(|allowed| allowed == path) {
            GuardDecision::Pass
        } else {
            log::debug!("route guard redirecting {path} to {}", self.fallback);
            GuardDecision::Redirect(self.fallback.clone())
        }
    }
}
