//! Deferred-write buffer for text inputs.
//!
//! Holds the in-progress text locally and decides when it should be committed to
//! the form: after a quiet interval with no further input, or immediately when the
//! input loses focus. Time is supplied by the caller in milliseconds, so the buffer
//! has no timers of its own; the web crate maps each [`Ticket`] onto one
//! `setTimeout` and clears the previous one on every keystroke.

use crate::constants::DEFAULT_QUIET_MS;

/// Handle for one scheduled commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub due_at: u64,
}

impl Ticket {
    /// Delay from `now` until the commit is due.
    #[must_use]
    pub const fn delay_from(self, now: u64) -> u64 {
        self.due_at.saturating_sub(now)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBuffer {
    value: String,
    generation: u64,
    pending: bool,
    quiet_ms: u64,
}

impl Default for FieldBuffer {
    fn default() -> Self {
        Self::new(String::new(), DEFAULT_QUIET_MS)
    }
}

impl FieldBuffer {
    #[must_use]
    pub const fn new(initial: String, quiet_ms: u64) -> Self {
        Self {
            value: initial,
            generation: 0,
            pending: false,
            quiet_ms,
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    #[must_use]
    pub const fn quiet_ms(&self) -> u64 {
        self.quiet_ms
    }

    /// Record a keystroke; any earlier ticket becomes stale.
    pub fn input(&mut self, text: impl Into<String>, now: u64) -> Ticket {
        self.value = text.into();
        self.generation = self.generation.wrapping_add(1);
        self.pending = true;
        Ticket {
            generation: self.generation,
            due_at: now.saturating_add(self.quiet_ms),
        }
    }

    /// Timer expiry. Returns the value to commit when `ticket` is still current.
    pub fn fire(&mut self, ticket: Ticket) -> Option<String> {
        if !self.pending || ticket.generation != self.generation {
            return None;
        }
        self.pending = false;
        Some(self.value.clone())
    }

    /// Focus loss. Commits a pending value immediately and cancels the timer.
    pub fn blur(&mut self) -> Option<String> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        self.generation = self.generation.wrapping_add(1);
        Some(self.value.clone())
    }

    /// Adopt a value changed elsewhere, unless local edits are still pending.
    pub fn sync(&mut self, external: &str) -> bool {
        if self.pending || self.value == external {
            return false;
        }
        external.clone_into(&mut self.value);
        true
    }
}
