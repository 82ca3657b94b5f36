#![forbid(unsafe_code)]

//! Cancelable one-shot deferred actions.
//!
//! A [`Deferred`] is a single pending deadline. Arming it replaces any
//! previously armed deadline, so at most one firing is ever outstanding.
//! The owner polls it with the current time; it fires exactly once per arm.
//!
//! # Invariants
//!
//! 1. `arm()` cancels the previous deadline before installing the new one.
//! 2. `poll()` returns `true` at most once per `arm()`.
//! 3. `cancel()` is idempotent and a cancelled deadline never fires.
//! 4. The generation counter strictly increases on every `arm()`.

use web_time::{Duration, Instant};

/// A single cancelable deadline, re-armed with last-writer-wins semantics.
#[derive(Debug, Clone, Default)]
pub struct Deferred {
    deadline: Option<Instant>,
    generation: u64,
}

impl Deferred {
    /// Create an idle deferred action.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            deadline: None,
            generation: 0,
        }
    }

    /// Arm the action to fire `delay` after `now`, superseding any pending one.
    ///
    /// Returns the generation of the new arming.
    pub fn arm(&mut self, now: Instant, delay: Duration) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.deadline = Some(now + delay);
        self.generation
    }

    /// Drop the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Fire if the deadline has been reached.
    ///
    /// Returns `true` exactly once for each arming whose deadline is `<= now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a deadline is pending.
    #[inline]
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline.
    #[inline]
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left until the pending deadline, zero if already due.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Generation of the most recent arming.
    #[inline]
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
