//! Buffering and flush policy for the key resolver chain.
//!
//! The resolvers in [`crate::key::resolver`] are pure and stateless; this
//! driver owns the pending buffer of raw keystroke reports and decides,
//! after every newly arrived token, whether to emit a resolved event, keep
//! buffering, or flush the head verbatim. It never reads a clock: the owning
//! event loop arms a timer for [`ResolutionDriver::timeout`] whenever input
//! is pending and calls [`ResolutionDriver::expire`] when it fires.

use std::collections::VecDeque;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::key::event::KeyEvent;
use crate::key::resolver::{RESOLVERS, Resolution};

/// Default escape-disambiguation window.
const DEFAULT_TIMEOUT: Duration = Duration::from_millis(150);

/// Orchestrates the resolver chain over a growing buffer of raw key events.
///
/// A lone Escape character is structurally a prefix of the Alt and keypad
/// idioms, so it is held until either further input disambiguates it or the
/// configured window elapses; the window timeout is the only reason a bare
/// Esc key press is ever delivered on its own.
#[derive(Clone, Debug)]
pub struct ResolutionDriver {
    pending: VecDeque<KeyEvent>,
    timeout: Duration,
}

impl Default for ResolutionDriver {
    fn default() -> Self {
        Self {
            pending: VecDeque::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ResolutionDriver {
    /// Create a driver with the default disambiguation window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a driver with a custom disambiguation window.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroTimeout`] if `timeout` is zero; a zero window
    /// would flush every Escape before its second token could arrive.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        if timeout.is_zero() {
            return Err(Error::ZeroTimeout);
        }
        Ok(Self {
            pending: VecDeque::new(),
            timeout,
        })
    }

    /// The configured disambiguation window.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Number of raw events currently buffered.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Check if nothing is buffered. When this returns `false` after a call
    /// to [`push`](Self::push) or [`expire`](Self::expire), the caller must
    /// (re)arm its disambiguation timer.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Feed one raw key event, returning every resolved event that is ready.
    ///
    /// An empty return does not mean the input was dropped: it is buffered
    /// as a possible idiom prefix and will be delivered, resolved or
    /// verbatim, by a later call.
    pub fn push(&mut self, raw: KeyEvent) -> Vec<KeyEvent> {
        self.pending.push_back(raw);
        let mut resolved = Vec::new();
        self.drain_ready(&mut resolved);
        resolved
    }

    /// Signal that the disambiguation window elapsed with no new input.
    ///
    /// Prefers a full match over a verbatim flush: a held Escape character
    /// comes out as the named Esc key, not a raw 0x1B character. The
    /// remainder is then re-resolved and may legitimately go partial again,
    /// starting a new window.
    pub fn expire(&mut self) -> Vec<KeyEvent> {
        let mut resolved = Vec::new();
        if self.pending.is_empty() {
            return resolved;
        }
        if let Some((event, consumed)) = self.best_match() {
            self.pending.drain(..consumed);
            resolved.push(event);
        } else if let Some(head) = self.pending.pop_front() {
            resolved.push(head);
        }
        self.drain_ready(&mut resolved);
        resolved
    }

    /// End the input session. Partially buffered sequences are discarded
    /// without side effects.
    pub fn finish(mut self) {
        self.pending.clear();
    }

    /// Emit everything that can be decided without more input.
    fn drain_ready(&mut self, resolved: &mut Vec<KeyEvent>) {
        loop {
            if self.pending.is_empty() {
                return;
            }
            let buf: Vec<KeyEvent> = self.pending.iter().cloned().collect();
            let outcomes = RESOLVERS.map(|resolver| resolver(&buf));

            // Any partial claim holds the whole buffer: the idiom may still
            // grow, and a shorter full match must not steal its prefix.
            if outcomes.iter().any(Resolution::is_partial) {
                return;
            }

            if let Some((event, consumed)) = best_of(&outcomes) {
                self.pending.drain(..consumed);
                resolved.push(event);
            } else if let Some(head) = self.pending.pop_front() {
                resolved.push(head);
            }
        }
    }

    /// Best full match against the current buffer, ignoring partial claims.
    fn best_match(&self) -> Option<(KeyEvent, usize)> {
        let buf: Vec<KeyEvent> = self.pending.iter().cloned().collect();
        let outcomes = RESOLVERS.map(|resolver| resolver(&buf));
        best_of(&outcomes)
    }
}

/// Pick the winning full match: largest consumed count, chain order breaking
/// ties. Largest-consumed is what lets Esc+'x' resolve as Alt+X instead of
/// Esc then 'x'; chain order is what makes Char(0x09) resolve as Tab rather
/// than Ctrl+I.
fn best_of(outcomes: &[Resolution]) -> Option<(KeyEvent, usize)> {
    let mut best: Option<(KeyEvent, usize)> = None;
    for outcome in outcomes {
        if let Resolution::Matched { event, consumed } = outcome {
            if best.as_ref().is_none_or(|(_, len)| consumed > len) {
                best = Some((event.clone(), *consumed));
            }
        }
    }
    best
}
