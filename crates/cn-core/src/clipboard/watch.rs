//! Change detection for the clipboard watcher.
//!
//! [`WatchState`] is the pure decision core behind the polling loop: given a
//! sampled clipboard text, the current time, and the text of the history's
//! head entry, it decides whether the sample becomes a new history entry.
//! It performs no I/O and holds no clock, which keeps the tick logic
//! testable without a real clipboard or timer.
//!
//! Decision sequence for one sample:
//!
//! 1. empty text is never a change
//! 2. text identical to the last observed text is not a change
//! 3. the last observed text is updated *before* any further guard, so a
//!    single external change is evaluated exactly once
//! 4. changes arriving within the debounce window after the last accepted
//!    entry are discarded as noise (rapid successive writes, programmatic
//!    copy-backs)
//! 5. a change whose text equals the history head is a duplicate and is
//!    discarded regardless of elapsed time
//!
//! Debounce runs before the head-dedup check; both orders satisfy the
//! observable guarantees, this one is fixed here so behavior is consistent.

use std::time::Duration;

/// Why a sampled text did not become a new entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The clipboard was empty or held no text.
    EmptyText,
    /// The text matches the last observed sample; no change occurred.
    Unchanged,
    /// A distinct text arrived inside the debounce window.
    Debounced,
    /// The text equals the history's head entry.
    DuplicateOfHead,
}

/// Outcome of evaluating one clipboard sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchDecision {
    Ignore(IgnoreReason),
    /// The sample qualifies as a new history entry. The caller must call
    /// [`WatchState::mark_accepted`] once the entry has been persisted.
    Record,
}

/// Mutable state of the clipboard watcher.
#[derive(Debug, Clone)]
pub struct WatchState {
    last_observed: String,
    last_accepted_at_ms: Option<i64>,
    debounce_ms: i64,
}

impl WatchState {
    /// Create the state with the clipboard content present at startup, so
    /// pre-existing content is never recorded as a new entry.
    pub fn new(initial_clipboard: impl Into<String>, debounce: Duration) -> Self {
        Self {
            last_observed: initial_clipboard.into(),
            last_accepted_at_ms: None,
            debounce_ms: debounce.as_millis() as i64,
        }
    }

    /// Cheap pre-filter: would `sampled` even count as a change?
    ///
    /// Lets the tick loop skip loading the history when nothing changed.
    /// Read-only; the full [`evaluate`](Self::evaluate) repeats these checks.
    pub fn sample_differs(&self, sampled: &str) -> bool {
        !sampled.is_empty() && sampled != self.last_observed
    }

    /// Evaluate one sampled clipboard text.
    ///
    /// `head_text` is the text of the current history head, if any.
    pub fn evaluate(
        &mut self,
        sampled: &str,
        now_ms: i64,
        head_text: Option<&str>,
    ) -> WatchDecision {
        if sampled.is_empty() {
            return WatchDecision::Ignore(IgnoreReason::EmptyText);
        }
        if sampled == self.last_observed {
            return WatchDecision::Ignore(IgnoreReason::Unchanged);
        }

        // Mark observed before the guards: even a discarded change must not
        // be evaluated again on the next tick.
        self.last_observed = sampled.to_string();

        if let Some(accepted_at) = self.last_accepted_at_ms {
            if now_ms - accepted_at < self.debounce_ms {
                return WatchDecision::Ignore(IgnoreReason::Debounced);
            }
        }

        if head_text == Some(sampled) {
            return WatchDecision::Ignore(IgnoreReason::DuplicateOfHead);
        }

        WatchDecision::Record
    }

    /// Record the acceptance instant after the entry was durably stored.
    pub fn mark_accepted(&mut self, now_ms: i64) {
        self.last_accepted_at_ms = Some(now_ms);
    }

    /// Treat `text` as already observed.
    ///
    /// Called when the application itself writes to the clipboard (copying a
    /// history entry or note back out), so the watcher does not re-record
    /// its own write as a user-originated change.
    pub fn note_programmatic_write(&mut self, text: &str) {
        self.last_observed = text.to_string();
    }
}
