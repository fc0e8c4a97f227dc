//! Cold-start detection for backend requests.
//!
//! Free-tier backends go to sleep when idle; the first request after a nap
//! can take tens of seconds. There is no server telemetry for this, so the
//! client infers it: every request arms a 3 s one-shot timer, and a timer
//! firing while its request is still pending classifies the batch as a cold
//! start. The view layer gates a full-screen overlay on the derived flags.
//!
//! State is a ticket-keyed in-flight set rather than one shared
//! loading/start-time pair, so one request settling cannot clobber the
//! tracking of another still in flight. `is_loading` derives from the
//! in-flight set, `is_cold_start` from the set of fired timers whose
//! requests have not settled yet.

use std::collections::{BTreeMap, BTreeSet};

use dioxus::prelude::*;

use crate::time;

/// How long a request may stay pending before we assume a cold start.
pub const COLD_START_THRESHOLD_MS: u64 = 3000;

/// Identifies one in-flight request.
pub type Ticket = u64;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColdStartState {
    next_ticket: Ticket,
    /// Pending requests, ticket -> start timestamp (ms).
    in_flight: BTreeMap<Ticket, i64>,
    /// Tickets whose threshold timer fired before the request settled.
    fired: BTreeSet<Ticket>,
}

impl ColdStartState {
    /// Record a request going out; returns the ticket the wrapper holds
    /// until settle.
    pub fn begin(&mut self, started_at_ms: i64) -> Ticket {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.in_flight.insert(ticket, started_at_ms);
        ticket
    }

    /// The threshold timer for `ticket` elapsed. Classifies a cold start
    /// only if the request is still pending; a settled ticket is a no-op.
    pub fn timer_fired(&mut self, ticket: Ticket) -> bool {
        if self.in_flight.contains_key(&ticket) {
            self.fired.insert(ticket);
            true
        } else {
            false
        }
    }

    /// The request settled (success or failure).
    pub fn finish(&mut self, ticket: Ticket) {
        self.in_flight.remove(&ticket);
        self.fired.remove(&ticket);
    }

    pub fn is_loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn is_cold_start(&self) -> bool {
        !self.fired.is_empty()
    }

    /// Start timestamp of the oldest pending request, if any.
    pub fn request_start_time(&self) -> Option<i64> {
        self.in_flight.values().min().copied()
    }
}

/// Process-wide cold-start status. Written only by the HTTP client wrapper.
pub static COLD_START: GlobalSignal<ColdStartState> = Signal::global(ColdStartState::default);

/// Called by the HTTP wrapper before a request goes out. Arms the
/// classification timer; the timer never cancels or alters the request.
pub fn request_started() -> Ticket {
    let ticket = COLD_START.write().begin(time::now_ms());
    time::spawn_detached(async move {
        time::sleep_ms(COLD_START_THRESHOLD_MS).await;
        if COLD_START.write().timer_fired(ticket) {
            crate::log_warn!(
                "request {} pending past {}ms, assuming backend cold start",
                ticket,
                COLD_START_THRESHOLD_MS
            );
        }
    });
    ticket
}

/// Called by the HTTP wrapper after the request settles, whatever the outcome.
pub fn request_finished(ticket: Ticket) {
    COLD_START.write().finish(ticket);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_marks_loading_and_stamps_start_time() {
        let mut state = ColdStartState::default();
        assert!(!state.is_loading());

        let t = state.begin(1_000);
        assert!(state.is_loading());
        assert!(!state.is_cold_start());
        assert_eq!(state.request_start_time(), Some(1_000));

        state.finish(t);
        assert!(!state.is_loading());
        assert_eq!(state.request_start_time(), None);
    }

    #[test]
    fn fast_settle_never_classifies_cold() {
        let mut state = ColdStartState::default();
        let t = state.begin(0);
        state.finish(t);
        // Timer fires after the request already settled (t=2.9s case).
        assert!(!state.timer_fired(t));
        assert!(!state.is_cold_start());
    }

    #[test]
    fn slow_request_classifies_cold_until_settle() {
        let mut state = ColdStartState::default();
        let t = state.begin(0);
        // Timer fires while the request is still pending (t=3.1s case).
        assert!(state.timer_fired(t));
        assert!(state.is_cold_start());
        assert!(state.is_loading());

        state.finish(t);
        assert!(!state.is_cold_start());
        assert!(!state.is_loading());
    }

    #[test]
    fn one_settle_does_not_clear_tracking_of_other_requests() {
        let mut state = ColdStartState::default();
        let first = state.begin(0);
        let second = state.begin(50);

        state.finish(second);
        assert!(state.is_loading());
        assert_eq!(state.request_start_time(), Some(0));

        assert!(state.timer_fired(first));
        assert!(state.is_cold_start());
        state.finish(first);
        assert!(!state.is_loading());
        assert!(!state.is_cold_start());
    }

    #[test]
    fn tickets_are_unique_per_request() {
        let mut state = ColdStartState::default();
        let a = state.begin(0);
        let b = state.begin(0);
        assert_ne!(a, b);
    }
}
