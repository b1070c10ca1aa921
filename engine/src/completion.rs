//! Pending-completion tracking.
//!
//! Independent timers race: whichever fires first would mutate state first,
//! so rapid submissions could interleave. Instead, every scheduled
//! completion is an explicit pending operation with a submission sequence
//! number and an abort handle, and payloads are applied strictly in
//! submission order. A completion that arrives early waits in a reorder
//! buffer until its predecessors have been applied.

use std::collections::{BTreeMap, HashMap};

use futures_util::future::AbortHandle;
use maquette_types::NonEmptyText;

/// A completion payload delivered back to the app task by a timer.
#[derive(Debug)]
pub(crate) enum CompletionEvent {
    ChatReply { seq: u64, text: NonEmptyText },
    ImageReady {
        seq: u64,
        prompt: NonEmptyText,
        url: String,
    },
}

impl CompletionEvent {
    pub(crate) fn seq(&self) -> u64 {
        match self {
            CompletionEvent::ChatReply { seq, .. } | CompletionEvent::ImageReady { seq, .. } => {
                *seq
            }
        }
    }
}

/// In-order delivery of out-of-order completions for one panel.
///
/// Sequence numbers are allocated at submission time. `accept` buffers the
/// payload and returns every payload that has become deliverable, oldest
/// first. `cancel_all` aborts outstanding timers and fast-forwards the
/// delivery cursor so late arrivals from aborted tasks are ignored.
#[derive(Debug)]
pub(crate) struct FifoSequencer<T> {
    next_seq: u64,
    next_deliver: u64,
    buffered: BTreeMap<u64, T>,
    pending: HashMap<u64, AbortHandle>,
}

impl<T> FifoSequencer<T> {
    pub(crate) fn new() -> Self {
        Self {
            next_seq: 0,
            next_deliver: 0,
            buffered: BTreeMap::new(),
            pending: HashMap::new(),
        }
    }

    /// Register a new pending completion and return its sequence number.
    pub(crate) fn begin(&mut self, abort: AbortHandle) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.insert(seq, abort);
        seq
    }

    /// Record an arrived payload; return everything now deliverable, in
    /// submission order. Stale sequence numbers (cancelled before arrival)
    /// are dropped.
    pub(crate) fn accept(&mut self, seq: u64, payload: T) -> Vec<T> {
        if seq < self.next_deliver {
            return Vec::new();
        }
        self.pending.remove(&seq);
        self.buffered.insert(seq, payload);

        let mut ready = Vec::new();
        while let Some(payload) = self.buffered.remove(&self.next_deliver) {
            ready.push(payload);
            self.next_deliver += 1;
        }
        ready
    }

    /// Abort every outstanding timer and drop buffered payloads.
    ///
    /// The delivery cursor jumps past all allocated sequence numbers, so an
    /// event from a task that had already sent before the abort landed is
    /// recognized as stale in `accept`.
    pub(crate) fn cancel_all(&mut self) -> usize {
        let cancelled = self.pending.len() + self.buffered.len();
        for (_, abort) in self.pending.drain() {
            abort.abort();
        }
        self.buffered.clear();
        self.next_deliver = self.next_seq;
        cancelled
    }

    /// Completions submitted but not yet applied.
    pub(crate) fn in_flight(&self) -> usize {
        (self.next_seq - self.next_deliver) as usize
    }
}

#[cfg(test)]
mod tests {
    use futures_util::future::AbortHandle;

    use super::FifoSequencer;

    fn handle() -> AbortHandle {
        AbortHandle::new_pair().0
    }

    #[test]
    fn delivers_in_submission_order() {
        let mut seq = FifoSequencer::new();
        let first = seq.begin(handle());
        let second = seq.begin(handle());

        // Second timer fires first; it must wait for its predecessor.
        assert!(seq.accept(second, "b").is_empty());
        assert_eq!(seq.accept(first, "a"), vec!["a", "b"]);
        assert_eq!(seq.in_flight(), 0);
    }

    #[test]
    fn cancel_all_ignores_late_arrivals() {
        let mut seq = FifoSequencer::new();
        let first = seq.begin(handle());
        assert_eq!(seq.cancel_all(), 1);
        assert!(seq.accept(first, "late").is_empty());
        assert_eq!(seq.in_flight(), 0);

        // New submissions after a cancel deliver normally.
        let next = seq.begin(handle());
        assert_eq!(seq.accept(next, "fresh"), vec!["fresh"]);
    }

    #[test]
    fn in_flight_counts_buffered_and_pending() {
        let mut seq = FifoSequencer::new();
        let _first = seq.begin(handle());
        let second = seq.begin(handle());
        assert_eq!(seq.in_flight(), 2);
        assert!(seq.accept(second, "b").is_empty());
        assert_eq!(seq.in_flight(), 2);
    }
}
