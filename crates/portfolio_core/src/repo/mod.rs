//! Repository layer: canonical state owners over the key-value store.
//!
//! # Responsibility
//! - Own the in-memory record lists and mirror them to persisted JSON blobs.
//! - Return semantic errors (`NotFound`, validation failures) in addition to
//!   store transport errors.
//!
//! # Invariants
//! - Write paths validate drafts before any persistence.
//! - In-memory state only advances after a successful persist, so it always
//!   equals the last committed blob.

use chrono::{DateTime, Utc};

pub mod contact_log;
pub mod project_repo;

/// Issues unique, monotonically increasing ids derived from the clock.
///
/// Ids are stringified epoch milliseconds; when the clock has not advanced
/// past the last issued (or observed) value, the next id is bumped by one
/// millisecond instead of colliding.
#[derive(Debug, Default)]
pub(crate) struct IdSequence {
    last_ms: i64,
}

impl IdSequence {
    /// Records an already-used id so future ids stay above it.
    ///
    /// Non-numeric ids (none are produced by this system) are ignored.
    pub(crate) fn observe(&mut self, id: &str) {
        if let Ok(ms) = id.parse::<i64>() {
            self.last_ms = self.last_ms.max(ms);
        }
    }

    /// Returns the next unused id for the given instant.
    pub(crate) fn next(&mut self, now: DateTime<Utc>) -> String {
        let mut ms = now.timestamp_millis();
        if ms <= self.last_ms {
            ms = self.last_ms + 1;
        }
        self.last_ms = ms;
        ms.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::IdSequence;
    use chrono::{TimeZone, Utc};

    #[test]
    fn ids_are_unique_for_a_frozen_clock() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let mut seq = IdSequence::default();

        let first = seq.next(now);
        let second = seq.next(now);
        assert_eq!(first, "1700000000000");
        assert_eq!(second, "1700000000001");
    }

    #[test]
    fn observed_ids_are_never_reissued() {
        let mut seq = IdSequence::default();
        seq.observe("1700000000005");
        seq.observe("2");
        seq.observe("not-a-number");

        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        assert_eq!(seq.next(now), "1700000000006");
    }
}
