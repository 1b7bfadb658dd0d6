//! Creation-time identifiers.

use chrono::Utc;

/// Id generator for threads and messages.
///
/// Ids are creation timestamps in unix milliseconds, bumped past the last
/// issued value so two ids taken in the same millisecond never collide.
#[derive(Debug, Clone)]
pub struct IdSeq {
    last: u64,
}

impl IdSeq {
    /// Creates a sequence that only issues ids greater than `floor`.
    pub fn starting_after(floor: u64) -> Self {
        Self { last: floor }
    }

    pub fn next_id(&mut self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        let id = now.max(self.last.saturating_add(1));
        self.last = id;
        id
    }
}

impl Default for IdSeq {
    fn default() -> Self {
        Self::starting_after(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_strictly_increasing() {
        let mut seq = IdSeq::default();
        let mut prev = seq.next_id();
        for _ in 0..1000 {
            let id = seq.next_id();
            assert!(id > prev);
            prev = id;
        }
    }

    #[test]
    fn test_ids_skip_past_floor() {
        let mut seq = IdSeq::starting_after(u64::MAX - 10);
        assert_eq!(seq.next_id(), u64::MAX - 9);
    }
}
