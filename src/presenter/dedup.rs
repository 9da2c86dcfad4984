use std::collections::HashSet;

use uuid::Uuid;

/// Quiz ids presented since the last seek.
///
/// The set only grows within one seek-delimited pass and is cleared
/// atomically on every seek, so a viewer scrubbing back past a trigger
/// second sees the quiz again.
#[derive(Debug, Default)]
pub struct DedupTracker {
    shown: HashSet<Uuid>,
}

impl DedupTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_shown(&self, id: Uuid) -> bool {
        self.shown.contains(&id)
    }

    /// Record `id` as shown. Idempotent.
    pub fn mark_shown(&mut self, id: Uuid) {
        self.shown.insert(id);
    }

    /// Forget everything shown so far.
    pub fn reset(&mut self) {
        self.shown.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_and_query() {
        let mut tracker = DedupTracker::new();
        let id = Uuid::new_v4();

        assert!(!tracker.has_shown(id));
        tracker.mark_shown(id);
        assert!(tracker.has_shown(id));

        // Marking again changes nothing.
        tracker.mark_shown(id);
        assert!(tracker.has_shown(id));
    }

    #[test]
    fn test_reset_clears_all_ids() {
        let mut tracker = DedupTracker::new();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        tracker.mark_shown(first);
        tracker.mark_shown(second);

        tracker.reset();

        assert!(!tracker.has_shown(first));
        assert!(!tracker.has_shown(second));
    }
}
