//! Cumulative per-raw-id appearance counts.

use std::collections::HashMap;

use crate::counting::detection::RawId;

#[derive(Debug, Clone, Copy)]
struct Appearance {
    count: u32,
    last_seen_frame: u64,
}

/// Counts the frames in which each raw id has been observed.
///
/// Counts never decay: a raw id that reappears after a long absence keeps
/// its prior count. Entries are only dropped through [`evict_idle`].
///
/// [`evict_idle`]: AppearanceCounter::evict_idle
#[derive(Debug, Clone, Default)]
pub struct AppearanceCounter {
    seen: HashMap<RawId, Appearance>,
}

impl AppearanceCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation of `raw_id` in `frame_index` and return the
    /// cumulative count. The first call for a raw id returns 1.
    pub fn observe(&mut self, raw_id: RawId, frame_index: u64) -> u32 {
        let entry = self.seen.entry(raw_id).or_insert(Appearance {
            count: 0,
            last_seen_frame: frame_index,
        });
        entry.count = entry.count.saturating_add(1);
        entry.last_seen_frame = frame_index;
        entry.count
    }

    pub fn count(&self, raw_id: RawId) -> u32 {
        self.seen.get(&raw_id).map_or(0, |a| a.count)
    }

    pub fn last_seen(&self, raw_id: RawId) -> Option<u64> {
        self.seen.get(&raw_id).map(|a| a.last_seen_frame)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Drop every raw id last seen more than `max_idle` frames before
    /// `current_frame`, returning the evicted ids.
    pub fn evict_idle(&mut self, current_frame: u64, max_idle: u64) -> Vec<RawId> {
        let mut evicted = Vec::new();
        self.seen.retain(|&raw_id, a| {
            let keep = current_frame.saturating_sub(a.last_seen_frame) <= max_idle;
            if !keep {
                evicted.push(raw_id);
            }
            keep
        });
        evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observe_accumulates() {
        let mut counter = AppearanceCounter::new();
        assert_eq!(counter.observe(7, 1), 1);
        assert_eq!(counter.observe(7, 2), 2);
        assert_eq!(counter.observe(9, 2), 1);
        // Long gap does not reset the count
        assert_eq!(counter.observe(7, 500), 3);
        assert_eq!(counter.count(7), 3);
        assert_eq!(counter.count(42), 0);
        assert_eq!(counter.last_seen(7), Some(500));
    }

    #[test]
    fn test_evict_idle() {
        let mut counter = AppearanceCounter::new();
        counter.observe(1, 1);
        counter.observe(2, 5);

        assert!(counter.evict_idle(6, 5).is_empty());
        assert_eq!(counter.evict_idle(7, 5), vec![1]);
        assert_eq!(counter.len(), 1);
        assert_eq!(counter.count(1), 0);
        assert_eq!(counter.count(2), 1);
    }
}
