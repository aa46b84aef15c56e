//! Bounded per-object position history.

use std::collections::{HashMap, VecDeque};
use std::num::NonZeroUsize;

use crate::counting::bbox::Point;
use crate::counting::detection::RawId;
use crate::counting::error::CountingError;

/// Fixed-capacity FIFO of recent center points for each object.
#[derive(Debug, Clone)]
pub struct TrailBuffer {
    trails: HashMap<RawId, VecDeque<Point>>,
    capacity: NonZeroUsize,
}

impl TrailBuffer {
    /// Fails with `CapacityMisconfiguration` when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, CountingError> {
        let capacity =
            NonZeroUsize::new(capacity).ok_or(CountingError::CapacityMisconfiguration {
                field: "trail_capacity",
                value: 0,
            })?;
        Ok(Self::with_capacity(capacity))
    }

    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            trails: HashMap::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Append `point`, evicting the oldest point once the trail is full.
    pub fn append(&mut self, raw_id: RawId, point: Point) {
        let capacity = self.capacity.get();
        let trail = self
            .trails
            .entry(raw_id)
            .or_insert_with(|| VecDeque::with_capacity(capacity));
        if trail.len() == capacity {
            trail.pop_front();
        }
        trail.push_back(point);
    }

    /// Points for `raw_id`, oldest first. Empty for unknown ids.
    pub fn points_for(&self, raw_id: RawId) -> Vec<Point> {
        self.trails
            .get(&raw_id)
            .map(|t| t.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn len_for(&self, raw_id: RawId) -> usize {
        self.trails.get(&raw_id).map_or(0, VecDeque::len)
    }

    pub fn remove(&mut self, raw_id: RawId) {
        self.trails.remove(&raw_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_within_capacity() {
        let mut trails = TrailBuffer::new(3).unwrap();
        trails.append(1, Point::new(0, 0));
        trails.append(1, Point::new(1, 1));
        assert_eq!(trails.points_for(1), vec![Point::new(0, 0), Point::new(1, 1)]);
        assert!(trails.points_for(2).is_empty());
    }

    #[test]
    fn test_oldest_point_evicted() {
        let mut trails = TrailBuffer::new(2).unwrap();
        for i in 0..5 {
            trails.append(1, Point::new(i, i));
        }
        assert_eq!(trails.len_for(1), 2);
        assert_eq!(trails.len_for(1), trails.capacity());
        assert_eq!(trails.points_for(1), vec![Point::new(3, 3), Point::new(4, 4)]);
    }

    #[test]
    fn test_trails_are_independent() {
        let mut trails = TrailBuffer::new(1).unwrap();
        trails.append(1, Point::new(1, 1));
        trails.append(2, Point::new(2, 2));
        trails.remove(1);
        assert!(trails.points_for(1).is_empty());
        assert_eq!(trails.points_for(2), vec![Point::new(2, 2)]);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(
            TrailBuffer::new(0),
            Err(CountingError::CapacityMisconfiguration {
                field: "trail_capacity",
                value: 0,
            })
        ));
    }

    #[test]
    fn test_capacity_one_keeps_latest() {
        let mut trails = TrailBuffer::with_capacity(NonZeroUsize::MIN);
        trails.append(1, Point::new(1, 1));
        trails.append(1, Point::new(2, 2));
        assert_eq!(trails.capacity(), 1);
        assert_eq!(trails.points_for(1), vec![Point::new(2, 2)]);
    }
}
