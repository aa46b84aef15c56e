use crate::counting::bbox::Point;
use crate::counting::detection::{RawId, StableId};

/// Confirmation state of a tracked object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectPhase {
    /// Seen, but not yet often enough to be counted or displayed
    #[default]
    Pending,
    /// Holds a stable identity
    Confirmed,
}

/// Snapshot of everything the processor holds for one raw id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedObjectState {
    pub raw_id: RawId,
    /// Frames in which the raw id was observed
    pub appearance_count: u32,
    pub stable_id: Option<StableId>,
    /// Recent centers, oldest first. Empty while pending.
    pub trail: Vec<Point>,
    pub last_seen_frame: u64,
}

impl TrackedObjectState {
    pub fn phase(&self) -> ObjectPhase {
        match self.stable_id {
            Some(_) => ObjectPhase::Confirmed,
            None => ObjectPhase::Pending,
        }
    }
}
