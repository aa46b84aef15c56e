use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::counting::error::CountingError;

pub(crate) const DEFAULT_TRAIL_CAPACITY: NonZeroUsize = NonZeroUsize::new(30).unwrap();

/// Configuration for the [`FrameProcessor`](crate::counting::FrameProcessor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountingConfig {
    /// Appearances required before a raw id gets a stable identity.
    pub confirmation_threshold: u32,
    /// Maximum number of points kept per trail.
    pub trail_capacity: usize,
    /// Evict objects not observed for more than this many frames.
    ///
    /// `None` keeps every object for the whole run. Eviction reclaims the
    /// identity binding too, so a raw id that returns after eviction is
    /// confirmed again under a new stable id.
    pub max_idle_frames: Option<u64>,
}

impl Default for CountingConfig {
    fn default() -> Self {
        Self {
            confirmation_threshold: 3,
            trail_capacity: DEFAULT_TRAIL_CAPACITY.get(),
            max_idle_frames: None,
        }
    }
}

impl CountingConfig {
    pub fn with_confirmation_threshold(mut self, threshold: u32) -> Self {
        self.confirmation_threshold = threshold;
        self
    }

    pub fn with_trail_capacity(mut self, capacity: usize) -> Self {
        self.trail_capacity = capacity;
        self
    }

    pub fn with_max_idle_frames(mut self, frames: u64) -> Self {
        self.max_idle_frames = Some(frames);
        self
    }

    pub fn validate(&self) -> Result<(), CountingError> {
        if self.confirmation_threshold == 0 {
            return Err(CountingError::CapacityMisconfiguration {
                field: "confirmation_threshold",
                value: 0,
            });
        }
        if self.trail_capacity == 0 {
            return Err(CountingError::CapacityMisconfiguration {
                field: "trail_capacity",
                value: 0,
            });
        }
        if self.max_idle_frames == Some(0) {
            return Err(CountingError::CapacityMisconfiguration {
                field: "max_idle_frames",
                value: 0,
            });
        }
        Ok(())
    }
}
