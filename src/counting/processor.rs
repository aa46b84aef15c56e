//! Frame-at-a-time orchestration of counting, confirmation and trails.

use std::collections::HashSet;

use tracing::{debug, trace, warn};

use crate::counting::appearance::AppearanceCounter;
use crate::counting::bbox::Point;
use crate::counting::config::{CountingConfig, DEFAULT_TRAIL_CAPACITY};
use crate::counting::detection::{Detection, RawId, StableId};
use crate::counting::error::{CountingError, MalformedReason};
use crate::counting::object_state::TrackedObjectState;
use crate::counting::registrar::IdentityRegistrar;
use crate::counting::result::{Annotation, FrameResult, RejectedDetection};
use crate::counting::trail::TrailBuffer;

/// Turns raw tracker output into stable identities, trails and a unique count.
///
/// One instance per stream. All state is owned here and mutated only through
/// [`process_frame`](Self::process_frame); callers that need parallelism
/// should feed frames to a single owner rather than share an instance.
#[derive(Debug, Clone)]
pub struct FrameProcessor {
    config: CountingConfig,
    appearances: AppearanceCounter,
    registrar: IdentityRegistrar,
    trails: TrailBuffer,
    frame_index: u64,
}

impl FrameProcessor {
    pub fn new(config: CountingConfig) -> Result<Self, CountingError> {
        config.validate()?;
        let trails = TrailBuffer::new(config.trail_capacity)?;
        Ok(Self::with_trails(config, trails))
    }

    fn with_trails(config: CountingConfig, trails: TrailBuffer) -> Self {
        Self {
            config,
            appearances: AppearanceCounter::new(),
            registrar: IdentityRegistrar::new(),
            trails,
            frame_index: 0,
        }
    }

    pub fn process_frame(&mut self, detections: Vec<Detection>) -> FrameResult {
        self.frame_index += 1;

        let mut annotations = Vec::new();
        let mut rejected = Vec::new();
        let mut seen_this_frame = HashSet::with_capacity(detections.len());

        for det in detections {
            // Step 1: Skip anything structurally unusable
            let check = det.validate().and_then(|()| {
                if seen_this_frame.insert(det.raw_id) {
                    Ok(())
                } else {
                    Err(CountingError::MalformedDetection {
                        raw_id: det.raw_id,
                        reason: MalformedReason::DuplicateRawId,
                    })
                }
            });
            match check {
                Ok(()) => {}
                Err(CountingError::MalformedDetection { raw_id, reason }) => {
                    warn!(
                        raw_id,
                        %reason,
                        frame = self.frame_index,
                        "skipping malformed detection"
                    );
                    rejected.push(RejectedDetection {
                        detection: det,
                        reason,
                    });
                    continue;
                }
                Err(err) => {
                    warn!(
                        raw_id = det.raw_id,
                        %err,
                        frame = self.frame_index,
                        "skipping detection"
                    );
                    continue;
                }
            }

            // Step 2: Count and try to confirm
            let center = det.bbox.center();
            let count = self.appearances.observe(det.raw_id, self.frame_index);
            let Some(stable_id) = self.registrar.confirm_if_eligible(
                det.raw_id,
                count,
                self.config.confirmation_threshold,
            ) else {
                continue;
            };

            // Step 3: Confirmed objects grow their trail and are emitted
            self.trails.append(det.raw_id, center);
            annotations.push(Annotation {
                stable_id,
                raw_id: det.raw_id,
                bbox: det.bbox,
                class_id: det.class_id,
                confidence: det.confidence,
                center,
                trail: self.trails.points_for(det.raw_id),
            });
        }

        // Step 4: Reclaim objects that have gone quiet
        if let Some(max_idle) = self.config.max_idle_frames {
            self.evict_idle(max_idle);
        }

        let result = FrameResult {
            frame_index: self.frame_index,
            annotations,
            unique_count: self.registrar.confirmed_count(),
            rejected,
        };
        trace!(
            frame = result.frame_index,
            annotations = result.annotations.len(),
            rejected = result.rejected.len(),
            unique_count = result.unique_count,
            "processed frame"
        );
        result
    }

    fn evict_idle(&mut self, max_idle: u64) {
        let evicted = self.appearances.evict_idle(self.frame_index, max_idle);
        if evicted.is_empty() {
            return;
        }
        for raw_id in &evicted {
            self.registrar.release(*raw_id);
            self.trails.remove(*raw_id);
        }
        debug!(
            evicted = evicted.len(),
            retained = self.appearances.len(),
            frame = self.frame_index,
            "evicted idle objects"
        );
    }

    pub fn config(&self) -> &CountingConfig {
        &self.config
    }

    /// Number of frames processed so far.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn unique_count(&self) -> u64 {
        self.registrar.confirmed_count()
    }

    /// Number of raw ids whose state is currently retained.
    pub fn tracked_len(&self) -> usize {
        self.appearances.len()
    }

    pub fn stable_id(&self, raw_id: RawId) -> Option<StableId> {
        self.registrar.stable_id(raw_id)
    }

    pub fn trail(&self, raw_id: RawId) -> Vec<Point> {
        self.trails.points_for(raw_id)
    }

    pub fn object(&self, raw_id: RawId) -> Option<TrackedObjectState> {
        let last_seen_frame = self.appearances.last_seen(raw_id)?;
        Some(TrackedObjectState {
            raw_id,
            appearance_count: self.appearances.count(raw_id),
            stable_id: self.registrar.stable_id(raw_id),
            trail: self.trails.points_for(raw_id),
            last_seen_frame,
        })
    }
}

impl Default for FrameProcessor {
    fn default() -> Self {
        Self::with_trails(
            CountingConfig::default(),
            TrailBuffer::with_capacity(DEFAULT_TRAIL_CAPACITY),
        )
    }
}
