//! Stable object identities, bounded motion trails and unique-object
//! counting on top of a per-frame multi-object tracker.
//!
//! Raw tracker ids are volatile and noisy. [`FrameProcessor`] only trusts an
//! id once it has been seen in enough frames, then gives it a sequential
//! stable id, keeps a short trail of its centers and counts it exactly once.

pub mod counting;
pub mod integration;

pub use counting::{
    Annotation, BBox, CountingConfig, CountingError, Detection, FrameProcessor, FrameResult,
    MalformedReason, ObjectPhase, Point, RawId, StableId, TrackedObjectState,
};
pub use integration::{
    ClassFilter, CountingPipeline, DetectionBuilder, DetectionSource, IntoDetections,
};
