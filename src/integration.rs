//! Integration module for connecting detector/tracker backends with the counting core.
//!
//! The core never looks at pixels. This module provides the trait a
//! detection + tracking backend implements, conversion helpers for its
//! output, and a pipeline that runs both per frame.

mod builder;
mod detector;
mod filter;
mod pipeline;

pub use builder::DetectionBuilder;
pub use detector::{DetectionSource, IntoDetections};
pub use filter::{COCO_VEHICLE_CLASSES, ClassFilter, coco_vehicle_names};
pub use pipeline::CountingPipeline;
