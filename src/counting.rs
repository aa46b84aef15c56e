mod appearance;
mod bbox;
mod config;
mod detection;
mod error;
mod object_state;
mod processor;
mod registrar;
mod result;
mod trail;

pub use appearance::AppearanceCounter;
pub use bbox::{BBox, Point};
pub use config::CountingConfig;
pub use detection::{Detection, RawId, StableId};
pub use error::{CountingError, MalformedReason};
pub use object_state::{ObjectPhase, TrackedObjectState};
pub use processor::FrameProcessor;
pub use registrar::IdentityRegistrar;
pub use result::{Annotation, FrameResult, RejectedDetection};
pub use trail::TrailBuffer;
