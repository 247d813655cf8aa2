pub mod autoscroll;
pub mod behavior;
pub mod document;
pub mod emotion;
pub mod timecode;
pub mod timeline;

pub use behavior::{BehaviorMarker, BehaviorNav, BehaviorTrack};
pub use document::{ClipAnnotation, Recording, Speaker};
pub use timeline::{ClipInterval, ClipTimeline, EPSILON};
