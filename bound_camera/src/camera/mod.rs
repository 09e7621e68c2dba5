//! Camera module — the framing camera and the pieces it consumes.
//!
//! `FramingCamera` owns a `LimitRegistry` and clamps itself into the tight
//! area every tick. Viewport sources, tracking and debug settings are
//! passed in by the host; the camera does not discover them.

mod framing_camera;
mod viewport;
mod tracking;
mod debug;

pub use framing_camera::FramingCamera;
pub use viewport::{ViewportSource, OrthographicProjection};
pub use tracking::{CameraManipulator, CameraTracker, TrackingConfig};
pub use debug::DebugSettings;
