//! Parallax module — background layers positioned from camera state
//!
//! Layers are pure consumers: they read the camera position, its viewport
//! and (for `RelativeParallax`) the loose area published by a
//! `BoundaryHolder`. Nothing here writes back into a limit registry.

mod layer;
mod relative_parallax;
mod fixed_parallax;

pub use layer::{Parallax, ParallaxConfig, ParallaxStyle, ParallaxRepeat};
pub use relative_parallax::RelativeParallax;
pub use fixed_parallax::FixedParallax;
