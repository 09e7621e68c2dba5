/*!
# Bound Camera

Boundary-constrained 2D camera framing.

Level objects register directional limits (TOP, BOTTOM, LEFT, RIGHT and
corners) with a camera. Every tick the camera refreshes the limits, reduces
them to the most restrictive rectangle (the tight area) and clamps its
position so the viewport stays inside it. The least restrictive rectangle
(the loose area) is published for background layers.

## Architecture

- **LimitRegistry**: Owns limits, reduces tight/loose areas, prunes dead limits
- **ManipulatorTable**: Arena of limit updaters, addressed by generational keys
- **StaticBoundary / DynamicBoundary**: Level objects producing limits
- **FramingCamera**: Per-tick refresh, reduction and clamping
- **RelativeParallax / FixedParallax**: Background layers reading camera state
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod boundary;
pub mod camera;
pub mod parallax;

// Main boundcam namespace module
pub mod boundcam {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger registration
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Limits, registries and producers
    pub mod boundary {
        pub use crate::boundary::*;
    }

    // Camera, viewport sources and tracking
    pub mod camera {
        pub use crate::camera::*;
    }

    // Background layers
    pub mod parallax {
        pub use crate::parallax::*;
    }
}

// Re-export math library at crate root
pub use glam;
