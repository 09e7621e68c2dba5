/// Viewport sources — how much of the world a camera shows.

use glam::Vec2;
use crate::error::Result;
use crate::engine_bail;

/// Projection that reports the visible world-space extent.
///
/// Read once per tick by `FramingCamera::tick`, before repositioning.
pub trait ViewportSource {
    /// Visible width (x) and height (y) in world units
    fn coverage(&self) -> Vec2;
}

/// A fixed extent, for hosts that compute coverage themselves.
impl ViewportSource for Vec2 {
    fn coverage(&self) -> Vec2 {
        *self
    }
}

/// Orthographic projection parameters.
///
/// `orthographic_size` is half the visible height, `aspect` is width/height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthographicProjection {
    aspect: f32,
    orthographic_size: f32,
}

impl OrthographicProjection {
    /// # Errors
    ///
    /// `Error::InvalidViewport` unless both values are finite and positive.
    pub fn new(aspect: f32, orthographic_size: f32) -> Result<Self> {
        if !(aspect.is_finite() && aspect > 0.0) {
            engine_bail!("boundcam::OrthographicProjection", InvalidViewport,
                "aspect must be finite and positive, got {}", aspect);
        }
        if !(orthographic_size.is_finite() && orthographic_size > 0.0) {
            engine_bail!("boundcam::OrthographicProjection", InvalidViewport,
                "orthographic size must be finite and positive, got {}", orthographic_size);
        }
        Ok(Self { aspect, orthographic_size })
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn orthographic_size(&self) -> f32 {
        self.orthographic_size
    }
}

impl ViewportSource for OrthographicProjection {
    fn coverage(&self) -> Vec2 {
        Vec2::new(
            self.aspect * self.orthographic_size * 2.0,
            self.orthographic_size * 2.0,
        )
    }
}

#[cfg(test)]
#[path = "viewport_tests.rs"]
mod tests;
