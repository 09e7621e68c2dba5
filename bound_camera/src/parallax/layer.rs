/// Shared parallax types: axis flags, layer configuration and the
/// `Parallax` trait implemented by every layer kind.

use bitflags::bitflags;
use glam::Vec2;
use crate::error::Result;
use crate::engine_bail;

bitflags! {
    /// Axes a layer moves along.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ParallaxStyle: u8 {
        const HORIZONTAL = 0x01;
        const VERTICAL = 0x02;
        const BOTH = Self::HORIZONTAL.bits() | Self::VERTICAL.bits();
    }
}

bitflags! {
    /// Axes a relative layer is tiled along.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ParallaxRepeat: u8 {
        const HORIZONTAL = 0x01;
        const VERTICAL = 0x02;
        const BOTH = Self::HORIZONTAL.bits() | Self::VERTICAL.bits();
    }
}

impl ParallaxStyle {
    /// Per-axis flags, indexed like `Vec2` (0 = x, 1 = y).
    pub fn axes(self) -> [bool; 2] {
        [self.contains(Self::HORIZONTAL), self.contains(Self::VERTICAL)]
    }
}

impl ParallaxRepeat {
    /// Per-axis flags, indexed like `Vec2` (0 = x, 1 = y).
    pub fn axes(self) -> [bool; 2] {
        [self.contains(Self::HORIZONTAL), self.contains(Self::VERTICAL)]
    }
}

impl Default for ParallaxStyle {
    fn default() -> Self {
        Self::HORIZONTAL
    }
}

impl Default for ParallaxRepeat {
    fn default() -> Self {
        Self::empty()
    }
}

/// Configuration of a parallax layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxConfig {
    /// Parallax depth; larger values move the layer less. Must be finite
    /// and non-zero.
    pub depth: f32,
    /// Move the layer in the opposite direction
    pub reverse: bool,
    /// Axes the layer moves along
    pub style: ParallaxStyle,
    /// Axes the layer is tiled along (relative layers only)
    pub repeat: ParallaxRepeat,
    /// World-space offset added to the layer position (relative layers only)
    pub offset: Vec2,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            depth: 10.0,
            reverse: false,
            style: ParallaxStyle::default(),
            repeat: ParallaxRepeat::default(),
            offset: Vec2::ZERO,
        }
    }
}

impl ParallaxConfig {
    /// Check the configuration before building a layer from it.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfiguration` if `depth` is zero, infinite or NaN.
    pub fn validate(self) -> Result<Self> {
        if !self.depth.is_finite() || self.depth == 0.0 {
            engine_bail!("boundcam::ParallaxConfig", InvalidConfiguration,
                "parallax depth must be finite and non-zero, got {}", self.depth);
        }
        Ok(self)
    }
}

/// A background layer driven by the camera.
pub trait Parallax {
    fn config(&self) -> &ParallaxConfig;

    /// Layer size needed to cover `viewport`, or `None` when the layer
    /// does not need resizing. Axes left at 0 keep their current size.
    fn resize_target(&self, viewport: Vec2) -> Option<Vec2>;

    /// New layer position for a camera at `camera` showing `viewport`.
    ///
    /// `size` is the layer's world-space size and `current` its position
    /// before the call; axes outside the style keep `current`.
    fn reposition(&self, camera: Vec2, viewport: Vec2, size: Vec2, current: Vec2) -> Vec2;
}

/// Scale `viewport` by `factor` on the flagged axes, `None` if no axis is
/// flagged.
pub(super) fn scaled_viewport(axes: [bool; 2], viewport: Vec2, factor: f32) -> Option<Vec2> {
    if !axes[0] && !axes[1] {
        return None;
    }
    Some(Vec2::new(
        if axes[0] { viewport.x * factor } else { 0.0 },
        if axes[1] { viewport.y * factor } else { 0.0 },
    ))
}

#[cfg(test)]
#[path = "layer_tests.rs"]
mod tests;
