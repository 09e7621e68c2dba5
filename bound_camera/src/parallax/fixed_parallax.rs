/// FixedParallax — a tiled layer that scrolls at a constant rate.
///
/// The layer wraps every `depth` world units of camera travel, so it needs
/// no level bounds. It is sized to three viewports on each moving axis.

use glam::Vec2;
use crate::error::Result;
use super::layer::{scaled_viewport, Parallax, ParallaxConfig};

pub struct FixedParallax {
    config: ParallaxConfig,
}

impl FixedParallax {
    /// # Errors
    ///
    /// `Error::InvalidConfiguration` if the depth is unusable.
    pub fn new(config: ParallaxConfig) -> Result<Self> {
        Ok(Self { config: config.validate()? })
    }
}

impl Parallax for FixedParallax {
    fn config(&self) -> &ParallaxConfig {
        &self.config
    }

    fn resize_target(&self, viewport: Vec2) -> Option<Vec2> {
        scaled_viewport(self.config.style.axes(), viewport, 3.0)
    }

    fn reposition(&self, camera: Vec2, _viewport: Vec2, size: Vec2, current: Vec2) -> Vec2 {
        let mut position = current;

        for (axis, moves) in self.config.style.axes().into_iter().enumerate() {
            if !moves {
                continue;
            }

            let mut percent = (camera[axis] % self.config.depth) / self.config.depth;
            if percent < 0.0 {
                percent += 1.0;
            }

            let mut translate = size[axis] * (percent - 0.5);
            if self.config.reverse {
                translate = -translate;
            }
            position[axis] = camera[axis] - translate;
        }

        position
    }
}

#[cfg(test)]
#[path = "fixed_parallax_tests.rs"]
mod tests;
