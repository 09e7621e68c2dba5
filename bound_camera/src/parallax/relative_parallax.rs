/// RelativeParallax — a layer that maps the camera's progress across the
/// level onto its own extent.
///
/// At the leftmost legal camera position the layer's right part shows and
/// vice versa, scaled down by the depth. The level extent is the loose area
/// of a `BoundaryHolder`, cached by `recalculate_bounds`.

use glam::Vec2;
use crate::boundary::{BoundaryArea, BoundaryHolder};
use crate::error::Result;
use crate::engine_trace;
use super::layer::{scaled_viewport, Parallax, ParallaxConfig};

pub struct RelativeParallax {
    config: ParallaxConfig,
    bounds: BoundaryArea,
}

impl RelativeParallax {
    /// # Errors
    ///
    /// `Error::InvalidConfiguration` if the depth is unusable.
    pub fn new(config: ParallaxConfig) -> Result<Self> {
        Ok(Self {
            config: config.validate()?,
            bounds: BoundaryArea::UNBOUNDED,
        })
    }

    /// Cached level extent.
    pub fn bounds(&self) -> BoundaryArea {
        self.bounds
    }

    /// Re-read the holder's loose area. Returns whether it changed.
    ///
    /// A change shifts the layer on the next reposition.
    pub fn recalculate_bounds(&mut self, holder: &dyn BoundaryHolder) -> bool {
        let loose = holder.loose();
        if loose == self.bounds {
            return false;
        }

        engine_trace!("boundcam::RelativeParallax",
            "Bounds changed: min {:?}, max {:?}", loose.min, loose.max);
        self.bounds = loose;
        true
    }

    /// Camera progress across the legal range on `axis`, in [0, 1] while
    /// the camera stays legal. 0.5 if the axis has no usable range.
    fn progress(&self, axis: usize, camera: Vec2, viewport: Vec2) -> f32 {
        let (Some(min), Some(max)) = (self.bounds.lower(axis), self.bounds.upper(axis)) else {
            return 0.5;
        };

        let half = viewport[axis] / 2.0;
        let (low, high) = (min + half, max - half);
        if high - low <= 0.0 {
            return 0.5;
        }
        (camera[axis] - low) / (high - low)
    }
}

impl Parallax for RelativeParallax {
    fn config(&self) -> &ParallaxConfig {
        &self.config
    }

    fn resize_target(&self, viewport: Vec2) -> Option<Vec2> {
        scaled_viewport(self.config.repeat.axes(), viewport, 2.0)
    }

    fn reposition(&self, camera: Vec2, viewport: Vec2, size: Vec2, current: Vec2) -> Vec2 {
        let mut position = current;

        for (axis, moves) in self.config.style.axes().into_iter().enumerate() {
            if !moves {
                continue;
            }

            let mut percent = self.progress(axis, camera, viewport);
            if self.config.reverse {
                percent = 1.0 - percent;
            }
            percent = (percent - 0.5) / self.config.depth;

            let translate = (size[axis] - viewport[axis]) * percent;
            position[axis] = camera[axis] + self.config.offset[axis] - translate;
        }

        position
    }
}

#[cfg(test)]
#[path = "relative_parallax_tests.rs"]
mod tests;
