/// Target tracking — dampened follow toward a moving target.
///
/// The tracker only produces a desired camera position. Clamping into the
/// legal area happens afterwards in `FramingCamera::reposition`.

use glam::Vec2;

/// Hook that adjusts the camera position between two clamps.
///
/// Typically implemented by the tracked object to look ahead of itself.
pub trait CameraManipulator {
    fn manipulate_camera(&mut self, position: &mut Vec2);
}

/// Follow behavior settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackingConfig {
    /// Distance (per axis) the target must move before the camera chases it
    pub distance: f32,
    /// Dampening speed; 0 or less snaps straight to the target
    pub speed: f32,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            distance: 0.0,
            speed: 1.0,
        }
    }
}

/// Dampened follower state
#[derive(Debug, Clone)]
pub struct CameraTracker {
    config: TrackingConfig,
    wanted: Vec2,
    dampened: Vec2,
}

impl CameraTracker {
    /// Start tracking from `start` (usually the camera position).
    pub fn new(config: TrackingConfig, start: Vec2) -> Self {
        Self {
            config,
            wanted: start,
            dampened: start,
        }
    }

    pub fn config(&self) -> &TrackingConfig {
        &self.config
    }

    /// Position the tracker is easing toward.
    pub fn wanted(&self) -> Vec2 {
        self.wanted
    }

    /// Current dampened position.
    pub fn position(&self) -> Vec2 {
        self.dampened
    }

    /// Jump to `position` without easing.
    pub fn reset(&mut self, position: Vec2) {
        self.wanted = position;
        self.dampened = position;
    }

    /// Advance one tick toward `target` and return the dampened position.
    pub fn follow(&mut self, target: Vec2, delta_time: f32) -> Vec2 {
        let offset = (self.dampened - target).abs();
        if offset.x >= self.config.distance || offset.y >= self.config.distance {
            self.wanted = target;
        }

        if self.config.speed > 0.0 {
            let t = (self.config.speed * delta_time).clamp(0.0, 1.0);
            self.dampened = self.dampened.lerp(self.wanted, t);
        } else {
            self.dampened = self.wanted;
        }
        self.dampened
    }
}

#[cfg(test)]
#[path = "tracking_tests.rs"]
mod tests;
