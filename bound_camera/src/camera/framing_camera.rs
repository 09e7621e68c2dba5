/// FramingCamera — a 2D camera kept inside the area its limits allow.
///
/// Each tick:
/// 1. read the viewport extent from the projection
/// 2. refresh every limit, pruning the registry if a dead one was seen
/// 3. reduce the tight area (eagerly) and invalidate the loose area
/// 4. clamp the position so the viewport stays inside the tight area
///
/// The loose area is only reduced when someone reads it, then cached until
/// the next invalidation.

use std::cell::Cell;
use glam::Vec2;
use crate::boundary::{
    BoundaryArea, BoundaryHolder, LimitRegistry, Manipulator, ManipulatorTable,
};
use crate::{engine_trace, engine_warn};
use super::debug::DebugSettings;
use super::tracking::{CameraManipulator, CameraTracker, TrackingConfig};
use super::viewport::ViewportSource;

const AXIS_NAMES: [&str; 2] = ["x", "y"];

/// Camera clamped to the tight area of its registered limits.
pub struct FramingCamera {
    registry: LimitRegistry,
    position: Vec2,
    /// Visible world-space width/height
    viewport: Vec2,
    tight: BoundaryArea,
    loose: Cell<BoundaryArea>,
    loose_stale: Cell<bool>,
    tracker: Option<CameraTracker>,
    manipulator: Option<Box<dyn CameraManipulator>>,
    /// Per axis: viewport wider than the tight area on the last reposition
    degenerate: [bool; 2],
}

impl FramingCamera {
    /// Create a camera at `position` showing `viewport` world units.
    pub fn new(position: Vec2, viewport: Vec2) -> Self {
        Self {
            registry: LimitRegistry::new(),
            position,
            viewport,
            tight: BoundaryArea::UNBOUNDED,
            loose: Cell::new(BoundaryArea::UNBOUNDED),
            loose_stale: Cell::new(true),
            tracker: None,
            manipulator: None,
            degenerate: [false; 2],
        }
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Registered limits.
    pub fn registry(&self) -> &LimitRegistry {
        &self.registry
    }

    /// Registered limits, mutable. Invalidates the cached loose area.
    pub fn registry_mut(&mut self) -> &mut LimitRegistry {
        self.loose_stale.set(true);
        &mut self.registry
    }

    /// Tight area from the last `recalculate`.
    pub fn tight(&self) -> BoundaryArea {
        self.tight
    }

    /// Loose area, reduced on first read after an invalidation.
    pub fn loose(&self) -> BoundaryArea {
        if self.loose_stale.get() {
            self.loose.set(self.registry.reduce_loose());
            self.loose_stale.set(false);
        }
        self.loose.get()
    }

    pub fn tracker(&self) -> Option<&CameraTracker> {
        self.tracker.as_ref()
    }

    /// Whether the viewport did not fit the tight area on `axis` (0 = x, 1 = y)
    /// during the last reposition.
    ///
    /// # Panics
    ///
    /// Panics if `axis` is greater than 1.
    pub fn is_degenerate(&self, axis: usize) -> bool {
        self.degenerate[axis]
    }

    // ===== SETTERS =====

    /// Teleport the camera. Not clamped until the next reposition.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        if let Some(tracker) = &mut self.tracker {
            tracker.reset(position);
        }
    }

    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    /// Enable dampened tracking starting from the current position, or
    /// disable it with `None`.
    pub fn set_tracking(&mut self, config: Option<TrackingConfig>) {
        self.tracker = config.map(|config| CameraTracker::new(config, self.position));
    }

    /// Install or remove the camera manipulator hook.
    pub fn set_manipulator(&mut self, manipulator: Option<Box<dyn CameraManipulator>>) {
        self.manipulator = manipulator;
    }

    // ===== TICK =====

    /// Run one full simulation step.
    pub fn tick<M: Manipulator>(
        &mut self,
        manipulators: &mut ManipulatorTable<M>,
        viewport_source: &dyn ViewportSource,
    ) {
        self.refresh_viewport(viewport_source);
        self.recalculate(manipulators);
        self.reposition();
    }

    /// Read the viewport extent from a projection.
    ///
    /// A non-finite or negative coverage is ignored and the previous
    /// viewport kept.
    pub fn refresh_viewport(&mut self, viewport_source: &dyn ViewportSource) {
        let coverage = viewport_source.coverage();
        if !coverage.is_finite() || coverage.min_element() < 0.0 {
            engine_warn!("boundcam::FramingCamera",
                "Ignoring viewport coverage {:?}, keeping {:?}", coverage, self.viewport);
            return;
        }
        self.viewport = coverage;
    }

    /// Refresh limits, prune if stale, recompute the tight area and
    /// invalidate the loose one.
    pub fn recalculate<M: Manipulator>(&mut self, manipulators: &mut ManipulatorTable<M>) {
        self.registry.refresh_all(manipulators);
        if self.registry.is_stale() {
            self.registry.prune();
        }
        self.tight = self.registry.reduce_tight();
        self.loose_stale.set(true);
    }

    /// Move toward `target` (dampened if tracking is enabled, directly
    /// otherwise). Clamping happens on the next reposition.
    pub fn follow(&mut self, target: Vec2, delta_time: f32) {
        self.position = match &mut self.tracker {
            Some(tracker) => tracker.follow(target, delta_time),
            None => target,
        };
    }

    /// Clamp the position so the viewport stays inside the tight area.
    ///
    /// If a camera manipulator is installed, the clamped position is handed
    /// to it and clamped again.
    pub fn reposition(&mut self) {
        let mut position = self.clamp(self.position);

        if let Some(mut manipulator) = self.manipulator.take() {
            manipulator.manipulate_camera(&mut position);
            self.manipulator = Some(manipulator);
            position = self.clamp(position);
        }

        self.position = position;
    }

    /// Clamp a point into the legal camera-center range.
    ///
    /// Unbounded sides never clamp. An axis where the viewport is wider than
    /// the tight area snaps to the middle of the tight area.
    fn clamp(&mut self, position: Vec2) -> Vec2 {
        let half = self.viewport / 2.0;
        let mut clamped = position;

        for axis in 0..2 {
            let lower = self.tight.lower(axis).map(|min| min + half[axis]);
            let upper = self.tight.upper(axis).map(|max| max - half[axis]);

            let degenerate = matches!((lower, upper), (Some(lo), Some(hi)) if lo > hi);
            if degenerate != self.degenerate[axis] {
                engine_trace!("boundcam::FramingCamera", "{} axis {}",
                    AXIS_NAMES[axis],
                    if degenerate { "narrower than viewport" } else { "fits viewport again" });
                self.degenerate[axis] = degenerate;
            }

            clamped[axis] = match (lower, upper) {
                (Some(_), Some(_)) if degenerate => {
                    (self.tight.min[axis] + self.tight.max[axis]) / 2.0
                }
                (Some(lo), Some(hi)) => position[axis].max(lo).min(hi),
                (Some(lo), None) => position[axis].max(lo),
                (None, Some(hi)) => position[axis].min(hi),
                (None, None) => position[axis],
            };
        }

        clamped
    }

    /// Edges of the tight area as line segments, when limit debugging is
    /// on and the area is bounded on both axes.
    pub fn debug_outline(&self, settings: &DebugSettings) -> Option<[(Vec2, Vec2); 4]> {
        if !settings.camera_limits || !self.tight.is_bounded() {
            return None;
        }

        let BoundaryArea { min, max } = self.tight;
        Some([
            (min, Vec2::new(min.x, max.y)),
            (min, Vec2::new(max.x, min.y)),
            (max, Vec2::new(min.x, max.y)),
            (max, Vec2::new(max.x, min.y)),
        ])
    }
}

impl BoundaryHolder for FramingCamera {
    fn limits(&self) -> &LimitRegistry {
        self.registry()
    }

    fn limits_mut(&mut self) -> &mut LimitRegistry {
        self.registry_mut()
    }

    fn tight(&self) -> BoundaryArea {
        FramingCamera::tight(self)
    }

    fn loose(&self) -> BoundaryArea {
        FramingCamera::loose(self)
    }
}

#[cfg(test)]
#[path = "framing_camera_tests.rs"]
mod tests;
