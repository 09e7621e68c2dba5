/// BoundaryArea — min/max corners produced by a limit reduction.
///
/// Not a `Rect`: one side of an axis may hold a sentinel while the other
/// holds a world coordinate, and nothing subtracts across them. Comparisons
/// against the sentinels decide whether a side is bounded at all.

use glam::Vec2;

/// Sentinel for an unconstrained lower side (`min.x` / `min.y`)
pub const UNBOUNDED_MIN: f32 = f32::MIN;

/// Sentinel for an unconstrained upper side (`max.x` / `max.y`)
pub const UNBOUNDED_MAX: f32 = f32::MAX;

/// Result of reducing a set of limits. No `min <= max` guarantee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryArea {
    /// Left (x) and bottom (y) edges
    pub min: Vec2,
    /// Right (x) and top (y) edges
    pub max: Vec2,
}

impl BoundaryArea {
    /// Area with every side unconstrained.
    pub const UNBOUNDED: Self = Self {
        min: Vec2::splat(UNBOUNDED_MIN),
        max: Vec2::splat(UNBOUNDED_MAX),
    };

    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Lower edge on `axis` (0 = x, 1 = y), `None` if unconstrained.
    ///
    /// # Panics
    ///
    /// Panics if `axis` is greater than 1.
    pub fn lower(&self, axis: usize) -> Option<f32> {
        let value = self.min[axis];
        (value != UNBOUNDED_MIN).then_some(value)
    }

    /// Upper edge on `axis` (0 = x, 1 = y), `None` if unconstrained.
    ///
    /// # Panics
    ///
    /// Panics if `axis` is greater than 1.
    pub fn upper(&self, axis: usize) -> Option<f32> {
        let value = self.max[axis];
        (value != UNBOUNDED_MAX).then_some(value)
    }

    /// Whether both sides of `axis` are constrained.
    ///
    /// # Panics
    ///
    /// Panics if `axis` is greater than 1.
    pub fn is_axis_bounded(&self, axis: usize) -> bool {
        self.lower(axis).is_some() && self.upper(axis).is_some()
    }

    /// Whether all four sides are constrained.
    pub fn is_bounded(&self) -> bool {
        self.is_axis_bounded(0) && self.is_axis_bounded(1)
    }

    /// Whether `other` lies inside this area on every side (sentinels included).
    pub fn encloses(&self, other: &BoundaryArea) -> bool {
        self.min.x <= other.min.x && self.min.y <= other.min.y
            && self.max.x >= other.max.x && self.max.y >= other.max.y
    }
}

impl Default for BoundaryArea {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

#[cfg(test)]
#[path = "boundary_area_tests.rs"]
mod tests;
