/// BoundaryHolder — anything that owns a LimitRegistry and publishes the
/// areas reduced from it.
///
/// Producers register limits through `limits_mut`; parallax layers and other
/// consumers read `tight`/`loose` as plain values.

use super::boundary_area::BoundaryArea;
use super::limit_registry::LimitRegistry;

pub trait BoundaryHolder {
    /// Registered limits
    fn limits(&self) -> &LimitRegistry;

    /// Registered limits, for producers adding or toggling limits
    fn limits_mut(&mut self) -> &mut LimitRegistry;

    /// Last computed tight area
    fn tight(&self) -> BoundaryArea;

    /// Loose area (may be computed on demand)
    fn loose(&self) -> BoundaryArea;
}
