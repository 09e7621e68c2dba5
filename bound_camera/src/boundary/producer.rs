/// Boundary producers — objects in the level that contribute limits.
///
/// A producer is a sprite-sized object whose edge facing into the level
/// becomes the limit coordinate: a TOP limit uses the sprite's bottom edge,
/// a LEFT limit its right edge, and so on. `StaticBoundary` computes that
/// edge once; `DynamicBoundary` recomputes it every tick from its anchor.

use glam::Vec2;
use crate::error::Result;
use super::holder::BoundaryHolder;
use super::limit::Limit;
use super::limit_kind::LimitKind;
use super::limit_registry::{LimitKey, LimitRegistry, RegistryId};
use super::manipulator::{LimitUpdate, Manipulator, ManipulatorKey};

/// Write the inward-facing sprite edges for `kind` into `position`.
///
/// Components not covered by `kind` are left as they are.
pub fn apply_edges(kind: LimitKind, center: Vec2, extents: Vec2, position: &mut Vec2) {
    if kind.contains(LimitKind::TOP) {
        position.y = center.y - extents.y;
    } else if kind.contains(LimitKind::BOTTOM) {
        position.y = center.y + extents.y;
    }

    if kind.contains(LimitKind::LEFT) {
        position.x = center.x + extents.x;
    } else if kind.contains(LimitKind::RIGHT) {
        position.x = center.x - extents.x;
    }
}

// ===== STATIC BOUNDARY =====

/// Producer of a limit that never moves.
#[derive(Debug, Clone, Copy)]
pub struct StaticBoundary {
    kind: LimitKind,
    /// Half the sprite size in world units
    extents: Vec2,
}

impl StaticBoundary {
    pub fn new(kind: LimitKind, extents: Vec2) -> Result<Self> {
        Ok(Self {
            kind: kind.validate()?,
            extents,
        })
    }

    pub fn kind(&self) -> LimitKind {
        self.kind
    }

    pub fn extents(&self) -> Vec2 {
        self.extents
    }

    /// Limit position for a sprite centered at `center`.
    pub fn limit_position(&self, center: Vec2) -> Vec2 {
        let mut position = Vec2::ZERO;
        apply_edges(self.kind, center, self.extents, &mut position);
        position
    }

    /// Register the limit in one registry.
    pub fn apply(&self, center: Vec2, registry: &mut LimitRegistry) -> Result<LimitKey> {
        let limit = Limit::fixed(self.kind, self.limit_position(center))?;
        Ok(registry.add(limit))
    }

    /// Register one copy of the limit in every holder.
    pub fn apply_to(
        &self,
        center: Vec2,
        holders: &mut [&mut dyn BoundaryHolder],
    ) -> Result<Vec<LimitKey>> {
        holders
            .iter_mut()
            .map(|holder| self.apply(center, holder.limits_mut()))
            .collect()
    }
}

// ===== DYNAMIC BOUNDARY =====

/// Configuration of a DynamicBoundary
#[derive(Debug, Clone, Copy)]
pub struct DynamicBoundaryConfig {
    /// Direction(s) constrained
    pub kind: LimitKind,
    /// Half the sprite size in world units
    pub extents: Vec2,
    /// Re-enable the limit when the producer is enabled
    pub auto_enable: bool,
    /// Disable the limit when the producer is disabled
    pub auto_disable: bool,
}

impl Default for DynamicBoundaryConfig {
    fn default() -> Self {
        Self {
            kind: LimitKind::NONE,
            extents: Vec2::ZERO,
            auto_enable: true,
            auto_disable: true,
        }
    }
}

/// Producer whose limit follows a moving anchor (platform, enemy, ...).
///
/// Lives in a `ManipulatorTable`; the limits it registers hold its key.
/// Removing it from the table kills those limits on the next refresh.
/// One producer may feed several registries, one limit in each.
#[derive(Debug, Clone)]
pub struct DynamicBoundary {
    config: DynamicBoundaryConfig,
    anchor: Vec2,
    /// Registered limit per registry
    limits: Vec<(RegistryId, LimitKey)>,
}

impl DynamicBoundary {
    pub fn new(config: DynamicBoundaryConfig, anchor: Vec2) -> Result<Self> {
        config.kind.validate()?;
        Ok(Self {
            config,
            anchor,
            limits: Vec::new(),
        })
    }

    pub fn config(&self) -> &DynamicBoundaryConfig {
        &self.config
    }

    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Move the anchor. Picked up by the limit on the next refresh.
    pub fn set_anchor(&mut self, anchor: Vec2) {
        self.anchor = anchor;
    }

    /// Key of the limit registered in `registry`, if attached there.
    pub fn limit_in(&self, registry: &LimitRegistry) -> Option<LimitKey> {
        self.limits
            .iter()
            .find(|(id, _)| *id == registry.id())
            .map(|(_, key)| *key)
            .filter(|key| registry.contains(*key))
    }

    /// Register this producer's limit in `registry`, keyed to `self_key`
    /// in the table.
    ///
    /// Calling it again while the limit is still registered there returns
    /// the existing key.
    pub fn attach(&mut self, self_key: ManipulatorKey, registry: &mut LimitRegistry) -> Result<LimitKey> {
        if let Some(key) = self.limit_in(registry) {
            return Ok(key);
        }

        let key = registry.add(Limit::dynamic(self.config.kind, self_key)?);
        let id = registry.id();
        self.limits.retain(|(other, _)| *other != id);
        self.limits.push((id, key));
        Ok(key)
    }

    /// Register one limit in every holder.
    pub fn attach_to(
        &mut self,
        self_key: ManipulatorKey,
        holders: &mut [&mut dyn BoundaryHolder],
    ) -> Result<Vec<LimitKey>> {
        holders
            .iter_mut()
            .map(|holder| self.attach(self_key, holder.limits_mut()))
            .collect()
    }

    /// Producer enabled: re-enable its limit in `registry` if configured to.
    pub fn on_enable(&self, registry: &mut LimitRegistry) {
        if self.config.auto_enable {
            if let Some(key) = self.limit_in(registry) {
                registry.set_enabled(key, true);
            }
        }
    }

    /// Producer disabled: disable its limit in `registry` if configured to.
    pub fn on_disable(&self, registry: &mut LimitRegistry) {
        if self.config.auto_disable {
            if let Some(key) = self.limit_in(registry) {
                registry.set_enabled(key, false);
            }
        }
    }
}

impl Manipulator for DynamicBoundary {
    fn update_limit(&mut self, limit: &mut LimitUpdate<'_>) {
        let mut position = limit.position();
        apply_edges(limit.kind(), self.anchor, self.config.extents, &mut position);
        limit.set_position(position);
    }
}

#[cfg(test)]
#[path = "producer_tests.rs"]
mod tests;
