/// Limit — a single directional constraint on a camera's legal area.
///
/// Static limits keep the position they were built with. Dynamic limits
/// hold a `ManipulatorKey` and have their position rewritten on every
/// `refresh`; once that key stops resolving the limit is dead for good.

use glam::Vec2;
use crate::error::Result;
use super::limit_kind::LimitKind;
use super::manipulator::{LimitUpdate, Manipulator, ManipulatorKey, ManipulatorTable};

/// One constraint surface.
///
/// For TOP/BOTTOM only `position.y` matters, for LEFT/RIGHT only
/// `position.x`, corners use both.
///
/// Not `Clone`: a limit is owned by exactly one registry.
/// A producer feeding several registries creates one limit per registry.
#[derive(Debug)]
pub struct Limit {
    kind: LimitKind,
    position: Vec2,
    enabled: bool,
    source: Option<ManipulatorKey>,
    dead: bool,
}

impl Limit {
    /// Create a static limit at a fixed position.
    ///
    /// # Errors
    ///
    /// `Error::InvalidLimitKind` if `kind` combines opposite directions.
    pub fn fixed(kind: LimitKind, position: Vec2) -> Result<Self> {
        Ok(Self {
            kind: kind.validate()?,
            position,
            enabled: true,
            source: None,
            dead: false,
        })
    }

    /// Create a dynamic limit driven by the manipulator behind `source`.
    ///
    /// The position stays at the origin until the first `refresh`.
    pub fn dynamic(kind: LimitKind, source: ManipulatorKey) -> Result<Self> {
        Ok(Self {
            kind: kind.validate()?,
            position: Vec2::ZERO,
            enabled: true,
            source: Some(source),
            dead: false,
        })
    }

    pub fn kind(&self) -> LimitKind {
        self.kind
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabled limits stay registered but are skipped by every reduction.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_dynamic(&self) -> bool {
        self.source.is_some()
    }

    /// Manipulator key of a dynamic limit.
    pub fn source(&self) -> Option<ManipulatorKey> {
        self.source
    }

    /// True once the manipulator was found missing. Never resets.
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Enabled and not dead: the limit takes part in reductions.
    pub fn is_active(&self) -> bool {
        self.enabled && !self.dead
    }

    /// Let the manipulator rewrite the position.
    ///
    /// No-op for static or dead limits. A key that no longer resolves
    /// marks the limit dead and leaves the position untouched.
    pub fn refresh<M: Manipulator>(&mut self, manipulators: &mut ManipulatorTable<M>) {
        let Some(key) = self.source else {
            return;
        };
        if self.dead {
            return;
        }

        match manipulators.get_mut(key) {
            Some(manipulator) => {
                let mut update = LimitUpdate::new(self.kind, &mut self.position);
                manipulator.update_limit(&mut update);
            }
            None => self.dead = true,
        }
    }
}

#[cfg(test)]
#[path = "limit_tests.rs"]
mod tests;
