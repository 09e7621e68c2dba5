/// Manipulators — external objects that rewrite dynamic limits.
///
/// A dynamic `Limit` never owns its manipulator. It stores a
/// generation-checked `ManipulatorKey` into a `ManipulatorTable`; removing
/// the manipulator from the table invalidates the key, and the next refresh
/// observes the failed lookup and marks the limit dead.

use glam::Vec2;
use slotmap::{new_key_type, SlotMap};
use crate::error::Result;
use crate::engine_bail;
use super::limit_kind::LimitKind;

new_key_type! {
    /// Stable, generation-checked key for a manipulator.
    ///
    /// A key becomes invalid when its manipulator is removed, and is never
    /// handed out again for a different manipulator.
    pub struct ManipulatorKey;
}

/// The part of a limit a manipulator may touch.
///
/// Exposes the kind read-only and the position read-write; `enabled` and
/// `dead` stay out of reach.
pub struct LimitUpdate<'a> {
    kind: LimitKind,
    position: &'a mut Vec2,
}

impl<'a> LimitUpdate<'a> {
    pub(crate) fn new(kind: LimitKind, position: &'a mut Vec2) -> Self {
        Self { kind, position }
    }

    /// Kind of the limit being updated.
    pub fn kind(&self) -> LimitKind {
        self.kind
    }

    /// Current world-space position.
    pub fn position(&self) -> Vec2 {
        *self.position
    }

    /// Rewrite the world-space position.
    pub fn set_position(&mut self, position: Vec2) {
        *self.position = position;
    }
}

/// Capability for objects that drive a dynamic limit.
///
/// Called once per tick per limit, from `Limit::refresh`.
pub trait Manipulator {
    /// Rewrite the position of `limit`.
    fn update_limit(&mut self, limit: &mut LimitUpdate<'_>);
}

impl<M: Manipulator + ?Sized> Manipulator for Box<M> {
    fn update_limit(&mut self, limit: &mut LimitUpdate<'_>) {
        (**self).update_limit(limit)
    }
}

/// Arena of manipulators addressed by `ManipulatorKey`.
///
/// Use `ManipulatorTable<Box<dyn Manipulator>>` when several manipulator
/// types feed the same registry.
pub struct ManipulatorTable<M> {
    manipulators: SlotMap<ManipulatorKey, M>,
}

impl<M> ManipulatorTable<M> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            manipulators: SlotMap::with_key(),
        }
    }

    /// Insert a manipulator and return its key
    pub fn insert(&mut self, manipulator: M) -> ManipulatorKey {
        self.manipulators.insert(manipulator)
    }

    /// Insert a manipulator that needs to know its own key
    pub fn insert_with_key(&mut self, f: impl FnOnce(ManipulatorKey) -> M) -> ManipulatorKey {
        self.manipulators.insert_with_key(f)
    }

    /// Destroy a manipulator. Limits pointing at it die on their next refresh.
    pub fn remove(&mut self, key: ManipulatorKey) -> Option<M> {
        self.manipulators.remove(key)
    }

    /// Look up a manipulator
    pub fn get(&self, key: ManipulatorKey) -> Option<&M> {
        self.manipulators.get(key)
    }

    /// Look up a manipulator mutably
    pub fn get_mut(&mut self, key: ManipulatorKey) -> Option<&mut M> {
        self.manipulators.get_mut(key)
    }

    /// Look up a manipulator, failing with `Error::UnknownManipulator`
    pub fn try_get_mut(&mut self, key: ManipulatorKey) -> Result<&mut M> {
        match self.manipulators.get_mut(key) {
            Some(manipulator) => Ok(manipulator),
            None => engine_bail!("boundcam::ManipulatorTable", UnknownManipulator,
                "{:?} does not resolve", key),
        }
    }

    pub fn contains(&self, key: ManipulatorKey) -> bool {
        self.manipulators.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.manipulators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.manipulators.is_empty()
    }
}

impl<M> Default for ManipulatorTable<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "manipulator_tests.rs"]
mod tests;
