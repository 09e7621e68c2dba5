/// LimitRegistry — the set of limits registered against one camera.
///
/// Limits are stored in a SlotMap for stable keys, with a separate key list
/// that preserves insertion order so reductions always visit limits in the
/// same sequence. Dead limits are skipped by every pass the moment they are
/// observed, and physically removed by `prune`.

use std::cell::Cell;
use std::sync::atomic::{AtomicU64, Ordering};
use glam::Vec2;
use slotmap::{new_key_type, SlotMap};
use crate::engine_debug;
use super::boundary_area::{BoundaryArea, UNBOUNDED_MIN, UNBOUNDED_MAX};
use super::limit::Limit;
use super::limit_kind::LimitKind;
use super::manipulator::{Manipulator, ManipulatorTable};

new_key_type! {
    /// Stable key for a Limit within a LimitRegistry.
    ///
    /// Keys remain valid even after other limits are removed.
    pub struct LimitKey;
}

/// Identity of a registry instance.
///
/// Keys from different registries can compare equal, so anything tracking
/// limits across several registries pairs each key with this id. Ids are
/// never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistryId(u64);

static NEXT_REGISTRY_ID: AtomicU64 = AtomicU64::new(0);

/// Which way each side of the area moves while folding limits in.
#[derive(Clone, Copy)]
enum Reduction {
    /// Smallest area: caps take the minimum, floors the maximum
    Tight,
    /// Largest area: caps take the maximum, floors the minimum
    Loose,
}

impl Reduction {
    fn cap(self, current: f32, candidate: f32) -> f32 {
        match self {
            Reduction::Tight => current.min(candidate),
            Reduction::Loose => current.max(candidate),
        }
    }

    fn floor(self, current: f32, candidate: f32) -> f32 {
        match self {
            Reduction::Tight => current.max(candidate),
            Reduction::Loose => current.min(candidate),
        }
    }
}

/// Owned collection of limits for one camera.
pub struct LimitRegistry {
    id: RegistryId,
    limits: SlotMap<LimitKey, Limit>,
    /// Insertion order
    order: Vec<LimitKey>,
    /// Set when a dead limit is observed, cleared by `prune`
    stale: Cell<bool>,
}

impl LimitRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            id: RegistryId(NEXT_REGISTRY_ID.fetch_add(1, Ordering::Relaxed)),
            limits: SlotMap::with_key(),
            order: Vec::new(),
            stale: Cell::new(false),
        }
    }

    /// Identity of this registry
    pub fn id(&self) -> RegistryId {
        self.id
    }

    /// Register a limit. It is appended to the iteration order.
    ///
    /// The registry takes ownership, so the same limit can never be
    /// registered twice; producers keep the returned key to refer to it.
    pub fn add(&mut self, limit: Limit) -> LimitKey {
        let key = self.limits.insert(limit);
        self.order.push(key);
        key
    }

    /// Unregister a limit. Returns None if the key is not registered.
    ///
    /// Removing a dead limit clears `stale` once no dead limit remains.
    pub fn remove(&mut self, key: LimitKey) -> Option<Limit> {
        let limit = self.limits.remove(key)?;
        self.order.retain(|k| *k != key);
        if limit.is_dead() {
            self.stale.set(self.limits.values().any(Limit::is_dead));
        }
        Some(limit)
    }

    pub fn contains(&self, key: LimitKey) -> bool {
        self.limits.contains_key(key)
    }

    /// Get a limit by key
    pub fn get(&self, key: LimitKey) -> Option<&Limit> {
        self.limits.get(key)
    }

    /// Get a mutable limit by key (to toggle `enabled`)
    pub fn get_mut(&mut self, key: LimitKey) -> Option<&mut Limit> {
        self.limits.get_mut(key)
    }

    /// Enable or disable a limit. Returns false if the key is invalid.
    pub fn set_enabled(&mut self, key: LimitKey, enabled: bool) -> bool {
        match self.limits.get_mut(key) {
            Some(limit) => {
                limit.set_enabled(enabled);
                true
            }
            None => false,
        }
    }

    /// Iterate over all limits (dead ones included) in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (LimitKey, &Limit)> + '_ {
        self.order.iter().map(move |&key| (key, &self.limits[key]))
    }

    /// Number of registered limits, dead ones included
    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

    /// Whether a dead limit has been observed since the last prune
    pub fn is_stale(&self) -> bool {
        self.stale.get()
    }

    /// Refresh every limit in order, flagging the registry stale if any
    /// limit is (or becomes) dead. The sweep never stops early.
    pub fn refresh_all<M: Manipulator>(&mut self, manipulators: &mut ManipulatorTable<M>) {
        for key in &self.order {
            let limit = &mut self.limits[*key];
            let was_dead = limit.is_dead();
            limit.refresh(manipulators);

            if limit.is_dead() {
                if !was_dead {
                    engine_debug!("boundcam::LimitRegistry",
                        "{:?} limit lost its manipulator", limit.kind());
                }
                self.stale.set(true);
            }
        }
    }

    /// Remove every dead limit and clear the stale flag.
    ///
    /// Returns the number of limits removed.
    pub fn prune(&mut self) -> usize {
        let limits = &mut self.limits;
        let before = self.order.len();

        self.order.retain(|key| {
            let dead = limits.get(*key).is_some_and(Limit::is_dead);
            if dead {
                limits.remove(*key);
            }
            !dead
        });
        self.stale.set(false);

        let removed = before - self.order.len();
        if removed > 0 {
            engine_debug!("boundcam::LimitRegistry", "Pruned {} dead limits", removed);
        }
        removed
    }

    /// Smallest area allowed by every active limit.
    ///
    /// Sides without any active limit keep the unbounded sentinels.
    pub fn reduce_tight(&self) -> BoundaryArea {
        self.reduce(Reduction::Tight)
    }

    /// Largest area any active limit still permits.
    ///
    /// Sides without any active limit keep the unbounded sentinels, so the
    /// loose area always encloses the tight one.
    pub fn reduce_loose(&self) -> BoundaryArea {
        self.reduce(Reduction::Loose)
    }

    fn reduce(&self, reduction: Reduction) -> BoundaryArea {
        let mut top: Option<f32> = None;
        let mut bottom: Option<f32> = None;
        let mut left: Option<f32> = None;
        let mut right: Option<f32> = None;

        for (_, limit) in self.iter() {
            if limit.is_dead() {
                self.stale.set(true);
                continue;
            }
            if !limit.is_enabled() {
                continue;
            }

            let kind = limit.kind();
            let Vec2 { x, y } = limit.position();

            if kind.contains(LimitKind::TOP) {
                top = Some(top.map_or(y, |v| reduction.cap(v, y)));
            }
            if kind.contains(LimitKind::BOTTOM) {
                bottom = Some(bottom.map_or(y, |v| reduction.floor(v, y)));
            }
            if kind.contains(LimitKind::LEFT) {
                left = Some(left.map_or(x, |v| reduction.floor(v, x)));
            }
            if kind.contains(LimitKind::RIGHT) {
                right = Some(right.map_or(x, |v| reduction.cap(v, x)));
            }
        }

        BoundaryArea::new(
            Vec2::new(left.unwrap_or(UNBOUNDED_MIN), bottom.unwrap_or(UNBOUNDED_MIN)),
            Vec2::new(right.unwrap_or(UNBOUNDED_MAX), top.unwrap_or(UNBOUNDED_MAX)),
        )
    }
}

impl Default for LimitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "limit_registry_tests.rs"]
mod tests;
