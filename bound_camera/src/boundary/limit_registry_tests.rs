/// Tests for LimitRegistry
///
/// Registration order, refresh/prune lifecycle, staleness, and the
/// tight/loose reductions including corner kinds and dead limits.

use super::*;
use crate::boundary::manipulator::{LimitUpdate, ManipulatorKey};

// ============================================================================
// Helper Functions
// ============================================================================

/// Anchor that moves a limit to wherever the test puts it
struct Anchor {
    at: Vec2,
}

impl Manipulator for Anchor {
    fn update_limit(&mut self, limit: &mut LimitUpdate<'_>) {
        limit.set_position(self.at);
    }
}

fn fixed(kind: LimitKind, x: f32, y: f32) -> Limit {
    Limit::fixed(kind, Vec2::new(x, y)).unwrap()
}

fn dynamic(
    table: &mut ManipulatorTable<Anchor>,
    kind: LimitKind,
    at: Vec2,
) -> (ManipulatorKey, Limit) {
    let key = table.insert(Anchor { at });
    (key, Limit::dynamic(kind, key).unwrap())
}

// ============================================================================
// Tests: Registration
// ============================================================================

#[test]
fn test_new_registry_is_empty() {
    let registry = LimitRegistry::new();
    assert!(registry.is_empty());
    assert!(!registry.is_stale());
    assert_eq!(registry.reduce_tight(), BoundaryArea::UNBOUNDED);
}

#[test]
fn test_add_and_get() {
    let mut registry = LimitRegistry::new();
    let key = registry.add(fixed(LimitKind::TOP, 0.0, 10.0));

    assert_eq!(registry.len(), 1);
    assert!(registry.contains(key));
    assert_eq!(registry.get(key).unwrap().position().y, 10.0);
}

#[test]
fn test_iteration_is_insertion_order() {
    let mut registry = LimitRegistry::new();
    let a = registry.add(fixed(LimitKind::TOP, 0.0, 1.0));
    let b = registry.add(fixed(LimitKind::LEFT, 2.0, 0.0));
    let c = registry.add(fixed(LimitKind::RIGHT, 3.0, 0.0));
    registry.remove(b);
    let d = registry.add(fixed(LimitKind::BOTTOM, 0.0, 4.0));

    let keys: Vec<LimitKey> = registry.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec![a, c, d]);
}

#[test]
fn test_remove_unknown_is_noop() {
    let mut registry = LimitRegistry::new();
    let key = registry.add(fixed(LimitKind::TOP, 0.0, 1.0));

    assert!(registry.remove(key).is_some());
    assert!(registry.remove(key).is_none());
    assert!(registry.is_empty());
}

#[test]
fn test_set_enabled() {
    let mut registry = LimitRegistry::new();
    let key = registry.add(fixed(LimitKind::TOP, 0.0, 5.0));

    assert!(registry.set_enabled(key, false));
    assert_eq!(registry.reduce_tight().max.y, UNBOUNDED_MAX);

    registry.remove(key);
    assert!(!registry.set_enabled(key, true));
}

// ============================================================================
// Tests: Tight / Loose reductions
// ============================================================================

#[test]
fn test_tight_vertical_pair() {
    let mut registry = LimitRegistry::new();
    registry.add(fixed(LimitKind::TOP, 0.0, 10.0));
    registry.add(fixed(LimitKind::BOTTOM, 0.0, -10.0));

    let tight = registry.reduce_tight();
    assert_eq!(tight.min.y, -10.0);
    assert_eq!(tight.max.y, 10.0);
    assert_eq!(tight.min.x, UNBOUNDED_MIN);
    assert_eq!(tight.max.x, UNBOUNDED_MAX);
}

#[test]
fn test_two_tops_tight_takes_lower_loose_takes_higher() {
    let mut registry = LimitRegistry::new();
    registry.add(fixed(LimitKind::TOP, 0.0, 10.0));
    registry.add(fixed(LimitKind::TOP, 0.0, 6.0));

    assert_eq!(registry.reduce_tight().max.y, 6.0);
    assert_eq!(registry.reduce_loose().max.y, 10.0);
}

#[test]
fn test_all_directions_tight_and_loose() {
    let mut registry = LimitRegistry::new();
    registry.add(fixed(LimitKind::LEFT, -20.0, 0.0));
    registry.add(fixed(LimitKind::LEFT, -15.0, 0.0));
    registry.add(fixed(LimitKind::RIGHT, 30.0, 0.0));
    registry.add(fixed(LimitKind::RIGHT, 25.0, 0.0));
    registry.add(fixed(LimitKind::BOTTOM, 0.0, -8.0));
    registry.add(fixed(LimitKind::BOTTOM, 0.0, -5.0));

    let tight = registry.reduce_tight();
    assert_eq!(tight.min, Vec2::new(-15.0, -5.0));
    assert_eq!(tight.max.x, 25.0);

    let loose = registry.reduce_loose();
    assert_eq!(loose.min, Vec2::new(-20.0, -8.0));
    assert_eq!(loose.max.x, 30.0);
    assert!(loose.encloses(&tight));
}

#[test]
fn test_corner_contributes_to_both_axes() {
    let mut registry = LimitRegistry::new();
    registry.add(fixed(LimitKind::TOP_LEFT, -4.0, 7.0));
    registry.add(fixed(LimitKind::BOTTOM_RIGHT, 9.0, -3.0));

    let tight = registry.reduce_tight();
    assert_eq!(tight.min, Vec2::new(-4.0, -3.0));
    assert_eq!(tight.max, Vec2::new(9.0, 7.0));
}

#[test]
fn test_corner_and_edge_mix() {
    let mut registry = LimitRegistry::new();
    registry.add(fixed(LimitKind::TOP_RIGHT, 12.0, 8.0));
    registry.add(fixed(LimitKind::TOP, 0.0, 5.0));
    registry.add(fixed(LimitKind::RIGHT, 20.0, 0.0));

    let tight = registry.reduce_tight();
    assert_eq!(tight.max, Vec2::new(12.0, 5.0));

    let loose = registry.reduce_loose();
    assert_eq!(loose.max, Vec2::new(20.0, 8.0));
}

#[test]
fn test_none_kind_contributes_nothing() {
    let mut registry = LimitRegistry::new();
    registry.add(fixed(LimitKind::NONE, 3.0, 3.0));

    assert_eq!(registry.reduce_tight(), BoundaryArea::UNBOUNDED);
    assert_eq!(registry.reduce_loose(), BoundaryArea::UNBOUNDED);
}

#[test]
fn test_loose_without_limits_is_unbounded() {
    let registry = LimitRegistry::new();
    assert_eq!(registry.reduce_loose(), BoundaryArea::UNBOUNDED);
}

#[test]
fn test_sentinels_are_not_mixed_with_values() {
    let mut registry = LimitRegistry::new();
    registry.add(fixed(LimitKind::LEFT, -15.0, 0.0));

    let tight = registry.reduce_tight();
    assert_eq!(tight.min.x, -15.0);
    assert_eq!(tight.max.x, UNBOUNDED_MAX);
    assert_eq!(tight.lower(0), Some(-15.0));
    assert_eq!(tight.upper(0), None);
}

// ============================================================================
// Tests: Refresh / dead / prune
// ============================================================================

#[test]
fn test_refresh_moves_dynamic_limit() {
    let mut table = ManipulatorTable::new();
    let mut registry = LimitRegistry::new();
    let (manip, limit) = dynamic(&mut table, LimitKind::LEFT, Vec2::new(5.0, 0.0));
    registry.add(limit);

    registry.refresh_all(&mut table);
    assert_eq!(registry.reduce_tight().min.x, 5.0);

    table.get_mut(manip).unwrap().at = Vec2::new(7.5, 0.0);
    registry.refresh_all(&mut table);
    assert_eq!(registry.reduce_tight().min.x, 7.5);
}

#[test]
fn test_destroyed_manipulator_excluded_before_prune() {
    let mut table = ManipulatorTable::new();
    let mut registry = LimitRegistry::new();
    let (manip, limit) = dynamic(&mut table, LimitKind::LEFT, Vec2::new(5.0, 0.0));
    let key = registry.add(limit);
    registry.refresh_all(&mut table);

    table.remove(manip);
    registry.refresh_all(&mut table);

    assert!(registry.get(key).unwrap().is_dead());
    assert!(registry.is_stale());
    assert_eq!(registry.reduce_tight().min.x, UNBOUNDED_MIN);
    // Still registered until pruned
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_dead_limit_does_not_stop_the_sweep() {
    let mut table = ManipulatorTable::new();
    let mut registry = LimitRegistry::new();
    let (dead_manip, first) = dynamic(&mut table, LimitKind::TOP, Vec2::new(0.0, 3.0));
    let (live_manip, second) = dynamic(&mut table, LimitKind::BOTTOM, Vec2::new(0.0, -3.0));
    registry.add(first);
    registry.add(second);

    table.remove(dead_manip);
    table.get_mut(live_manip).unwrap().at = Vec2::new(0.0, -1.0);
    registry.refresh_all(&mut table);

    let tight = registry.reduce_tight();
    assert_eq!(tight.min.y, -1.0);
    assert_eq!(tight.max.y, UNBOUNDED_MAX);
}

#[test]
fn test_disabled_dynamic_limit_still_detected_dead() {
    let mut table = ManipulatorTable::new();
    let mut registry = LimitRegistry::new();
    let (manip, limit) = dynamic(&mut table, LimitKind::RIGHT, Vec2::new(1.0, 0.0));
    let key = registry.add(limit);
    registry.set_enabled(key, false);

    table.remove(manip);
    registry.refresh_all(&mut table);

    assert!(registry.is_stale());
    assert_eq!(registry.prune(), 1);
}

#[test]
fn test_prune_removes_all_and_only_dead() {
    let mut table = ManipulatorTable::new();
    let mut registry = LimitRegistry::new();
    let static_key = registry.add(fixed(LimitKind::TOP, 0.0, 10.0));
    let (m1, l1) = dynamic(&mut table, LimitKind::LEFT, Vec2::ZERO);
    let (m2, l2) = dynamic(&mut table, LimitKind::RIGHT, Vec2::ZERO);
    let (_m3, l3) = dynamic(&mut table, LimitKind::BOTTOM, Vec2::ZERO);
    registry.add(l1);
    registry.add(l2);
    let live_key = registry.add(l3);

    table.remove(m1);
    table.remove(m2);
    registry.refresh_all(&mut table);
    let before = registry.len();

    let removed = registry.prune();

    assert_eq!(removed, 2);
    assert_eq!(registry.len(), before - 2);
    assert!(!registry.is_stale());
    let keys: Vec<LimitKey> = registry.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec![static_key, live_key]);
}

#[test]
fn test_prune_twice_is_idempotent() {
    let mut table = ManipulatorTable::new();
    let mut registry = LimitRegistry::new();
    registry.add(fixed(LimitKind::TOP, 0.0, 10.0));
    let (manip, limit) = dynamic(&mut table, LimitKind::LEFT, Vec2::ZERO);
    registry.add(limit);
    table.remove(manip);
    registry.refresh_all(&mut table);

    assert_eq!(registry.prune(), 1);
    let after_first = registry.len();

    assert_eq!(registry.prune(), 0);
    assert_eq!(registry.len(), after_first);
    assert!(!registry.is_stale());
}

#[test]
fn test_prune_clears_stale_unconditionally() {
    let mut registry = LimitRegistry::new();
    registry.add(fixed(LimitKind::TOP, 0.0, 1.0));

    assert_eq!(registry.prune(), 0);
    assert!(!registry.is_stale());
}

#[test]
fn test_reduction_marks_stale_when_it_sees_dead() {
    let mut table = ManipulatorTable::new();
    let (manip, mut limit) = dynamic(&mut table, LimitKind::TOP, Vec2::new(0.0, 4.0));
    table.remove(manip);
    limit.refresh(&mut table);

    // Registered already dead: nothing has observed it yet
    let mut registry = LimitRegistry::new();
    registry.add(limit);
    assert!(!registry.is_stale());

    let tight = registry.reduce_tight();

    assert_eq!(tight.max.y, UNBOUNDED_MAX);
    assert!(registry.is_stale());
}

#[test]
fn test_removing_last_dead_limit_clears_stale() {
    let mut table = ManipulatorTable::new();
    let mut registry = LimitRegistry::new();
    registry.add(fixed(LimitKind::TOP, 0.0, 10.0));
    let (manip, limit) = dynamic(&mut table, LimitKind::LEFT, Vec2::new(-5.0, 0.0));
    let key = registry.add(limit);
    table.remove(manip);
    registry.refresh_all(&mut table);
    assert!(registry.is_stale());

    assert!(registry.remove(key).is_some_and(|limit| limit.is_dead()));

    assert!(!registry.is_stale());
    assert!(registry.iter().all(|(_, limit)| !limit.is_dead()));
}

#[test]
fn test_removing_one_of_two_dead_limits_keeps_stale() {
    let mut table = ManipulatorTable::new();
    let mut registry = LimitRegistry::new();
    let (left, left_limit) = dynamic(&mut table, LimitKind::LEFT, Vec2::ZERO);
    let (right, right_limit) = dynamic(&mut table, LimitKind::RIGHT, Vec2::ZERO);
    let left_key = registry.add(left_limit);
    registry.add(right_limit);
    table.remove(left);
    table.remove(right);
    registry.refresh_all(&mut table);

    registry.remove(left_key);

    assert!(registry.is_stale());
    assert_eq!(registry.prune(), 1);
}

#[test]
fn test_removing_live_limit_leaves_stale_alone() {
    let mut table = ManipulatorTable::new();
    let mut registry = LimitRegistry::new();
    let live = registry.add(fixed(LimitKind::TOP, 0.0, 1.0));
    let (manip, limit) = dynamic(&mut table, LimitKind::LEFT, Vec2::ZERO);
    registry.add(limit);
    table.remove(manip);
    registry.refresh_all(&mut table);

    registry.remove(live);

    assert!(registry.is_stale());
}
