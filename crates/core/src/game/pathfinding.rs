//! Goose navigation: nearest-bread targeting and A* over open cells.
//! Occupancy is read from the snapshot as it is being mutated, so geese
//! moved earlier in a tick block the ones after them.

use std::collections::{BTreeMap, BTreeSet};

use crate::state::Snapshot;
use crate::types::*;

/// Frontier ordering: lowest `f`, then earliest insertion. A node whose
/// cost is lowered keeps its original insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct OpenKey {
    f: u32,
    order: u64,
}

#[derive(Clone, Copy, Debug)]
struct OpenNode {
    pos: Pos,
    g: u32,
    first_step: Option<Direction>,
}

/// Move goose `index` one tile toward its nearest bread. A goose with no
/// bread left or no open route stays put.
pub(crate) fn advance_goose(snapshot: &mut Snapshot, index: usize) {
    let Some(goose) = snapshot.geese[index] else {
        return;
    };
    let Some(goal) = nearest_bread(snapshot, goose.pos) else {
        return;
    };
    if goal == goose.pos {
        return;
    }

    match first_step_toward(snapshot, goose.pos, goal) {
        Some(direction) => {
            if let Some(goose) = snapshot.geese[index].as_mut() {
                goose.pos = goose.pos.step(direction);
                goose.direction = direction;
            }
        }
        None => {
            tracing::debug!("goose {} found no route from {:?} to {:?}", index, goose.pos, goal);
        }
    }
}

/// Closest present bread by Manhattan distance; ties go to the lower slot.
pub(crate) fn nearest_bread(snapshot: &Snapshot, from: Pos) -> Option<Pos> {
    snapshot.breads.iter().flatten().copied().min_by_key(|bread| manhattan(from, *bread))
}

pub(crate) fn first_step_toward(snapshot: &Snapshot, start: Pos, goal: Pos) -> Option<Direction> {
    let mut open: BTreeMap<OpenKey, OpenNode> = BTreeMap::new();
    let mut open_keys: BTreeMap<Pos, OpenKey> = BTreeMap::new();
    let mut explored: BTreeSet<Pos> = BTreeSet::new();
    let mut next_order = 0u64;

    let start_key = OpenKey { f: manhattan(start, goal), order: next_order };
    next_order += 1;
    open.insert(start_key, OpenNode { pos: start, g: 0, first_step: None });
    open_keys.insert(start, start_key);

    while let Some((_, node)) = open.pop_first() {
        open_keys.remove(&node.pos);
        if node.pos == goal {
            return node.first_step;
        }
        explored.insert(node.pos);

        for direction in Direction::ALL {
            let child = node.pos.step(direction);
            if !snapshot.in_bounds(child) || snapshot.is_occupied(child) {
                continue;
            }
            if explored.contains(&child) {
                continue;
            }
            let g = node.g + 1;
            let f = g + manhattan(child, goal);
            let entry = OpenNode { pos: child, g, first_step: node.first_step.or(Some(direction)) };

            if let Some(existing) = open_keys.get(&child).copied() {
                // Equal-cost duplicates are dropped.
                if f < existing.f {
                    open.remove(&existing);
                    let key = OpenKey { f, order: existing.order };
                    open.insert(key, entry);
                    open_keys.insert(child, key);
                }
                continue;
            }

            let key = OpenKey { f, order: next_order };
            next_order += 1;
            open.insert(key, entry);
            open_keys.insert(child, key);
        }
    }
    None
}

pub fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}
