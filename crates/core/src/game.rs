//! Game session: the current snapshot plus its linear undo history.

use crate::state::Snapshot;
use crate::types::*;

mod engine;
mod hash;
mod pathfinding;

#[cfg(test)]
mod test_support;

pub use pathfinding::manhattan;

pub struct Game {
    current: Snapshot,
    // Pre-move snapshots, oldest first. Each accepted tick pushes one.
    history: Vec<Snapshot>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new_puzzle()
    }
}

impl Game {
    pub fn new(initial: Snapshot) -> Self {
        Self { current: initial, history: Vec::new() }
    }

    pub fn new_puzzle() -> Self {
        Self::new(Snapshot::new_puzzle())
    }

    /// Resolve one tick. Blocked moves and waddles still push a history
    /// frame, so every non-undo action is undoable exactly once.
    pub fn apply_action(&mut self, action: Action) -> &Snapshot {
        if action == Action::Undo {
            self.undo();
            return &self.current;
        }

        let previous = self.current.clone();
        engine::resolve_tick(&mut self.current, &previous, action);
        self.history.push(previous);
        tracing::debug!(
            "tick {} resolved {:?}: player at {:?}, victory {:?}",
            self.history.len(),
            action,
            self.current.player.pos,
            self.current.victory
        );
        &self.current
    }

    /// Restore the snapshot before the last tick. Returns `false` at the
    /// root of history, where undo leaves the current snapshot untouched.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.current
    }

    /// Direct access for editor mutators. History is left as is.
    pub fn snapshot_mut(&mut self) -> &mut Snapshot {
        &mut self.current
    }

    pub fn previous(&self) -> Option<&Snapshot> {
        self.history.last()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn into_snapshot(self) -> Snapshot {
        self.current
    }
}
