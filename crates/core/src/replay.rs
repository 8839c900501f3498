//! Headless replay of a recorded action journal against a starting puzzle.

use thiserror::Error;

use crate::game::Game;
use crate::journal::ActionJournal;
use crate::state::Snapshot;
use crate::types::*;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ReplayError {
    /// The outcome was decided at `tick` and the journal still has
    /// `remaining` actions, the next of which is not an undo.
    #[error("outcome decided at tick {tick} with {remaining} actions left")]
    ActionsAfterOutcome { tick: u64, remaining: usize },
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_victory: Victory,
    pub final_snapshot_hash: u64,
    /// History depth after the last action.
    pub final_tick: u64,
}

pub fn replay_to_end(
    initial: Snapshot,
    journal: &ActionJournal,
) -> Result<ReplayResult, ReplayError> {
    let mut game = Game::new(initial);

    for (index, action) in journal.actions.iter().enumerate() {
        // Undo is how a decided attempt is taken back; anything else is a
        // journal recorded past the end of the attempt.
        if game.snapshot().victory.is_decided() && *action != Action::Undo {
            return Err(ReplayError::ActionsAfterOutcome {
                tick: game.history_len() as u64,
                remaining: journal.actions.len() - index,
            });
        }
        game.apply_action(*action);
    }

    let result = ReplayResult {
        final_victory: game.snapshot().victory,
        final_snapshot_hash: game.snapshot().snapshot_hash(),
        final_tick: game.history_len() as u64,
    };
    tracing::debug!(
        "replayed {} actions of {}: {:?} at tick {}",
        journal.actions.len(),
        journal.puzzle,
        result.final_victory,
        result.final_tick
    );
    Ok(result)
}
