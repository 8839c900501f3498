//! Sending the chain head off on its own and moving waddlers along.

use super::*;

impl Tick<'_> {
    /// Detach the chain head as a waddler heading `direction`. The rest of
    /// the chain ripples forward one link to close the gap. An off-board
    /// destination is allowed; the bounce phase turns the waddler back.
    pub(super) fn dispatch_waddler(&mut self, direction: Direction) {
        let chain: Vec<usize> = self.current.chain().collect();
        let Some((&head, trailing)) = chain.split_last() else {
            return;
        };

        let destination = self.current.player.pos.step(direction);
        if self.current.is_occupied(destination) {
            return;
        }

        for &index in trailing {
            let Some(duckling) = self.current.ducklings[index] else {
                continue;
            };
            if let Some(target) = self.leader_pre_move_pos(duckling.follows) {
                self.step_duckling_to(index, target);
            }
        }

        // The duckling that walked behind the head now walks behind the player.
        match trailing.last() {
            Some(&new_head) => {
                if let Some(duckling) = self.current.ducklings[new_head].as_mut() {
                    duckling.follows = Follows::Player;
                }
            }
            None => self.current.player_last_duckling = None,
        }

        let player_pos = self.current.player.pos;
        if let Some(waddler) = self.current.ducklings[head].as_mut() {
            waddler.pos = player_pos;
            waddler.follows = Follows::Idle;
            waddler.direction = direction;
            waddler.waddling = true;
        }
        tracing::debug!("duckling {} sent waddling {:?}", head, direction);
    }

    /// Waddlers always take one step before any collision is looked at.
    pub(super) fn advance_waddlers(&mut self) {
        for duckling in self.current.ducklings.iter_mut().flatten() {
            if duckling.waddling {
                duckling.pos = duckling.pos.step(duckling.direction);
            }
        }
    }
}
