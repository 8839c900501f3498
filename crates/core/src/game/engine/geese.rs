//! Goose turn and end-of-tick outcome.

use super::*;
use crate::game::pathfinding::advance_goose;

impl Tick<'_> {
    /// Geese move one at a time in slot order, each seeing the geese moved
    /// before it. Returns whether any goose reached bread this tick.
    pub(super) fn move_geese(&mut self) -> bool {
        let mut goose_got_bread = false;
        for index in 0..MAX_GEESE {
            if self.current.geese[index].is_none() {
                continue;
            }
            advance_goose(self.current, index);

            let Some(goose) = self.current.geese[index] else {
                continue;
            };
            if let Some(bread) = self.current.bread_at(goose.pos) {
                self.current.breads[bread] = None;
                goose_got_bread = true;
                tracing::debug!("goose {} took bread {} at {:?}", index, bread, goose.pos);
            }
        }
        goose_got_bread
    }

    pub(super) fn evaluate_victory(&mut self, goose_got_bread: bool) {
        if goose_got_bread {
            self.current.victory = Victory::Failure;
        } else if self.current.player.bread_count >= self.current.required_bread {
            self.current.victory = Victory::Success;
        }
    }
}
