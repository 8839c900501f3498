//! Player steps, idle-duckling recruitment and chain follow-through.

use super::*;

impl Tick<'_> {
    pub(super) fn move_player(&mut self, direction: Direction) {
        self.current.player.direction = direction;
        let destination = self.previous.player.pos.step(direction);

        let open = self.current.in_bounds(destination) && !self.current.is_occupied(destination);
        let recruited = if open {
            None
        } else {
            match self.current.idle_duckling_at(destination) {
                Some(index) => {
                    self.recruit(index);
                    Some(index)
                }
                None => return,
            }
        };

        self.current.player.pos = destination;
        if let Some(bread) = self.current.bread_at(destination) {
            self.current.breads[bread] = None;
            self.current.player.bread_count += 1;
        }

        let chain: Vec<usize> = self.current.chain().collect();
        for index in chain {
            if Some(index) == recruited {
                continue;
            }
            let Some(duckling) = self.current.ducklings[index] else {
                continue;
            };
            if let Some(target) = self.leader_pre_move_pos(duckling.follows) {
                self.step_duckling_to(index, target);
            }
        }
    }

    /// Append an idle duckling to the chain tail. It takes the spot the old
    /// tail is about to vacate, or the player's spot for an empty chain.
    fn recruit(&mut self, index: usize) {
        let (follows, pos) = match self.current.player_last_duckling {
            Some(tail) => match self.previous.duckling_pos(tail) {
                Some(tail_pos) => (Follows::Duckling(tail), tail_pos),
                None => (Follows::Player, self.previous.player.pos),
            },
            None => (Follows::Player, self.previous.player.pos),
        };

        let Some(duckling) = self.current.ducklings[index].as_mut() else {
            return;
        };
        duckling.follows = follows;
        duckling.pos = pos;
        duckling.waddling = false;
        if duckling.holds_bread {
            duckling.holds_bread = false;
            self.current.player.bread_count += 1;
        }
        self.current.player_last_duckling = Some(index);
        tracing::debug!("duckling {} recruited behind {:?}", index, follows);
    }
}
