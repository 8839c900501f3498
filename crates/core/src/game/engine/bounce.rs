//! Collisions of idle ducklings against the map edge, the player and other
//! ducklings, followed by bread pickup for every duckling.

use super::*;

impl Tick<'_> {
    /// Single pass in slot order over every idle duckling, resting or
    /// waddling. A correction is never re-checked, so a bounced duckling may
    /// land on an illegal cell until the next tick. Geese are not obstacles.
    pub(super) fn resolve_bounces(&mut self) {
        for index in 0..MAX_DUCKLINGS {
            let Some(duckling) = self.current.ducklings[index] else {
                continue;
            };
            if duckling.follows != Follows::Idle {
                continue;
            }

            if !self.current.in_bounds(duckling.pos) {
                self.bounce(index);
            } else if duckling.pos == self.current.player.pos {
                if let Some(pos) = self.previous.duckling_pos(index)
                    && let Some(bumped) = self.current.ducklings[index].as_mut()
                {
                    bumped.pos = pos;
                }
            } else {
                self.bounce_off_ducklings(index);
            }
        }
    }

    /// Every duckling sharing the cell turns `index` around; the other one
    /// is only turned around too when it is waddling.
    fn bounce_off_ducklings(&mut self, index: usize) {
        for other in 0..MAX_DUCKLINGS {
            if other == index {
                continue;
            }
            let (Some(this), Some(that)) =
                (self.current.ducklings[index], self.current.ducklings[other])
            else {
                continue;
            };
            if this.pos != that.pos {
                continue;
            }
            self.bounce(index);
            if that.is_waddler() {
                self.bounce(other);
            }
        }
    }

    /// Turn around and take two tiles back: net one tile behind the
    /// collision cell, facing the other way.
    fn bounce(&mut self, index: usize) {
        if let Some(duckling) = self.current.ducklings[index].as_mut() {
            duckling.direction = duckling.direction.reversed();
            duckling.pos = duckling.pos.offset(duckling.direction, 2);
        }
    }

    pub(super) fn ducklings_pick_up_bread(&mut self) {
        for duckling in self.current.ducklings.iter_mut().flatten() {
            if duckling.holds_bread {
                continue;
            }
            // Overlapping breads are all taken in the same tick.
            for bread in self.current.breads.iter_mut() {
                if *bread == Some(duckling.pos) {
                    *bread = None;
                    duckling.holds_bread = true;
                }
            }
        }
    }
}
