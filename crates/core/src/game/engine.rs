//! Single-tick move resolution.
//! This file fixes the phase order; each phase lives in a focused submodule.

use crate::state::{Follows, Snapshot};
use crate::types::*;

mod bounce;
mod geese;
mod movement;
mod waddle;


/// One tick in flight. `previous` is the untouched pre-move snapshot and is
/// the only source of before-state positions.
struct Tick<'a> {
    current: &'a mut Snapshot,
    previous: &'a Snapshot,
}

pub(super) fn resolve_tick(current: &mut Snapshot, previous: &Snapshot, action: Action) {
    let mut tick = Tick { current, previous };
    match action {
        Action::Move(direction) => tick.move_player(direction),
        Action::Waddle(direction) => tick.dispatch_waddler(direction),
        Action::Wait | Action::Undo => {}
    }
    tick.advance_waddlers();
    tick.resolve_bounces();
    tick.ducklings_pick_up_bread();
    let goose_got_bread = tick.move_geese();
    tick.evaluate_victory(goose_got_bread);
}

impl Tick<'_> {
    /// Move a chain member onto `target`, facing the way it stepped.
    fn step_duckling_to(&mut self, index: usize, target: Pos) {
        let Some(duckling) = self.current.ducklings[index].as_mut() else {
            return;
        };
        if let Some(direction) = Direction::between(duckling.pos, target) {
            duckling.direction = direction;
        }
        duckling.pos = target;
    }

    /// Where the leader of `follows` stood before this tick.
    fn leader_pre_move_pos(&self, follows: Follows) -> Option<Pos> {
        match follows {
            Follows::Player => Some(self.previous.player.pos),
            Follows::Duckling(leader) => self.previous.duckling_pos(leader),
            Follows::Idle => None,
        }
    }
}
