//! Shared test fixtures for the `game` submodule test suites.
//! This module exists to avoid repeating board and chain setup across many tests.
//! It does not own production gameplay logic.

use super::*;
use crate::state::{Duckling, Follows, Goose};

pub(crate) fn open_board(width: i32, height: i32, player: Pos) -> Snapshot {
    let mut snapshot = Snapshot::new_puzzle();
    snapshot.map_width = width;
    snapshot.map_height = height;
    snapshot.player.pos = player;
    snapshot
}

/// Default 20x11 board, player at (2,2), one idle duckling just to the right.
pub(crate) fn open_board_with_idle_duckling() -> Snapshot {
    let mut snapshot = Snapshot::new_puzzle();
    snapshot.ducklings[0] = Some(Duckling::idle_at(Pos { y: 2, x: 3 }));
    snapshot.required_bread = 1;
    snapshot.breads[0] = Some(Pos { y: 9, x: 18 });
    snapshot
}

/// Player at (3,2) with one chained duckling behind at (2,2).
pub(crate) fn recruited_chain_fixture() -> Snapshot {
    let mut snapshot = open_board_with_idle_duckling();
    snapshot.player.pos = Pos { y: 2, x: 3 };
    snapshot.ducklings[0] = Some(chained_at(Pos { y: 2, x: 2 }, Follows::Player));
    snapshot.player_last_duckling = Some(0);
    snapshot
}

/// Player at (5,5) heading right with a two-duckling chain trailing left:
/// slot 0 at (4,5) behind the player, slot 1 at (3,5) behind slot 0.
pub(crate) fn two_chain_fixture() -> Snapshot {
    let mut snapshot = open_board_with_idle_duckling();
    snapshot.player.pos = Pos { y: 5, x: 5 };
    snapshot.ducklings[0] = Some(chained_at(Pos { y: 5, x: 4 }, Follows::Player));
    snapshot.ducklings[1] = Some(chained_at(Pos { y: 5, x: 3 }, Follows::Duckling(0)));
    snapshot.player_last_duckling = Some(1);
    snapshot
}

pub(crate) fn chained_at(pos: Pos, follows: Follows) -> Duckling {
    Duckling { follows, ..Duckling::idle_at(pos) }
}

pub(crate) fn waddler_at(pos: Pos, direction: Direction) -> Duckling {
    Duckling { direction, waddling: true, ..Duckling::idle_at(pos) }
}

pub(crate) fn add_goose(snapshot: &mut Snapshot, pos: Pos) -> usize {
    let index = snapshot
        .geese
        .iter()
        .position(Option::is_none)
        .expect("fixture boards keep a free goose slot");
    snapshot.geese[index] = Some(Goose::at(pos));
    index
}

pub(crate) fn add_bread(snapshot: &mut Snapshot, pos: Pos) -> usize {
    let index = snapshot
        .breads
        .iter()
        .position(Option::is_none)
        .expect("fixture boards keep a free bread slot");
    snapshot.breads[index] = Some(pos);
    index
}

/// Every chain walk from the tail must reach the player.
pub(crate) fn assert_chain_terminates(snapshot: &Snapshot) {
    let chain: Vec<usize> = snapshot.chain().collect();
    assert!(chain.len() <= MAX_DUCKLINGS);
    assert_eq!(chain.len(), snapshot.duckling_chain_length(), "every chained duckling is walked");
    if let Some(&head) = chain.last() {
        assert_eq!(
            snapshot.ducklings[head].map(|duckling| duckling.follows),
            Some(Follows::Player),
            "chain must end behind the player"
        );
    }
}
