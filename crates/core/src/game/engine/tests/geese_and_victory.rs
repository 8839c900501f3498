//! Goose turns and end-of-tick outcome.

use super::support::*;

#[test]
fn goose_reaches_bread_in_manhattan_distance_ticks() {
    let mut start = open_board(20, 11, Pos { y: 0, x: 0 });
    start.required_bread = 5;
    let goose = add_goose(&mut start, Pos { y: 5, x: 10 });
    add_bread(&mut start, Pos { y: 8, x: 14 });

    let mut game = Game::new(start);
    for remaining in (1..7u32).rev() {
        game.apply_action(Action::Wait);
        let pos = game.snapshot().geese[goose].map(|goose| goose.pos);
        assert_eq!(pos.map(|pos| manhattan(pos, Pos { y: 8, x: 14 })), Some(remaining));
        assert_eq!(game.snapshot().victory, Victory::InProgress);
    }
    game.apply_action(Action::Wait);

    assert_eq!(game.snapshot().geese[goose].map(|goose| goose.pos), Some(Pos { y: 8, x: 14 }));
    assert_eq!(game.snapshot().bread_count(), 0);
    assert_eq!(game.snapshot().victory, Victory::Failure);
}

#[test]
fn lower_slot_goose_claims_contested_bread_first() {
    let mut start = open_board(5, 1, Pos { y: 0, x: 0 });
    start.required_bread = 1;
    start.geese[0] = Some(Goose::at(Pos { y: 0, x: 1 }));
    start.geese[1] = Some(Goose::at(Pos { y: 0, x: 3 }));
    add_bread(&mut start, Pos { y: 0, x: 2 });

    let next = tick(&start, Action::Wait);

    assert_eq!(next.geese[0].map(|goose| goose.pos), Some(Pos { y: 0, x: 2 }));
    assert_eq!(next.geese[1].map(|goose| goose.pos), Some(Pos { y: 0, x: 3 }));
    assert_eq!(next.victory, Victory::Failure);
}

#[test]
fn geese_that_have_not_moved_yet_still_block() {
    // Slot 0 sits behind slot 1 in a one-row corridor and is processed first,
    // so slot 1 is still in its way.
    let mut start = open_board(5, 1, Pos { y: 0, x: 0 });
    start.required_bread = 1;
    start.geese[0] = Some(Goose::at(Pos { y: 0, x: 1 }));
    start.geese[1] = Some(Goose::at(Pos { y: 0, x: 2 }));
    add_bread(&mut start, Pos { y: 0, x: 4 });

    let next = tick(&start, Action::Wait);

    assert_eq!(next.geese[0].map(|goose| goose.pos), Some(Pos { y: 0, x: 1 }));
    assert_eq!(next.geese[1].map(|goose| goose.pos), Some(Pos { y: 0, x: 3 }));
    assert_eq!(next.victory, Victory::InProgress);
}

#[test]
fn trapped_goose_waits_without_failing_the_tick() {
    let mut start = open_board(5, 5, Pos { y: 4, x: 4 });
    start.required_bread = 1;
    let goose = add_goose(&mut start, Pos { y: 0, x: 0 });
    start.ducklings[0] = Some(Duckling::idle_at(Pos { y: 0, x: 1 }));
    start.ducklings[1] = Some(Duckling::idle_at(Pos { y: 1, x: 0 }));
    add_bread(&mut start, Pos { y: 3, x: 3 });

    let next = tick(&start, Action::Wait);

    assert_eq!(next.geese[goose].map(|goose| goose.pos), Some(Pos { y: 0, x: 0 }));
    assert_eq!(next.victory, Victory::InProgress);
}

#[test]
fn collecting_required_bread_wins() {
    let mut start = open_board(10, 10, Pos { y: 2, x: 2 });
    start.required_bread = 1;
    add_bread(&mut start, Pos { y: 2, x: 3 });

    let next = tick(&start, Action::Move(Direction::Right));

    assert_eq!(next.player.bread_count, 1);
    assert_eq!(next.victory, Victory::Success);
}

#[test]
fn goose_theft_beats_player_win_in_the_same_tick() {
    let mut start = open_board(20, 11, Pos { y: 2, x: 2 });
    start.required_bread = 1;
    add_bread(&mut start, Pos { y: 2, x: 3 });
    add_goose(&mut start, Pos { y: 5, x: 10 });
    add_bread(&mut start, Pos { y: 5, x: 11 });

    let next = tick(&start, Action::Move(Direction::Right));

    assert_eq!(next.player.bread_count, 1);
    assert_eq!(next.victory, Victory::Failure);
}

#[test]
fn delivered_bread_counts_toward_victory() {
    let mut start = open_board_with_idle_duckling();
    start.breads = [None; MAX_BREADS];
    start.required_bread = 1;
    start.ducklings[0] = Some(Duckling { holds_bread: true, ..duckling(&start, 0) });

    let next = tick(&start, Action::Move(Direction::Right));

    assert_eq!(next.victory, Victory::Success);
}
