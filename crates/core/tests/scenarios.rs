use duckline_core::{Action, Direction, Follows, Game, Pos, PuzzleDir, Snapshot, Victory};
use tempfile::tempdir;

fn board_with_idle_duckling() -> Snapshot {
    let mut snapshot = Snapshot::new_puzzle();
    snapshot.place_duckling(Pos { y: 2, x: 3 }).expect("free cell");
    snapshot
}

#[test]
fn first_move_recruits_the_idle_duckling() {
    let mut game = Game::new(board_with_idle_duckling());
    let next = game.apply_action(Action::Move(Direction::Right));

    assert_eq!(next.player.pos, Pos { y: 2, x: 3 });
    assert_eq!(next.duckling_chain_length(), 1);
    let duckling = next.ducklings[0].expect("duckling stays in its slot");
    assert_eq!(duckling.pos, Pos { y: 2, x: 2 });
    assert_eq!(duckling.follows, Follows::Player);
    assert_eq!(next.player_last_duckling, Some(0));
}

#[test]
fn chain_trails_one_tile_behind_the_player() {
    let mut game = Game::new(board_with_idle_duckling());
    game.apply_action(Action::Move(Direction::Right));

    let mut player_trail = vec![game.snapshot().player.pos];
    for _ in 0..3 {
        game.apply_action(Action::Move(Direction::Right));
        player_trail.push(game.snapshot().player.pos);
        let duckling = game.snapshot().ducklings[0].map(|duckling| duckling.pos);
        assert_eq!(duckling, Some(player_trail[player_trail.len() - 2]));
    }

    assert_eq!(game.snapshot().player.pos, Pos { y: 2, x: 6 });
    assert_eq!(game.snapshot().ducklings[0].map(|duckling| duckling.pos), Some(Pos { y: 2, x: 5 }));
}

fn bread_run(with_goose: bool) -> Game {
    let mut snapshot = Snapshot::new_puzzle();
    for x in 3..=5 {
        snapshot.place_bread(Pos { y: 2, x }).expect("free cell");
    }
    if with_goose {
        snapshot.place_bread(Pos { y: 8, x: 12 }).expect("free cell");
        snapshot.place_goose(Pos { y: 5, x: 12 }).expect("free cell");
    }
    snapshot.required_bread = 3;
    Game::new(snapshot)
}

#[test]
fn collecting_the_required_bread_wins() {
    let mut game = bread_run(false);
    for expected in [Victory::InProgress, Victory::InProgress, Victory::Success] {
        let next = game.apply_action(Action::Move(Direction::Right));
        assert_eq!(next.victory, expected);
    }
    assert_eq!(game.snapshot().player.bread_count, 3);
}

#[test]
fn goose_reaching_bread_loses_regardless_of_collected_bread() {
    let mut game = bread_run(true);
    game.apply_action(Action::Move(Direction::Right));
    game.apply_action(Action::Move(Direction::Right));
    let next = game.apply_action(Action::Move(Direction::Right));

    assert_eq!(next.player.bread_count, 3);
    assert_eq!(next.geese[0].map(|goose| goose.pos), Some(Pos { y: 8, x: 12 }));
    assert_eq!(next.victory, Victory::Failure);
}

#[test]
fn wait_on_a_still_board_only_pushes_history() {
    let mut start = board_with_idle_duckling();
    start.required_bread = 1;
    start.place_bread(Pos { y: 7, x: 7 }).expect("free cell");
    let mut game = Game::new(start.clone());

    let next = game.apply_action(Action::Wait);
    assert_eq!(*next, start);
    assert_eq!(game.history_len(), 1);
}

#[test]
fn undo_reverses_every_tick_back_to_the_start() {
    let start = board_with_idle_duckling();
    let mut game = Game::new(start.clone());
    let actions = [
        Action::Move(Direction::Right),
        Action::Move(Direction::Down),
        Action::Waddle(Direction::Right),
        Action::Wait,
        Action::Move(Direction::Left),
    ];
    for action in actions {
        game.apply_action(action);
    }
    for _ in actions {
        assert!(game.undo());
    }

    assert_eq!(*game.snapshot(), start);
    assert!(!game.undo(), "root of history stays put");
    assert_eq!(*game.snapshot(), start);
}

#[test]
fn reloaded_puzzle_plays_out_identically() {
    let dir = tempdir().unwrap();
    let puzzles = PuzzleDir::new(dir.path());

    let mut authored = board_with_idle_duckling();
    authored.place_bread(Pos { y: 6, x: 9 }).unwrap();
    authored.place_goose(Pos { y: 9, x: 15 }).unwrap();
    authored.required_bread = authored.bread_count() as u32;
    puzzles.save(&authored, "pond.txt").unwrap();
    let reloaded = puzzles.load("pond.txt").unwrap();
    assert_eq!(reloaded, authored);

    let mut left = Game::new(authored);
    let mut right = Game::new(reloaded);
    for action in [Action::Move(Direction::Right), Action::Wait, Action::Move(Direction::Down)] {
        left.apply_action(action);
        right.apply_action(action);
    }
    assert_eq!(left.snapshot_hash(), right.snapshot_hash());
}
