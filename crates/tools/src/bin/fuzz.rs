use std::io;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use game_core::{
    Action, Direction, Follows, Game, MAX_DUCKLINGS, Pos, PuzzleDir, Snapshot, Victory,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    ticks: u32,
    /// Puzzle to fuzz; a random board is generated when omitted
    #[arg(short, long)]
    puzzle: Option<String>,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn below(rng: &mut ChaCha8Rng, bound: i32) -> i32 {
    (rng.next_u64() % bound as u64) as i32
}

fn cell(rng: &mut ChaCha8Rng, snapshot: &Snapshot) -> Pos {
    Pos { y: below(rng, snapshot.map_height), x: below(rng, snapshot.map_width) }
}

fn random_board(rng: &mut ChaCha8Rng) -> Snapshot {
    let mut snapshot = Snapshot::new_puzzle();
    snapshot.required_bread = 1 + below(rng, 3) as u32;

    // Refused placements are fine; the slot just stays empty.
    for _ in 0..below(rng, 10) {
        let pos = cell(rng, &snapshot);
        let _ = snapshot.place_duckling(pos);
    }
    for _ in 0..below(rng, 6) {
        let pos = cell(rng, &snapshot);
        let _ = snapshot.place_bread(pos);
    }
    for _ in 0..below(rng, 4) {
        let pos = cell(rng, &snapshot);
        let _ = snapshot.place_goose(pos);
    }
    snapshot
}

fn check_invariants(snapshot: &Snapshot) -> Result<()> {
    ensure!(snapshot.in_bounds(snapshot.player.pos), "Invariant failed: player off the map");
    for goose in snapshot.geese.iter().flatten() {
        ensure!(snapshot.in_bounds(goose.pos), "Invariant failed: goose off the map");
    }

    let chain: Vec<usize> = snapshot.chain().collect();
    ensure!(chain.len() <= MAX_DUCKLINGS, "Invariant failed: chain longer than capacity");
    ensure!(
        chain.len() == snapshot.duckling_chain_length(),
        "Invariant failed: chain walk skipped a chained duckling"
    );
    if let Some(&head) = chain.last() {
        let follows = snapshot.ducklings[head].map(|duckling| duckling.follows);
        ensure!(follows == Some(Follows::Player), "Invariant failed: chain head is detached");
    }
    // Bounces knock idle ducklings at most two tiles past the edge.
    for duckling in snapshot.ducklings.iter().flatten() {
        let Pos { y, x } = duckling.pos;
        let near = (-4..snapshot.map_width + 4).contains(&x)
            && (-4..snapshot.map_height + 4).contains(&y);
        ensure!(
            duckling.follows != Follows::Idle || near,
            "Invariant failed: idle duckling drifted to {:?}",
            duckling.pos
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let start = match &args.puzzle {
        Some(name) => {
            let path = PuzzleDir::from_env().path_for(name);
            game_core::load_puzzle(&path)
                .with_context(|| format!("Failed to load puzzle: {}", path.display()))?
        }
        None => random_board(&mut rng),
    };

    println!("Starting Fuzz harness on seed {} for max {} ticks...", args.seed, args.ticks);
    let mut game = Game::new(start.clone());
    let actions = [
        Action::Move(Direction::Up),
        Action::Move(Direction::Right),
        Action::Move(Direction::Down),
        Action::Move(Direction::Left),
        Action::Waddle(Direction::Up),
        Action::Waddle(Direction::Right),
        Action::Waddle(Direction::Down),
        Action::Waddle(Direction::Left),
        Action::Wait,
        Action::Undo,
    ];

    for tick in 0..args.ticks {
        let action = choose(&mut rng, &actions);
        let outcome = game.apply_action(action).victory;
        check_invariants(game.snapshot()).with_context(|| format!("after {action:?} at {tick}"))?;

        if outcome != Victory::InProgress {
            println!("Decided {:?} after {} ticks, undoing", outcome, tick + 1);
            game.undo();
        }
    }

    while game.undo() {}
    ensure!(*game.snapshot() == start, "Invariant failed: full undo did not restore the start");

    println!("Fuzzing completed successfully.");
    Ok(())
}
