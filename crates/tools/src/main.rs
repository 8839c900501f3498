//! `duckline`: headless puzzle tools to create, inspect, play and replay puzzles.
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use game_core::{
    Action, ActionJournal, Direction, Game, PuzzleDir, ReplayResult, Snapshot, replay_to_end,
};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Puzzle directory; defaults to $DUCKLINE_PUZZLE_DIR, then ./puzzles
    #[arg(long, global = true)]
    puzzle_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write an empty puzzle with the given board size
    New {
        puzzle: String,
        #[arg(long, default_value_t = game_core::DEFAULT_MAP_WIDTH)]
        width: i32,
        #[arg(long, default_value_t = game_core::DEFAULT_MAP_HEIGHT)]
        height: i32,
        /// Overwrite an existing puzzle file
        #[arg(long)]
        force: bool,
    },
    /// Print a puzzle's board and entity counts
    Show { puzzle: String },
    /// Apply a string of actions to a puzzle and print the result
    ///
    /// Letters: U R D L move, u r d l waddle, `.` waits, `z` undoes.
    Play {
        puzzle: String,
        actions: String,
        /// Save the accepted actions as a JSON journal
        #[arg(long)]
        record: Option<PathBuf>,
    },
    /// Replay a JSON journal against the puzzle it was recorded on
    Replay {
        #[arg(short, long)]
        journal: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let puzzles = match cli.puzzle_dir {
        Some(root) => PuzzleDir::new(root),
        None => PuzzleDir::from_env(),
    };

    match cli.command {
        Commands::New { puzzle, width, height, force } => {
            new_puzzle(&puzzles, &puzzle, width, height, force)
        }
        Commands::Show { puzzle } => show_puzzle(&puzzles, &puzzle),
        Commands::Play { puzzle, actions, record } => {
            play_puzzle(&puzzles, &puzzle, &actions, record)
        }
        Commands::Replay { journal } => replay_journal(&puzzles, journal),
    }
}

fn new_puzzle(
    puzzles: &PuzzleDir,
    name: &str,
    width: i32,
    height: i32,
    force: bool,
) -> Result<()> {
    if width < 1 || height < 1 {
        bail!("board must be at least 1x1, got {width}x{height}");
    }
    let path = puzzles.path_for(name);
    if path.exists() && !force {
        bail!("{} already exists; pass --force to overwrite", path.display());
    }

    let mut snapshot = Snapshot::new_puzzle();
    snapshot.map_width = width;
    snapshot.map_height = height;
    snapshot.player.pos.x = snapshot.player.pos.x.min(width - 1);
    snapshot.player.pos.y = snapshot.player.pos.y.min(height - 1);

    let written = puzzles
        .save(&snapshot, name)
        .with_context(|| format!("Failed to write puzzle: {}", path.display()))?;
    tracing::info!("wrote {}", written.display());
    Ok(())
}

fn load(puzzles: &PuzzleDir, name: &str) -> Result<Snapshot> {
    puzzles
        .load(name)
        .with_context(|| format!("Failed to load puzzle: {}", puzzles.path_for(name).display()))
}

fn print_snapshot(snapshot: &Snapshot) {
    print!("{}", snapshot.draw_board());
    println!(
        "Ducklings: {} ({} in chain)",
        snapshot.duckling_count(),
        snapshot.duckling_chain_length()
    );
    println!(
        "Bread: {} on board, {} collected",
        snapshot.bread_count(),
        snapshot.player.bread_count
    );
    println!("Required: {}", snapshot.required_bread);
    println!("Geese: {}", snapshot.goose_count());
    println!("Outcome: {:?}", snapshot.victory_state());
}

fn show_puzzle(puzzles: &PuzzleDir, name: &str) -> Result<()> {
    let snapshot = load(puzzles, name)?;
    print_snapshot(&snapshot);
    Ok(())
}

fn parse_action(letter: char) -> Option<Action> {
    let action = match letter {
        'U' => Action::Move(Direction::Up),
        'R' => Action::Move(Direction::Right),
        'D' => Action::Move(Direction::Down),
        'L' => Action::Move(Direction::Left),
        'u' => Action::Waddle(Direction::Up),
        'r' => Action::Waddle(Direction::Right),
        'd' => Action::Waddle(Direction::Down),
        'l' => Action::Waddle(Direction::Left),
        '.' => Action::Wait,
        'z' => Action::Undo,
        _ => return None,
    };
    Some(action)
}

fn play_puzzle(
    puzzles: &PuzzleDir,
    name: &str,
    letters: &str,
    record: Option<PathBuf>,
) -> Result<()> {
    let actions = letters
        .chars()
        .filter(|letter| !letter.is_whitespace())
        .map(|letter| {
            parse_action(letter).ok_or_else(|| anyhow!("Unknown action letter `{letter}`"))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut game = Game::new(load(puzzles, name)?);
    let mut journal = ActionJournal::new(name);
    for action in actions {
        game.apply_action(action);
        journal.push(action);
    }

    print_snapshot(game.snapshot());
    println!("Tick: {}", game.history_len());
    println!("Snapshot Hash: {:#018x}", game.snapshot().snapshot_hash());

    if let Some(path) = record {
        journal
            .write_atomic(&path)
            .with_context(|| format!("Failed to write journal: {}", path.display()))?;
        tracing::info!("recorded {} actions to {}", journal.len(), path.display());
    }
    Ok(())
}

fn replay_journal(puzzles: &PuzzleDir, path: PathBuf) -> Result<()> {
    let journal = ActionJournal::load(&path)
        .with_context(|| format!("Failed to read journal file: {}", path.display()))?;
    let initial = load(puzzles, &journal.puzzle)?;

    let result: ReplayResult =
        replay_to_end(initial, &journal).context("Replay failed during execution")?;

    println!("Replay complete.");
    println!("Final Tick: {}", result.final_tick);
    println!("Outcome: {:?}", result.final_victory);
    println!("Snapshot Hash: {:#018x}", result.final_snapshot_hash);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_letters_cover_every_action() {
        assert_eq!(parse_action('R'), Some(Action::Move(Direction::Right)));
        assert_eq!(parse_action('l'), Some(Action::Waddle(Direction::Left)));
        assert_eq!(parse_action('.'), Some(Action::Wait));
        assert_eq!(parse_action('z'), Some(Action::Undo));
        assert_eq!(parse_action('x'), None);
    }

    #[test]
    fn cli_accepts_global_puzzle_dir_after_the_subcommand() {
        let cli = Cli::try_parse_from(["duckline", "show", "pond.txt", "--puzzle-dir", "/tmp/p"])
            .expect("valid arguments");
        assert_eq!(cli.puzzle_dir, Some(PathBuf::from("/tmp/p")));
        assert!(matches!(cli.command, Commands::Show { ref puzzle } if puzzle == "pond.txt"));
    }
}
