pub mod editor;
pub mod game;
pub mod journal;
pub mod puzzle_file;
pub mod replay;
pub mod state;
pub mod types;

pub use game::{Game, manhattan};
pub use journal::{ActionJournal, JournalError};
pub use puzzle_file::{PuzzleDir, PuzzleLoadError, load_puzzle, save_puzzle};
pub use replay::*;
pub use state::{Duckling, Follows, Goose, Player, Snapshot};
pub use types::*;
