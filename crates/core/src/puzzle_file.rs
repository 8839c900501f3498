//! Line-oriented puzzle files.
//!
//! The format is one whitespace-separated directive per line:
//! - `save_version 1`
//! - `map_width <w>`, `map_height <h>`, `required_bread <n>`
//! - `player <x> <y>`
//! - `duckling <x> <y>`, `bread <x> <y>`, `goose <x> <y>`, one line each.
//!
//! Directive order is not significant. Unknown directives are skipped so
//! newer files still load; a known directive with bad parameters is an error.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::state::Snapshot;
use crate::types::*;

pub const SAVE_VERSION: i32 = 1;

/// Environment variable that overrides the puzzle directory.
pub const PUZZLE_DIR_ENV: &str = "DUCKLINE_PUZZLE_DIR";
pub const DEFAULT_PUZZLE_DIR: &str = "puzzles";

#[derive(Debug, Error)]
pub enum PuzzleLoadError {
    #[error("puzzle I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("unsupported save_version {0}")]
    UnsupportedVersion(i32),
    #[error("invalid puzzle line {line}: {message}")]
    InvalidLine { line: usize, message: String },
    #[error("puzzle does not fit: {0}")]
    Capacity(#[from] EditorError),
}

// ---------------------------------------------------------------------------
// Text codec
// ---------------------------------------------------------------------------

/// Render a snapshot as puzzle text. `required_bread` is written as the
/// number of bread items currently on the board.
pub fn encode_puzzle(snapshot: &Snapshot) -> String {
    let mut lines = vec![
        format!("save_version {SAVE_VERSION}"),
        format!("map_width {}", snapshot.map_width),
        format!("map_height {}", snapshot.map_height),
        format!("required_bread {}", snapshot.bread_count()),
        format!("player {} {}", snapshot.player.pos.x, snapshot.player.pos.y),
    ];
    lines.extend(snapshot.ducklings.iter().flatten().map(|d| positioned("duckling", d.pos)));
    lines.extend(snapshot.breads.iter().flatten().map(|pos| positioned("bread", *pos)));
    lines.extend(snapshot.geese.iter().flatten().map(|goose| positioned("goose", goose.pos)));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn positioned(directive: &str, pos: Pos) -> String {
    format!("{directive} {} {}", pos.x, pos.y)
}

/// Parse puzzle text onto a fresh default board. Entities fill the first
/// free slot of their kind in file order. Positions are checked against the
/// final map size once every line has been read.
pub fn decode_puzzle(text: &str) -> Result<Snapshot, PuzzleLoadError> {
    let mut snapshot = Snapshot::new_puzzle();
    let mut placed: Vec<(usize, &str, Pos)> = Vec::new();

    for (line_index, raw) in text.lines().enumerate() {
        let line = line_index + 1;
        let mut tokens = raw.split_whitespace();
        let Some(directive) = tokens.next() else {
            continue;
        };
        let params: Vec<&str> = tokens.collect();

        match directive {
            "save_version" => {
                let [version] = parse_params::<1>(line, directive, &params)?;
                if version != SAVE_VERSION {
                    return Err(PuzzleLoadError::UnsupportedVersion(version));
                }
            }
            "map_width" => {
                let [width] = parse_params::<1>(line, directive, &params)?;
                snapshot.map_width = positive(line, directive, width)?;
            }
            "map_height" => {
                let [height] = parse_params::<1>(line, directive, &params)?;
                snapshot.map_height = positive(line, directive, height)?;
            }
            "required_bread" => {
                let [required] = parse_params::<1>(line, directive, &params)?;
                snapshot.required_bread = u32::try_from(required).map_err(|_| {
                    PuzzleLoadError::InvalidLine {
                        line,
                        message: format!("required_bread must not be negative, found {required}"),
                    }
                })?;
            }
            "player" => {
                let pos = parse_pos(line, directive, &params)?;
                snapshot.player.pos = pos;
                placed.push((line, directive, pos));
            }
            "duckling" => {
                let pos = parse_pos(line, directive, &params)?;
                snapshot.insert_duckling(pos)?;
                placed.push((line, directive, pos));
            }
            "bread" => {
                let pos = parse_pos(line, directive, &params)?;
                snapshot.insert_bread(pos)?;
                placed.push((line, directive, pos));
            }
            "goose" => {
                let pos = parse_pos(line, directive, &params)?;
                snapshot.insert_goose(pos)?;
                placed.push((line, directive, pos));
            }
            _ => {
                tracing::trace!("skipping unknown directive `{}` on line {}", directive, line);
            }
        }
    }

    for (line, directive, pos) in placed {
        if !snapshot.in_bounds(pos) {
            return Err(PuzzleLoadError::InvalidLine {
                line,
                message: format!(
                    "{directive} at ({}, {}) is off the {}x{} map",
                    pos.x, pos.y, snapshot.map_width, snapshot.map_height
                ),
            });
        }
    }

    Ok(snapshot)
}

fn parse_pos(line: usize, directive: &str, params: &[&str]) -> Result<Pos, PuzzleLoadError> {
    let [x, y] = parse_params::<2>(line, directive, params)?;
    Ok(Pos { y, x })
}

fn parse_params<const N: usize>(
    line: usize,
    directive: &str,
    params: &[&str],
) -> Result<[i32; N], PuzzleLoadError> {
    if params.len() != N {
        return Err(PuzzleLoadError::InvalidLine {
            line,
            message: format!("{directive} takes {N} values, found {}", params.len()),
        });
    }
    let mut values = [0; N];
    for (value, param) in values.iter_mut().zip(params) {
        *value = param.parse().map_err(|_| PuzzleLoadError::InvalidLine {
            line,
            message: format!("{directive}: `{param}` is not an integer"),
        })?;
    }
    Ok(values)
}

fn positive(line: usize, directive: &str, value: i32) -> Result<i32, PuzzleLoadError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(PuzzleLoadError::InvalidLine {
            line,
            message: format!("{directive} must be positive, found {value}"),
        })
    }
}

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

/// Write puzzle text through a sibling temp file and rename it into place.
pub fn save_puzzle(snapshot: &Snapshot, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);

    fs::write(&tmp_path, encode_puzzle(snapshot))?;
    fs::rename(&tmp_path, path)?;
    tracing::debug!("saved puzzle to {}", path.display());
    Ok(())
}

pub fn load_puzzle(path: &Path) -> Result<Snapshot, PuzzleLoadError> {
    let text = fs::read_to_string(path)?;
    let snapshot = decode_puzzle(&text)?;
    tracing::debug!(
        "loaded puzzle {}: {} ducklings, {} bread, {} geese",
        path.display(),
        snapshot.duckling_count(),
        snapshot.bread_count(),
        snapshot.goose_count()
    );
    Ok(snapshot)
}

/// Directory that puzzle filenames are resolved against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleDir {
    root: PathBuf,
}

impl Default for PuzzleDir {
    fn default() -> Self {
        Self::new(DEFAULT_PUZZLE_DIR)
    }
}

impl PuzzleDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Pick the directory from an optional override value. Blank values
    /// fall back to the default.
    pub fn resolve(override_value: Option<&str>) -> Self {
        match override_value.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => Self::new(value),
            None => Self::default(),
        }
    }

    pub fn from_env() -> Self {
        Self::resolve(env::var(PUZZLE_DIR_ENV).ok().as_deref())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    pub fn save(&self, snapshot: &Snapshot, filename: &str) -> io::Result<PathBuf> {
        let path = self.path_for(filename);
        save_puzzle(snapshot, &path)?;
        Ok(path)
    }

    pub fn load(&self, filename: &str) -> Result<Snapshot, PuzzleLoadError> {
        load_puzzle(&self.path_for(filename))
    }
}
