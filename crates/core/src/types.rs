use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_DUCKLINGS: usize = 16;
pub const MAX_BREADS: usize = 16;
pub const MAX_GEESE: usize = 16;

pub const DEFAULT_MAP_WIDTH: i32 = 20;
pub const DEFAULT_MAP_HEIGHT: i32 = 11;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn step(self, direction: Direction) -> Pos {
        self.offset(direction, 1)
    }

    pub fn offset(self, direction: Direction, tiles: i32) -> Pos {
        let (dx, dy) = direction.delta();
        Pos { y: self.y + dy * tiles, x: self.x + dx * tiles }
    }
}

/// Facing and movement direction, numbered clockwise from up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Rotate 180 degrees.
    pub fn reversed(self) -> Direction {
        Direction::ALL[(self as usize + 2) % 4]
    }

    /// The unit direction that carries `from` onto `to`, if they are adjacent.
    pub fn between(from: Pos, to: Pos) -> Option<Direction> {
        let delta = (to.x - from.x, to.y - from.y);
        Direction::ALL.into_iter().find(|direction| direction.delta() == delta)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Move(Direction),
    Waddle(Direction),
    Wait,
    Undo,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Victory {
    #[default]
    InProgress,
    Success,
    Failure,
}

impl Victory {
    pub fn is_decided(self) -> bool {
        self != Victory::InProgress
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Duckling,
    Bread,
    Goose,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityKind::Duckling => "duckling",
            EntityKind::Bread => "bread",
            EntityKind::Goose => "goose",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("all {kind} slots are in use")]
    CapacityExceeded { kind: EntityKind },
    #[error("cell ({}, {}) is already occupied", pos.x, pos.y)]
    Occupied { pos: Pos },
    #[error("cell ({}, {}) is outside the map", pos.x, pos.y)]
    OutOfBounds { pos: Pos },
}
