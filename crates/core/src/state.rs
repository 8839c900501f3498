//! The snapshot: every piece of mutable game state at one tick.
//! Entity storage is fixed-capacity and slot-stable so chain links can
//! address ducklings by index across ticks.

use crate::types::*;

/// Who a duckling walks behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Follows {
    /// Not part of the chain. Waddlers are idle with `waddling` set.
    Idle,
    /// Chain head, directly behind the player.
    Player,
    /// Directly behind the duckling in this slot.
    Duckling(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Duckling {
    pub pos: Pos,
    pub follows: Follows,
    pub direction: Direction,
    pub waddling: bool,
    pub holds_bread: bool,
}

impl Duckling {
    pub fn idle_at(pos: Pos) -> Self {
        Self {
            pos,
            follows: Follows::Idle,
            direction: Direction::Right,
            waddling: false,
            holds_bread: false,
        }
    }

    pub fn is_waddler(&self) -> bool {
        self.follows == Follows::Idle && self.waddling
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Player {
    pub pos: Pos,
    pub direction: Direction,
    pub bread_count: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Goose {
    pub pos: Pos,
    pub direction: Direction,
}

impl Goose {
    pub fn at(pos: Pos) -> Self {
        Self { pos, direction: Direction::Right }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub map_width: i32,
    pub map_height: i32,
    pub player: Player,
    pub required_bread: u32,
    pub victory: Victory,
    pub ducklings: [Option<Duckling>; MAX_DUCKLINGS],
    pub breads: [Option<Pos>; MAX_BREADS],
    pub geese: [Option<Goose>; MAX_GEESE],
    /// Chain tail: the most recently recruited duckling, first to move
    /// when the player moves.
    pub player_last_duckling: Option<usize>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new_puzzle()
    }
}

impl Snapshot {
    /// Empty default board with the player near the top-left corner.
    pub fn new_puzzle() -> Self {
        Self {
            map_width: DEFAULT_MAP_WIDTH,
            map_height: DEFAULT_MAP_HEIGHT,
            player: Player { pos: Pos { y: 2, x: 2 }, direction: Direction::Right, bread_count: 0 },
            required_bread: 0,
            victory: Victory::InProgress,
            ducklings: [None; MAX_DUCKLINGS],
            breads: [None; MAX_BREADS],
            geese: [None; MAX_GEESE],
            player_last_duckling: None,
        }
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.map_width && pos.y < self.map_height
    }

    /// Player, ducklings and geese block a cell. Bread does not.
    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.player.pos == pos
            || self.ducklings.iter().flatten().any(|duckling| duckling.pos == pos)
            || self.geese.iter().flatten().any(|goose| goose.pos == pos)
    }

    pub fn duckling_pos(&self, index: usize) -> Option<Pos> {
        self.ducklings.get(index).copied().flatten().map(|duckling| duckling.pos)
    }

    pub fn duckling_at(&self, pos: Pos) -> Option<usize> {
        self.ducklings.iter().position(|slot| slot.is_some_and(|duckling| duckling.pos == pos))
    }

    pub fn idle_duckling_at(&self, pos: Pos) -> Option<usize> {
        self.ducklings.iter().position(|slot| {
            slot.is_some_and(|duckling| duckling.pos == pos && duckling.follows == Follows::Idle)
        })
    }

    pub fn bread_at(&self, pos: Pos) -> Option<usize> {
        self.breads.iter().position(|slot| *slot == Some(pos))
    }

    pub fn goose_at(&self, pos: Pos) -> Option<usize> {
        self.geese.iter().position(|slot| slot.is_some_and(|goose| goose.pos == pos))
    }

    /// Chain members from tail to head.
    pub fn chain(&self) -> ChainWalk<'_> {
        ChainWalk { snapshot: self, next: self.player_last_duckling, visited: 0 }
    }

    pub fn duckling_chain_length(&self) -> usize {
        self.ducklings
            .iter()
            .flatten()
            .filter(|duckling| duckling.follows != Follows::Idle)
            .count()
    }

    pub fn duckling_count(&self) -> usize {
        self.ducklings.iter().flatten().count()
    }

    /// Bread still lying on the board.
    pub fn bread_count(&self) -> usize {
        self.breads.iter().flatten().count()
    }

    pub fn goose_count(&self) -> usize {
        self.geese.iter().flatten().count()
    }

    pub fn victory_state(&self) -> Victory {
        self.victory
    }

    /// Text dump of the board for diagnostics, one row per line.
    pub fn draw_board(&self) -> String {
        let mut text = String::new();
        for y in 0..self.map_height {
            for x in 0..self.map_width {
                let p = Pos { y, x };
                let c = if p == self.player.pos {
                    '@'
                } else if let Some(index) = self.duckling_at(p) {
                    match self.ducklings[index] {
                        Some(duckling) if duckling.follows != Follows::Idle => 'd',
                        Some(duckling) if duckling.waddling => 'w',
                        _ => 'i',
                    }
                } else if self.goose_at(p).is_some() {
                    'G'
                } else if self.bread_at(p).is_some() {
                    'b'
                } else {
                    '.'
                };
                text.push(c);
            }
            text.push('\n');
        }
        text
    }
}

/// Walks `follows` links from the chain tail toward the player. Stops after
/// `MAX_DUCKLINGS` hops so a corrupted link can never loop forever.
pub struct ChainWalk<'a> {
    snapshot: &'a Snapshot,
    next: Option<usize>,
    visited: usize,
}

impl Iterator for ChainWalk<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let index = self.next?;
        if self.visited >= MAX_DUCKLINGS {
            self.next = None;
            return None;
        }
        self.visited += 1;
        self.next = match self.snapshot.ducklings.get(index).copied().flatten() {
            Some(Duckling { follows: Follows::Duckling(leader), .. }) => Some(leader),
            _ => None,
        };
        Some(index)
    }
}
