//! xxh3 digests of puzzle snapshots and game sessions. Replay results and
//! the determinism tests compare these.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;
use crate::state::{Duckling, Follows};

impl Snapshot {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_i32(self.map_width);
        hasher.write_i32(self.map_height);
        write_pos(&mut hasher, self.player.pos);
        hasher.write_u8(self.player.direction as u8);
        hasher.write_u32(self.player.bread_count);
        hasher.write_u32(self.required_bread);
        hasher.write_u8(match self.victory {
            Victory::InProgress => 0,
            Victory::Success => 1,
            Victory::Failure => 2,
        });
        hasher.write_u8(self.player_last_duckling.map_or(u8::MAX, |index| index as u8));

        // Absent slots hash too, so slot identity is part of the digest.
        for slot in &self.ducklings {
            match slot {
                Some(duckling) => {
                    hasher.write_u8(1);
                    write_duckling(&mut hasher, duckling);
                }
                None => hasher.write_u8(0),
            }
        }
        for slot in &self.breads {
            match slot {
                Some(pos) => {
                    hasher.write_u8(1);
                    write_pos(&mut hasher, *pos);
                }
                None => hasher.write_u8(0),
            }
        }
        for slot in &self.geese {
            match slot {
                Some(goose) => {
                    hasher.write_u8(1);
                    write_pos(&mut hasher, goose.pos);
                    hasher.write_u8(goose.direction as u8);
                }
                None => hasher.write_u8(0),
            }
        }
        hasher.finish()
    }
}

impl Game {
    /// Hash of the current snapshot mixed with the history depth.
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.current.snapshot_hash());
        hasher.write_u64(self.history.len() as u64);
        hasher.finish()
    }
}

fn write_pos(hasher: &mut Xxh3, pos: Pos) {
    hasher.write_i32(pos.x);
    hasher.write_i32(pos.y);
}

fn write_duckling(hasher: &mut Xxh3, duckling: &Duckling) {
    write_pos(hasher, duckling.pos);
    match duckling.follows {
        Follows::Idle => hasher.write_u8(0),
        Follows::Player => hasher.write_u8(1),
        Follows::Duckling(leader) => {
            hasher.write_u8(2);
            hasher.write_u8(leader as u8);
        }
    }
    hasher.write_u8(duckling.direction as u8);
    hasher.write_u8(u8::from(duckling.waddling));
    hasher.write_u8(u8::from(duckling.holds_bread));
}
