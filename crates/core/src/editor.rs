//! Point mutations used by the puzzle editor.
//! Placement always takes the first free slot so slot order follows
//! placement order.

use crate::state::{Duckling, Follows, Goose, Snapshot};
use crate::types::*;

impl Snapshot {
    pub fn place_duckling(&mut self, pos: Pos) -> Result<usize, EditorError> {
        self.check_placeable(pos)?;
        self.insert_duckling(pos)
    }

    pub fn place_bread(&mut self, pos: Pos) -> Result<usize, EditorError> {
        self.check_placeable(pos)?;
        if self.bread_at(pos).is_some() {
            return Err(EditorError::Occupied { pos });
        }
        self.insert_bread(pos)
    }

    pub fn place_goose(&mut self, pos: Pos) -> Result<usize, EditorError> {
        self.check_placeable(pos)?;
        self.insert_goose(pos)
    }

    pub fn place_player(&mut self, pos: Pos) -> Result<(), EditorError> {
        if pos == self.player.pos {
            return Ok(());
        }
        self.check_placeable(pos)?;
        self.player.pos = pos;
        Ok(())
    }

    /// Remove one entity at `pos`, checking ducklings, then bread, then geese.
    pub fn erase_at(&mut self, pos: Pos) -> Option<EntityKind> {
        if let Some(index) = self.duckling_at(pos) {
            self.unlink_duckling(index);
            self.ducklings[index] = None;
            return Some(EntityKind::Duckling);
        }
        if let Some(index) = self.bread_at(pos) {
            self.breads[index] = None;
            return Some(EntityKind::Bread);
        }
        if let Some(index) = self.goose_at(pos) {
            self.geese[index] = None;
            return Some(EntityKind::Goose);
        }
        None
    }

    pub(crate) fn insert_duckling(&mut self, pos: Pos) -> Result<usize, EditorError> {
        let index = first_free(&self.ducklings, EntityKind::Duckling)?;
        self.ducklings[index] = Some(Duckling::idle_at(pos));
        Ok(index)
    }

    pub(crate) fn insert_bread(&mut self, pos: Pos) -> Result<usize, EditorError> {
        let index = first_free(&self.breads, EntityKind::Bread)?;
        self.breads[index] = Some(pos);
        Ok(index)
    }

    pub(crate) fn insert_goose(&mut self, pos: Pos) -> Result<usize, EditorError> {
        let index = first_free(&self.geese, EntityKind::Goose)?;
        self.geese[index] = Some(Goose::at(pos));
        Ok(index)
    }

    fn check_placeable(&self, pos: Pos) -> Result<(), EditorError> {
        if !self.in_bounds(pos) {
            return Err(EditorError::OutOfBounds { pos });
        }
        if self.is_occupied(pos) {
            return Err(EditorError::Occupied { pos });
        }
        Ok(())
    }

    /// Splice a chained duckling out so its follower walks behind its leader.
    fn unlink_duckling(&mut self, index: usize) {
        let Some(removed) = self.ducklings[index] else {
            return;
        };
        if removed.follows == Follows::Idle {
            return;
        }

        for (slot, duckling) in self.ducklings.iter_mut().enumerate() {
            if let Some(duckling) = duckling
                && duckling.follows == Follows::Duckling(index)
            {
                duckling.follows = removed.follows;
                tracing::debug!("duckling {} now follows {:?}", slot, removed.follows);
            }
        }

        if self.player_last_duckling == Some(index) {
            self.player_last_duckling = match removed.follows {
                Follows::Duckling(leader) => Some(leader),
                Follows::Player | Follows::Idle => None,
            };
        }
    }
}

fn first_free<T>(slots: &[Option<T>], kind: EntityKind) -> Result<usize, EditorError> {
    slots.iter().position(Option::is_none).ok_or(EditorError::CapacityExceeded { kind })
}
