//! Range-restricted leaf traversal.
//!
//! [`Extract`] yields every leaf whose position lies in `[ini, end]`, in
//! reading order. It is the iterator form of four nested loops over
//! sura, verse, word, and block:
//!
//! - positions before `ini` on the starting prefix are never visited, because
//!   the cursor starts at `ini`;
//! - the first position after `end` stops the whole walk, because nothing
//!   later in reading order can be in range.
//!
//! An empty or backwards range (`ini > end`) yields nothing.

use std::iter::FusedIterator;

use crate::models::{Block, Position};
use crate::mushaf::Mushaf;
use crate::shape::Shape;

/// Lazy, single-pass walk over the leaves of a resolved range.
#[derive(Debug, Clone)]
pub struct Extract<'a> {
    mushaf: &'a Mushaf,
    cursor: Option<Position>,
    end: Position,
}

impl<'a> Extract<'a> {
    /// Walk from `ini` to `end`, both inclusive and 0-based.
    pub fn new(mushaf: &'a Mushaf, ini: Position, end: Position) -> Self {
        Self {
            mushaf,
            cursor: (ini <= end).then_some(ini),
            end,
        }
    }
}

impl Iterator for Extract<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        let pos = self.cursor.take().filter(|pos| *pos <= self.end)?;
        let block = self.mushaf.block_at(pos)?;
        self.cursor = self.mushaf.successor(pos);
        Some(block)
    }
}

impl FusedIterator for Extract<'_> {}
