//! Block-to-word folding.
//!
//! Extraction always works at block granularity. [`Words`] folds runs of
//! consecutive blocks that share (sura, verse, word) into one record whose
//! forms are the in-order concatenation of the run. It relies on the input
//! being in reading order, which [`Extract`](crate::Extract) guarantees, and
//! holds at most one open group at a time.

use std::iter::{FusedIterator, Peekable};

use crate::models::Block;

/// Output granularity of a retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    /// One record per word, blocks concatenated.
    #[default]
    Word,
    /// One record per block, as extracted.
    Block,
}

impl Granularity {
    pub fn from_blocks_flag(blocks: bool) -> Self {
        if blocks {
            Granularity::Block
        } else {
            Granularity::Word
        }
    }

    /// Wrap a block stream so that it yields records at this granularity.
    pub fn apply<I>(self, blocks: I) -> Records<I>
    where
        I: Iterator<Item = Block>,
    {
        match self {
            Granularity::Block => Records::Blocks(blocks),
            Granularity::Word => Records::Words(Words::new(blocks)),
        }
    }
}

/// Folds consecutive blocks of the same word into one word-level record.
#[derive(Debug, Clone)]
pub struct Words<I: Iterator<Item = Block>> {
    blocks: Peekable<I>,
}

impl<I: Iterator<Item = Block>> Words<I> {
    pub fn new(blocks: I) -> Self {
        Self {
            blocks: blocks.peekable(),
        }
    }
}

impl<I: Iterator<Item = Block>> Iterator for Words<I> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        let Block { mut forms, index } = self.blocks.next()?;
        let key = index.word_key();
        while let Some(next) = self.blocks.next_if(|b| b.index.word_key() == key) {
            forms.append(&next.forms);
        }
        Some(Block {
            forms,
            index: index.without_block(),
        })
    }
}

impl<I: FusedIterator<Item = Block>> FusedIterator for Words<I> {}

/// A block stream at either granularity.
#[derive(Debug, Clone)]
pub enum Records<I: Iterator<Item = Block>> {
    Blocks(I),
    Words(Words<I>),
}

impl<I: Iterator<Item = Block>> Iterator for Records<I> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        match self {
            Records::Blocks(blocks) => blocks.next(),
            Records::Words(words) => words.next(),
        }
    }
}
