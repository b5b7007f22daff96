//! The loaded text structure.
//!
//! A [`Mushaf`] is the in-memory form of one encoding's data file:
//!
//! ```json
//! {
//!   "indexes": [[[[0], [1, 2]], ...], ...],
//!   "blocks":  [["بِسْمِ", "B₁ᵢSᵒMᵢ", "ٮسم", "BSM"], ...]
//! }
//! ```
//!
//! `indexes` nests sura → verse → word → block ids; `blocks` maps each id to
//! its four renderings. Identical blocks may share an id.
//!
//! The structure is validated once on construction. After that every
//! in-bounds [`Position`] has a leaf, so extraction is infallible.

use std::io::Read;

use serde::Deserialize;

use crate::error::MushafError;
use crate::extract::Extract;
use crate::models::{Block, Forms, Position};
use crate::resolve::ResolvedRange;
use crate::shape::Shape;

type Indexes = Vec<Vec<Vec<Vec<usize>>>>;

/// Raw data file layout, before validation.
#[derive(Debug, Deserialize)]
struct MushafData {
    indexes: Indexes,
    blocks: Vec<Forms>,
}

/// One complete, validated text encoding.
#[derive(Debug, Clone)]
pub struct Mushaf {
    indexes: Indexes,
    blocks: Vec<Forms>,
}

impl Mushaf {
    /// Build a mushaf from its nested block-id index and block table.
    ///
    /// Fails if any level is empty or any id has no entry in `blocks`.
    pub fn new(indexes: Indexes, blocks: Vec<Forms>) -> Result<Self, MushafError> {
        if indexes.is_empty() {
            return Err(MushafError::Empty);
        }
        for (isura, sura) in indexes.iter().enumerate() {
            if sura.is_empty() {
                return Err(MushafError::EmptySura { sura: isura + 1 });
            }
            for (iverse, verse) in sura.iter().enumerate() {
                if verse.is_empty() {
                    return Err(MushafError::EmptyVerse {
                        sura: isura + 1,
                        verse: iverse + 1,
                    });
                }
                for (iword, word) in verse.iter().enumerate() {
                    if word.is_empty() {
                        return Err(MushafError::EmptyWord {
                            sura: isura + 1,
                            verse: iverse + 1,
                            word: iword + 1,
                        });
                    }
                    for (iblock, &id) in word.iter().enumerate() {
                        if id >= blocks.len() {
                            return Err(MushafError::DanglingBlock {
                                id,
                                index: Position::new(isura, iverse, iword, iblock).to_index(),
                                len: blocks.len(),
                            });
                        }
                    }
                }
            }
        }
        Ok(Self { indexes, blocks })
    }

    /// Decode and validate a JSON data document.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, MushafError> {
        let data: MushafData = serde_json::from_slice(bytes)?;
        Self::new(data.indexes, data.blocks)
    }

    /// Decode and validate a JSON data document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, MushafError> {
        let data: MushafData = serde_json::from_reader(reader)?;
        Self::new(data.indexes, data.blocks)
    }

    /// Total number of leaf blocks in reading order.
    pub fn leaf_count(&self) -> usize {
        self.indexes.iter().flatten().flatten().map(Vec::len).sum()
    }

    /// The renderings of the leaf at `pos`, if it exists.
    pub fn leaf(&self, pos: Position) -> Option<&Forms> {
        let id = *self
            .indexes
            .get(pos.sura)?
            .get(pos.verse)?
            .get(pos.word)?
            .get(pos.block)?;
        self.blocks.get(id)
    }

    /// The leaf record at `pos`, tagged with its 1-based coordinate.
    pub fn block_at(&self, pos: Position) -> Option<Block> {
        self.leaf(pos).map(|forms| Block {
            forms: forms.clone(),
            index: pos.to_index(),
        })
    }

    /// Lazily walk every leaf inside `range`.
    pub fn extract(&self, range: &ResolvedRange) -> Extract<'_> {
        Extract::new(self, range.ini.position, range.end.position)
    }
}

impl Shape for Mushaf {
    fn suras(&self) -> usize {
        self.indexes.len()
    }

    fn verses(&self, sura: usize) -> usize {
        self.indexes.get(sura).map_or(0, Vec::len)
    }

    fn words(&self, sura: usize, verse: usize) -> usize {
        self.indexes
            .get(sura)
            .and_then(|s| s.get(verse))
            .map_or(0, Vec::len)
    }

    fn blocks(&self, sura: usize, verse: usize, word: usize) -> usize {
        self.indexes
            .get(sura)
            .and_then(|s| s.get(verse))
            .and_then(|v| v.get(word))
            .map_or(0, Vec::len)
    }
}
