//! Shape queries over a four-level nested text.
//!
//! Resolution and traversal only need to know how many children each node
//! has. [`Shape`] exposes exactly that, so both can be tested against small
//! hand-built shapes without a full text.

use crate::models::Position;

/// Child counts of a sura → verse → word → block tree.
///
/// All arguments are 0-based and assumed in bounds for their parent level.
/// Implementations must report at least one child at every level; an empty
/// node makes "last" meaningless.
pub trait Shape {
    /// Number of suras.
    fn suras(&self) -> usize;

    /// Number of verses in `sura`.
    fn verses(&self, sura: usize) -> usize;

    /// Number of words in `sura:verse`.
    fn words(&self, sura: usize, verse: usize) -> usize;

    /// Number of blocks in `sura:verse:word`.
    fn blocks(&self, sura: usize, verse: usize, word: usize) -> usize;

    /// The leaf following `pos` in reading order, or `None` after the last
    /// leaf.
    fn successor(&self, pos: Position) -> Option<Position> {
        let Position {
            sura,
            verse,
            word,
            block,
        } = pos;

        if block + 1 < self.blocks(sura, verse, word) {
            return Some(Position::new(sura, verse, word, block + 1));
        }
        if word + 1 < self.words(sura, verse) {
            return Some(Position::new(sura, verse, word + 1, 0));
        }
        if verse + 1 < self.verses(sura) {
            return Some(Position::new(sura, verse + 1, 0, 0));
        }
        if sura + 1 < self.suras() {
            return Some(Position::new(sura + 1, 0, 0, 0));
        }
        None
    }
}
