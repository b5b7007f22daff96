//! Sentinel resolution and out-of-bounds clamping.
//!
//! A requested [`Bound`] may say "first", "last", or name a 1-based
//! position that does not exist. [`resolve`] turns it into a concrete 0-based
//! [`Position`] against a [`Shape`], one level at a time:
//!
//! 1. Resolve the sura against the number of suras.
//! 2. Resolve the verse against the verse count of *that* sura.
//! 3. Resolve the word against the word count of *that* verse.
//! 4. Resolve the block against the block count of *that* word.
//!
//! An explicit position past the end of its level is clamped to the last
//! element and recorded as a [`Correction`]. Corrections are returned, not
//! printed; the caller decides how to report them.

use std::fmt;

use crate::models::{Bound, Coord, IndexRange, Position};
use crate::shape::Shape;

/// A level of the index hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Sura,
    Verse,
    Word,
    Block,
}

impl Level {
    fn name(self) -> &'static str {
        match self {
            Level::Sura => "sura",
            Level::Verse => "verse",
            Level::Word => "word",
            Level::Block => "block",
        }
    }

    /// What the count at this level is relative to.
    fn scope(self) -> &'static str {
        match self {
            Level::Sura => "text",
            Level::Verse => "sura",
            Level::Word => "verse",
            Level::Block => "word",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An explicit coordinate that was clamped to the end of its level.
///
/// Both numbers are 1-based, as the user wrote them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Correction {
    pub level: Level,
    pub requested: usize,
    pub clamped_to: usize,
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} is out of bounds; set to last {} in {}, i.e. {}",
            self.level,
            self.requested,
            self.level,
            self.level.scope(),
            self.clamped_to
        )
    }
}

/// Outcome of resolving one [`Bound`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub position: Position,
    pub corrections: Vec<Correction>,
}

/// Resolve a requested coordinate against a shape.
///
/// The shape must be non-empty at every level (see [`Shape`]).
pub fn resolve<S: Shape + ?Sized>(bound: &Bound, shape: &S) -> Resolution {
    let mut corrections = Vec::new();

    let sura = resolve_level(Level::Sura, bound.sura, shape.suras(), &mut corrections);
    let verse = resolve_level(Level::Verse, bound.verse, shape.verses(sura), &mut corrections);
    let word = resolve_level(
        Level::Word,
        bound.word,
        shape.words(sura, verse),
        &mut corrections,
    );
    let block = resolve_level(
        Level::Block,
        bound.block,
        shape.blocks(sura, verse, word),
        &mut corrections,
    );

    Resolution {
        position: Position::new(sura, verse, word, block),
        corrections,
    }
}

/// Map one component to a 0-based index below `count`.
fn resolve_level(level: Level, coord: Coord, count: usize, corrections: &mut Vec<Correction>) -> usize {
    let last = count.saturating_sub(1);
    match coord {
        Coord::First => 0,
        Coord::Last => last,
        Coord::At(n) if n > count => {
            corrections.push(Correction {
                level,
                requested: n,
                clamped_to: count,
            });
            last
        }
        Coord::At(n) => n.saturating_sub(1),
    }
}

/// Which end of a range a correction belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Start,
    End,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Start => f.write_str("start"),
            Side::End => f.write_str("end"),
        }
    }
}

/// Both ends of an [`IndexRange`], resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRange {
    pub ini: Resolution,
    pub end: Resolution,
}

impl ResolvedRange {
    /// True when the start lies after the end, so nothing can be extracted.
    pub fn is_empty(&self) -> bool {
        self.ini.position > self.end.position
    }

    /// Every correction applied to either end, start first.
    pub fn corrections(&self) -> impl Iterator<Item = (Side, &Correction)> + '_ {
        let ini = self.ini.corrections.iter().map(|c| (Side::Start, c));
        let end = self.end.corrections.iter().map(|c| (Side::End, c));
        ini.chain(end)
    }
}

impl IndexRange {
    /// Resolve both ends independently against `shape`.
    pub fn resolve<S: Shape + ?Sized>(&self, shape: &S) -> ResolvedRange {
        ResolvedRange {
            ini: resolve(&self.ini, shape),
            end: resolve(&self.end, shape),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::tests::Counts;

    /// Two suras: sura 1 has verses of 2 and 1 words, sura 2 one verse of 3 words.
    fn shape() -> Counts {
        Counts(vec![vec![vec![1, 2], vec![4]], vec![vec![1, 1, 3]]])
    }

    #[test]
    fn test_first_and_last() {
        let shape = shape();
        assert_eq!(resolve(&Bound::first(), &shape).position, Position::new(0, 0, 0, 0));
        assert_eq!(resolve(&Bound::last(), &shape).position, Position::new(1, 0, 2, 2));
    }

    #[test]
    fn test_explicit_is_one_based() {
        let bound = Bound::new(Coord::At(1), Coord::At(1), Coord::At(2), Coord::At(2));
        let res = resolve(&bound, &shape());
        assert_eq!(res.position, Position::new(0, 0, 1, 1));
        assert!(res.corrections.is_empty());
    }

    #[test]
    fn test_last_depends_on_enclosing_level() {
        // last block of the last word of verse 1:1 is block 2 of word 2
        let bound = Bound::new(Coord::At(1), Coord::At(1), Coord::Last, Coord::Last);
        assert_eq!(resolve(&bound, &shape()).position, Position::new(0, 0, 1, 1));

        // last word of verse 1:2 has four blocks
        let bound = Bound::new(Coord::At(1), Coord::At(2), Coord::Last, Coord::Last);
        assert_eq!(resolve(&bound, &shape()).position, Position::new(0, 1, 0, 3));
    }

    #[test]
    fn test_out_of_bounds_is_clamped_level_by_level() {
        let bound = Bound::new(Coord::At(9), Coord::At(5), Coord::At(1), Coord::At(7));
        let res = resolve(&bound, &shape());
        assert_eq!(res.position, Position::new(1, 0, 0, 0));
        assert_eq!(
            res.corrections,
            vec![
                Correction {
                    level: Level::Sura,
                    requested: 9,
                    clamped_to: 2
                },
                Correction {
                    level: Level::Verse,
                    requested: 5,
                    clamped_to: 1
                },
                Correction {
                    level: Level::Block,
                    requested: 7,
                    clamped_to: 1
                },
            ]
        );
    }

    #[test]
    fn test_explicit_zero_behaves_as_first() {
        let bound = Bound::new(Coord::At(1), Coord::At(1), Coord::At(2), Coord::At(0));
        assert_eq!(resolve(&bound, &shape()).position, Position::new(0, 0, 1, 0));
    }

    #[test]
    fn test_correction_message() {
        let correction = Correction {
            level: Level::Verse,
            requested: 8,
            clamped_to: 7,
        };
        assert_eq!(
            correction.to_string(),
            "verse 8 is out of bounds; set to last verse in sura, i.e. 7"
        );
    }

    #[test]
    fn test_range_reports_corrections_by_side() {
        let range = IndexRange::new(
            Bound::new(Coord::At(3), Coord::First, Coord::First, Coord::First),
            Bound::new(Coord::At(2), Coord::At(1), Coord::At(4), Coord::Last),
        );
        let resolved = range.resolve(&shape());
        let sides: Vec<_> = resolved.corrections().map(|(side, c)| (side, c.level)).collect();
        assert_eq!(sides, vec![(Side::Start, Level::Sura), (Side::End, Level::Word)]);
        assert!(!resolved.is_empty());
    }

    #[test]
    fn test_backwards_range_is_empty() {
        let range = IndexRange::new(
            Bound::new(Coord::At(2), Coord::First, Coord::First, Coord::First),
            Bound::new(Coord::At(1), Coord::Last, Coord::Last, Coord::Last),
        );
        assert!(range.resolve(&shape()).is_empty());
    }
}
