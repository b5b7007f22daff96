//! Core data models used throughout qrn.
//!
//! Two coordinate conventions meet here. [`Bound`] and [`Index`] speak the
//! external, 1-based language of the command line and of emitted records;
//! [`Position`] is the 0-based address used while walking the structure.
//! The only conversions between them live in [`resolve`](crate::resolve)
//! (inbound) and [`Position::to_index`] (outbound).

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{CoordError, ParseSourceError};

/// One requested coordinate component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coord {
    /// First element at this level. Unspecified start components and an
    /// external `0` map here.
    First,
    /// Last element at this level. Unspecified end components and an
    /// external `-1` map here.
    Last,
    /// Explicit 1-based position.
    At(usize),
}

impl Coord {
    /// Interpret an external component: `-1` is last, `0` is first, and any
    /// positive value is a 1-based position.
    pub fn from_external(n: i64) -> Result<Self, CoordError> {
        match n {
            -1 => Ok(Coord::Last),
            0 => Ok(Coord::First),
            n => usize::try_from(n)
                .map(Coord::At)
                .map_err(|_| CoordError::Invalid(n)),
        }
    }
}

/// A requested, unresolved coordinate: one end of an [`IndexRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bound {
    pub sura: Coord,
    pub verse: Coord,
    pub word: Coord,
    pub block: Coord,
}

impl Bound {
    pub fn new(sura: Coord, verse: Coord, word: Coord, block: Coord) -> Self {
        Self {
            sura,
            verse,
            word,
            block,
        }
    }

    /// The first leaf of the text.
    pub fn first() -> Self {
        Self::new(Coord::First, Coord::First, Coord::First, Coord::First)
    }

    /// The last leaf of the text.
    pub fn last() -> Self {
        Self::new(Coord::Last, Coord::Last, Coord::Last, Coord::Last)
    }

    /// Build a bound from external integers (see [`Coord::from_external`]).
    pub fn from_external(sura: i64, verse: i64, word: i64, block: i64) -> Result<Self, CoordError> {
        Ok(Self::new(
            Coord::from_external(sura)?,
            Coord::from_external(verse)?,
            Coord::from_external(word)?,
            Coord::from_external(block)?,
        ))
    }
}

/// An inclusive pair of requested coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    pub ini: Bound,
    pub end: Bound,
}

impl IndexRange {
    pub fn new(ini: Bound, end: Bound) -> Self {
        Self { ini, end }
    }

    /// The whole text, first leaf to last leaf.
    pub fn whole() -> Self {
        Self::new(Bound::first(), Bound::last())
    }
}

impl Default for IndexRange {
    fn default() -> Self {
        Self::whole()
    }
}

/// A resolved, in-bounds, 0-based leaf address.
///
/// The derived ordering compares fields in declaration order, which is the
/// reading order of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub sura: usize,
    pub verse: usize,
    pub word: usize,
    pub block: usize,
}

impl Position {
    pub fn new(sura: usize, verse: usize, word: usize, block: usize) -> Self {
        Self {
            sura,
            verse,
            word,
            block,
        }
    }

    /// The 1-based coordinate carried by the leaf at this position.
    pub fn to_index(self) -> Index {
        Index {
            sura: self.sura + 1,
            verse: self.verse + 1,
            word: self.word + 1,
            block: Some(self.block + 1),
        }
    }
}

/// 1-based coordinate attached to emitted records.
///
/// `block` is `None` for word-level (aggregated) records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index {
    pub sura: usize,
    pub verse: usize,
    pub word: usize,
    pub block: Option<usize>,
}

impl Index {
    /// The (sura, verse, word) key shared by every block of one word.
    pub fn word_key(&self) -> (usize, usize, usize) {
        (self.sura, self.verse, self.word)
    }

    /// The same word, at word granularity.
    pub fn without_block(self) -> Self {
        Self {
            block: None,
            ..self
        }
    }
}

/// `sura:verse:word`, with a `:block` suffix only for block-level records.
impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.sura, self.verse, self.word)?;
        match self.block {
            Some(block) if block != 0 => write!(f, ":{}", block),
            _ => Ok(()),
        }
    }
}

/// The four parallel renderings of one unit of text.
///
/// Deserializes from the data file's 4-element string arrays in the order
/// grapheme (Arabic), grapheme (Latin), archigrapheme (Arabic),
/// archigrapheme (Latin).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "(String, String, String, String)")]
pub struct Forms {
    pub grapheme_ar: String,
    pub grapheme_lt: String,
    pub archigrapheme_ar: String,
    pub archigrapheme_lt: String,
}

impl Forms {
    pub fn new(
        grapheme_ar: impl Into<String>,
        grapheme_lt: impl Into<String>,
        archigrapheme_ar: impl Into<String>,
        archigrapheme_lt: impl Into<String>,
    ) -> Self {
        Self {
            grapheme_ar: grapheme_ar.into(),
            grapheme_lt: grapheme_lt.into(),
            archigrapheme_ar: archigrapheme_ar.into(),
            archigrapheme_lt: archigrapheme_lt.into(),
        }
    }

    /// Append every field of `other` to the matching field of `self`.
    pub fn append(&mut self, other: &Forms) {
        self.grapheme_ar.push_str(&other.grapheme_ar);
        self.grapheme_lt.push_str(&other.grapheme_lt);
        self.archigrapheme_ar.push_str(&other.archigrapheme_ar);
        self.archigrapheme_lt.push_str(&other.archigrapheme_lt);
    }
}

impl From<(String, String, String, String)> for Forms {
    fn from((grapheme_ar, grapheme_lt, archigrapheme_ar, archigrapheme_lt): (String, String, String, String)) -> Self {
        Self {
            grapheme_ar,
            grapheme_lt,
            archigrapheme_ar,
            archigrapheme_lt,
        }
    }
}

/// A retrieved record: a leaf block, or a whole word after aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub forms: Forms,
    pub index: Index,
}

/// Parallel pre-built encodings of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Source {
    #[default]
    TanzilSimple,
    TanzilUthmani,
    Decotype,
}

impl Source {
    pub const ALL: [Source; 3] = [Source::TanzilSimple, Source::TanzilUthmani, Source::Decotype];

    /// Name used on the command line and in configuration.
    pub fn name(self) -> &'static str {
        match self {
            Source::TanzilSimple => "tanzil-simple",
            Source::TanzilUthmani => "tanzil-uthmani",
            Source::Decotype => "decotype",
        }
    }

    /// Default data file name for this encoding.
    pub fn file_name(self) -> &'static str {
        match self {
            Source::TanzilSimple => "mushaf_simple.json",
            Source::TanzilUthmani => "mushaf_uthmani.json",
            Source::Decotype => "mushaf_dt.json",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Source {
    type Err = ParseSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Source::ALL
            .into_iter()
            .find(|source| source.name() == s)
            .ok_or_else(|| ParseSourceError(s.to_string()))
    }
}
