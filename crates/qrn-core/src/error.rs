//! Error types for qrn-core.

use thiserror::Error;

use crate::models::Index;

/// A text structure that cannot be traversed.
///
/// Every level must be non-empty and every block id must point into the
/// block table; [`Mushaf::new`](crate::Mushaf::new) checks both up front so
/// that extraction never has to fail.
#[derive(Error, Debug)]
pub enum MushafError {
    /// The structure has no suras at all.
    #[error("mushaf contains no suras")]
    Empty,

    /// A sura without verses.
    #[error("sura {sura} contains no verses")]
    EmptySura { sura: usize },

    /// A verse without words.
    #[error("verse {sura}:{verse} contains no words")]
    EmptyVerse { sura: usize, verse: usize },

    /// A word without blocks.
    #[error("word {sura}:{verse}:{word} contains no blocks")]
    EmptyWord {
        sura: usize,
        verse: usize,
        word: usize,
    },

    /// A block id with no entry in the block table.
    #[error("block id {id} at {index} is out of range (table holds {len} blocks)")]
    DanglingBlock { id: usize, index: Index, len: usize },

    /// The JSON document could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// An external coordinate component that is neither a sentinel nor a
/// 1-based position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    #[error("invalid coordinate component {0}: expected -1 (last), 0 (first) or a 1-based index")]
    Invalid(i64),
}

/// Both members of an exclusive presentation pair were switched off.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PresentationError {
    #[error("cannot omit both Latin and Arabic script")]
    NoScript,

    #[error("cannot omit both graphemic and archigraphemic layers")]
    NoLayer,
}

/// Unknown text source name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown source '{0}': must be tanzil-simple, tanzil-uthmani, or decotype")]
pub struct ParseSourceError(pub String);
