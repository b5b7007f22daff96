//! Range argument parsing.
//!
//! The full form is `sura:verse:word:block-sura:verse:word:block`. Every
//! part is optional:
//!
//! | Argument | Start | End |
//! |----------|-------|-----|
//! | (none) or `""` | first leaf | last leaf |
//! | `2` | 2:first | last leaf |
//! | `2:3-2:10:2` | 2:3:first:first | 2:10:2:last |
//! | `-5` (after `--`) | first leaf | 5:last:last:last |
//! | `1:1:2-1:1:2` | 1:1:2:first | 1:1:2:last |
//!
//! Missing start components mean "first", missing end components mean
//! "last", and `0` always means "first". A number too large to represent
//! is kept as the largest index, which resolution clamps like any other
//! out-of-bounds component.

use qrn_core::{Bound, Coord, IndexRange};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeParseError {
    #[error("too many components in '{0}': argument format must be sura:verse:word:block-sura:verse:word:block, e.g. 2:3-2:10:2")]
    TooManyComponents(String),

    #[error("invalid component '{0}': argument format must be sura:verse:word:block-sura:verse:word:block, e.g. 2:3-2:10:2")]
    InvalidComponent(String),
}

/// Parse a range argument into an unresolved [`IndexRange`].
pub fn parse_range(arg: &str) -> Result<IndexRange, RangeParseError> {
    let (ini, end) = arg.split_once('-').unwrap_or((arg, ""));
    Ok(IndexRange::new(
        parse_bound(ini, Coord::First)?,
        parse_bound(end, Coord::Last)?,
    ))
}

/// Parse one side of a range; absent or empty components become `missing`.
fn parse_bound(text: &str, missing: Coord) -> Result<Bound, RangeParseError> {
    let text = text.trim();
    let mut coords = [missing; 4];

    if !text.is_empty() {
        let parts: Vec<&str> = text.split(':').collect();
        if parts.len() > coords.len() {
            return Err(RangeParseError::TooManyComponents(text.to_string()));
        }
        for (slot, part) in coords.iter_mut().zip(parts) {
            if part.is_empty() {
                continue;
            }
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(RangeParseError::InvalidComponent(part.to_string()));
            }
            // Too large for usize is still past the end; resolution clamps it.
            let n: usize = part.parse().unwrap_or(usize::MAX);
            *slot = if n == 0 { Coord::First } else { Coord::At(n) };
        }
    }

    let [sura, verse, word, block] = coords;
    Ok(Bound::new(sura, verse, word, block))
}
