//! Resolution, extraction, and aggregation in one call.

use crate::aggregate::{Granularity, Records};
use crate::extract::Extract;
use crate::models::IndexRange;
use crate::mushaf::Mushaf;
use crate::resolve::ResolvedRange;

/// A resolved range together with its lazy record stream.
///
/// `range` carries the corrections made while resolving, so the caller can
/// report them before (or while) consuming `records`.
#[derive(Debug, Clone)]
pub struct Retrieval<'a> {
    pub range: ResolvedRange,
    pub records: Records<Extract<'a>>,
}

impl Mushaf {
    /// Resolve `range` against this text and stream its records at
    /// `granularity`.
    pub fn retrieve(&self, range: &IndexRange, granularity: Granularity) -> Retrieval<'_> {
        let range = range.resolve(self);
        let records = granularity.apply(self.extract(&range));
        Retrieval { range, records }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bound, Coord, Forms};

    fn mushaf() -> Mushaf {
        Mushaf::new(
            vec![
                vec![vec![vec![0, 1], vec![2]], vec![vec![3]]],
                vec![vec![vec![4, 5, 6]]],
            ],
            ["a", "b", "c", "d", "e", "f", "g"]
                .iter()
                .map(|t| Forms::new(*t, *t, *t, *t))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_whole_text_by_word() {
        let m = mushaf();
        let retrieval = m.retrieve(&IndexRange::whole(), Granularity::Word);
        assert_eq!(retrieval.range.corrections().count(), 0);
        let words: Vec<_> = retrieval
            .records
            .map(|b| (b.index.to_string(), b.forms.grapheme_ar))
            .collect();
        assert_eq!(
            words,
            vec![
                ("1:1:1".to_string(), "ab".to_string()),
                ("1:1:2".to_string(), "c".to_string()),
                ("1:2:1".to_string(), "d".to_string()),
                ("2:1:1".to_string(), "efg".to_string()),
            ]
        );
    }

    #[test]
    fn test_partial_word_is_aggregated_from_range_blocks_only() {
        let m = mushaf();
        let range = IndexRange::new(
            Bound::new(Coord::At(2), Coord::At(1), Coord::At(1), Coord::At(2)),
            Bound::last(),
        );
        let words: Vec<_> = m
            .retrieve(&range, Granularity::Word)
            .records
            .map(|b| b.forms.grapheme_lt)
            .collect();
        assert_eq!(words, vec!["fg"]);
    }

    #[test]
    fn test_clamped_end_is_reported() {
        let m = mushaf();
        let range = IndexRange::new(
            Bound::first(),
            Bound::new(Coord::At(1), Coord::At(1), Coord::At(9), Coord::Last),
        );
        let retrieval = m.retrieve(&range, Granularity::Block);
        assert_eq!(retrieval.range.corrections().count(), 1);
        assert_eq!(retrieval.records.count(), 3);
    }
}
