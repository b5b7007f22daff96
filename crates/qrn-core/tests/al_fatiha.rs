use qrn_core::{
    Bound, Coord, CoordError, Granularity, IndexRange, Level, Mushaf, Presentation, Side, Token,
};

const FIXTURE: &str = include_str!("fixtures/al_fatiha.json");

fn mushaf() -> Mushaf {
    Mushaf::from_slice(FIXTURE.as_bytes()).expect("fixture must load")
}

fn at(sura: usize, verse: usize, word: usize, block: usize) -> Bound {
    Bound::new(
        Coord::At(sura),
        Coord::At(verse),
        Coord::At(word),
        Coord::At(block),
    )
}

fn get(range: IndexRange, granularity: Granularity) -> Vec<Token> {
    let mushaf = mushaf();
    let presentation = Presentation::default();
    mushaf
        .retrieve(&range, granularity)
        .records
        .map(|block| presentation.render(&block))
        .collect()
}

#[test]
fn test_fixture_shape() {
    let mushaf = mushaf();
    assert_eq!(mushaf.leaf_count(), 67);
    let words = mushaf.retrieve(&IndexRange::whole(), Granularity::Word).records.count();
    assert_eq!(words, 29);
}

#[test]
fn test_single_block_as_word() {
    let tokens = get(IndexRange::new(at(1, 1, 1, 1), at(1, 1, 1, 1)), Granularity::Word);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].fields, vec!["بِسْمِ", "B₁ᵢSᵒMᵢ", "ٮسم", "BSM"]);
    assert_eq!(tokens[0].index, "1:1:1");
}

#[test]
fn test_single_block_as_block() {
    let tokens = get(IndexRange::new(at(1, 1, 1, 1), at(1, 1, 1, 1)), Granularity::Block);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].index, "1:1:1:1");
}

#[test]
fn test_end_block_last_on_single_block_word() {
    let end = Bound::new(Coord::At(1), Coord::At(1), Coord::At(1), Coord::Last);
    let tokens = get(IndexRange::new(at(1, 1, 1, 1), end), Granularity::Block);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].index, "1:1:1:1");
}

#[test]
fn test_whole_second_word_by_blocks() {
    let ini = Bound::new(Coord::At(1), Coord::At(1), Coord::At(2), Coord::First);
    let end = Bound::new(Coord::At(1), Coord::At(1), Coord::At(2), Coord::Last);
    let tokens = get(IndexRange::new(ini, end), Granularity::Block);
    let indexes: Vec<_> = tokens.iter().map(|t| t.index.as_str()).collect();
    assert_eq!(indexes, vec!["1:1:2:1", "1:1:2:2"]);
}

#[test]
fn test_external_minus_one_is_last_block() {
    let ini = Bound::from_external(1, 1, 2, 0).unwrap();
    let end = Bound::from_external(1, 1, 2, -1).unwrap();
    assert_eq!(end.block, Coord::Last);

    let tokens = get(IndexRange::new(ini, end), Granularity::Block);
    let indexes: Vec<_> = tokens.iter().map(|t| t.index.as_str()).collect();
    assert_eq!(indexes, vec!["1:1:2:1", "1:1:2:2"]);
}

#[test]
fn test_external_other_negatives_rejected() {
    assert_eq!(Bound::from_external(1, 1, 2, -2), Err(CoordError::Invalid(-2)));
    assert_eq!(Bound::from_external(-7, 1, 1, 1), Err(CoordError::Invalid(-7)));
}

#[test]
fn test_from_reader_matches_from_slice() {
    let from_reader = Mushaf::from_reader(FIXTURE.as_bytes()).unwrap();
    let whole = IndexRange::whole();
    let a: Vec<_> = from_reader.retrieve(&whole, Granularity::Block).records.collect();
    let b: Vec<_> = mushaf().retrieve(&whole, Granularity::Block).records.collect();
    assert_eq!(a, b);
}

#[test]
fn test_last_block_matches_unbounded_word() {
    let mushaf = mushaf();
    let ini = Bound::new(Coord::At(1), Coord::At(6), Coord::At(2), Coord::First);
    let end_last = Bound::new(Coord::At(1), Coord::At(6), Coord::At(2), Coord::Last);
    let end_clamped = at(1, 6, 2, 99);

    let last: Vec<_> = mushaf
        .retrieve(&IndexRange::new(ini, end_last), Granularity::Block)
        .records
        .collect();
    let clamped = mushaf.retrieve(&IndexRange::new(ini, end_clamped), Granularity::Block);

    let corrections: Vec<_> = clamped.range.corrections().collect();
    assert_eq!(corrections.len(), 1);
    assert_eq!(corrections[0].0, Side::End);
    assert_eq!(corrections[0].1.level, Level::Block);
    assert_eq!(corrections[0].1.clamped_to, 4);

    assert_eq!(last, clamped.records.collect::<Vec<_>>());
    assert_eq!(last.len(), 4);
}

#[test]
fn test_range_across_verses() {
    let end = Bound::new(Coord::At(1), Coord::At(7), Coord::At(1), Coord::Last);
    let tokens = get(IndexRange::new(at(1, 6, 2, 2), end), Granularity::Block);
    assert_eq!(tokens.len(), 8);
    assert_eq!(tokens[0].index, "1:6:2:2");
    assert_eq!(tokens[7].index, "1:7:1:3");
    let archigraphemes: Vec<_> = tokens.iter().map(|t| t.fields[3].as_str()).collect();
    assert_eq!(archigraphemes.join(" "), "LCR A T A LMSBFBM CR A T");
}

#[test]
fn test_range_across_verses_by_word() {
    let end = Bound::new(Coord::At(1), Coord::At(7), Coord::At(1), Coord::Last);
    let tokens = get(IndexRange::new(at(1, 6, 2, 2), end), Granularity::Word);
    let lines: Vec<_> = tokens.iter().map(|t| t.to_line("|")).collect();
    assert_eq!(
        lines,
        vec![
            "لصِّرَاطَ|LCᵚᵢRᵃATᵃ|لصراط|LCRAT|1:6:2",
            "الْمُسْتَقِيمَ|ALᵒMᵘSᵒT²ᵃQ²ᵢY₂Mᵃ|المسٮڡٮم|ALMSBFBM|1:6:3",
            "صِرَاطَ|CᵢRᵃATᵃ|صراط|CRAT|1:7:1",
        ]
    );
}

#[test]
fn test_aggregated_fields_are_concatenated_blocks() {
    let mushaf = mushaf();
    let blocks: Vec<_> = mushaf
        .retrieve(&IndexRange::whole(), Granularity::Block)
        .records
        .collect();
    for word in mushaf.retrieve(&IndexRange::whole(), Granularity::Word).records {
        assert_eq!(word.index.block, None);
        let members: Vec<_> = blocks
            .iter()
            .filter(|b| b.index.word_key() == word.index.word_key())
            .collect();
        assert!(!members.is_empty());
        let joined: String = members.iter().map(|b| b.forms.grapheme_ar.as_str()).collect();
        assert_eq!(word.forms.grapheme_ar, joined);
        let joined: String = members.iter().map(|b| b.forms.archigrapheme_lt.as_str()).collect();
        assert_eq!(word.forms.archigrapheme_lt, joined);
    }
}

#[test]
fn test_out_of_bounds_sura_is_clamped() {
    let mushaf = mushaf();
    let range = IndexRange::new(Bound::new(Coord::At(2), Coord::First, Coord::First, Coord::First), Bound::last());
    let retrieval = mushaf.retrieve(&range, Granularity::Word);
    let messages: Vec<_> = retrieval
        .range
        .corrections()
        .map(|(_, c)| c.to_string())
        .collect();
    assert_eq!(messages, vec!["sura 2 is out of bounds; set to last sura in text, i.e. 1"]);
    // clamped to sura 1, which then starts from its first verse
    assert_eq!(retrieval.records.count(), 29);
}

#[test]
fn test_backwards_range_yields_nothing() {
    let mushaf = mushaf();
    let range = IndexRange::new(at(1, 7, 1, 1), at(1, 6, 1, 1));
    let retrieval = mushaf.retrieve(&range, Granularity::Word);
    assert!(retrieval.range.is_empty());
    assert_eq!(retrieval.records.count(), 0);
}
