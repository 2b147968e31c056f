//! Black-box tests of the reference engine: verse merging plus citation
//! rendering, end to end through the public API.

use std::sync::Arc;

use assert_matches::assert_matches;
use proptest::prelude::*;

use biblemark_core::prelude::*;

/// Matthew, Mark and John with their traditional per-chapter verse counts.
fn gospels() -> Arc<Version> {
    let matthew = [
        25, 23, 17, 25, 48, 34, 29, 34, 38, 42, 30, 50, 58, 36, 39, 28, 27, 35, 30, 34, 46, 46,
        39, 51, 46, 75, 66, 20,
    ];
    let mark = [45, 28, 35, 41, 43, 56, 37, 38, 50, 52, 33, 44, 37, 72, 47, 20];
    let john = [
        51, 25, 36, 54, 47, 71, 53, 59, 41, 42, 57, 50, 38, 31, 27, 33, 26, 40, 42, 31, 25,
    ];

    let structure = VersionStructure::new(vec![
        BookStructure::from_counts(Book::Matthew, 40, &matthew).unwrap(),
        BookStructure::from_counts(Book::Mark, 41, &mark).unwrap(),
        BookStructure::from_counts(Book::John, 43, &john).unwrap(),
    ])
    .unwrap();
    Arc::new(Version::new("kjv", "de4e12af7f28f599-02", "en", "King James Version", false, structure).unwrap())
}

/// A compact John-only version whose chapter 3 has exactly 5 verses.
fn small_john() -> Arc<Version> {
    let structure = VersionStructure::new(vec![
        BookStructure::from_counts(Book::John, 43, &[5, 4, 5]).unwrap()
    ])
    .unwrap();
    Arc::new(Version::new("tst", "tst-ext", "en", "Test Version", false, structure).unwrap())
}

fn verse(v: &Arc<Version>, book: Book, chapter: &str, n: u32) -> Verse {
    Verse::new(v.clone(), book, ChapterId::new(chapter).unwrap(), n).unwrap()
}

fn render(verses: Vec<Verse>) -> String {
    let reference = Reference::build(verses).unwrap();
    format(&reference, &Delimiters::default()).unwrap()
}

#[test]
fn single_verse_citation() {
    let v = gospels();
    assert_eq!(render(vec![verse(&v, Book::John, "3", 16)]), "John 3:16");
}

#[test]
fn full_chapter_citation() {
    let v = small_john();
    let verses = (1..=5).map(|n| verse(&v, Book::John, "3", n)).collect();
    assert_eq!(render(verses), "John 3");
}

#[test]
fn partial_chapter_citation() {
    let v = gospels();
    let verses = (1..=5).map(|n| verse(&v, Book::John, "3", n)).collect();
    assert_eq!(render(verses), "John 3:1-5");
}

#[test]
fn scattered_verses_share_the_chapter_prefix() {
    let v = gospels();
    assert_eq!(
        render(vec![
            verse(&v, Book::John, "3", 1),
            verse(&v, Book::John, "3", 3),
            verse(&v, Book::John, "3", 5),
        ]),
        "John 3:1,3,5"
    );
}

#[test]
fn verse_runs_and_singles_mix_within_a_chapter() {
    let v = gospels();
    assert_eq!(
        render(vec![
            verse(&v, Book::John, "3", 1),
            verse(&v, Book::John, "3", 2),
            verse(&v, Book::John, "3", 3),
            verse(&v, Book::John, "3", 16),
        ]),
        "John 3:1-3,16"
    );
}

#[test]
fn chapters_of_one_book_group_with_a_separator() {
    let v = gospels();
    assert_eq!(
        render(vec![
            verse(&v, Book::John, "3", 16),
            verse(&v, Book::John, "4", 1),
            verse(&v, Book::John, "4", 2),
        ]),
        "John 3:16;4:1-2"
    );
}

#[test]
fn multi_digit_chapters_order_numerically() {
    let v = gospels();
    // Given out of canonical order; the formatter sorts.
    assert_eq!(
        render(vec![
            verse(&v, Book::John, "10", 1),
            verse(&v, Book::John, "2", 1),
        ]),
        "John 2:1;10:1"
    );
}

#[test]
fn cross_full_chapter_interval_renders_with_chapter_range() {
    let v = gospels();
    // A single interval spanning the whole of John 1 and 2 (ch2 has 25 verses).
    let i = Interval::new(verse(&v, Book::John, "1", 1), verse(&v, Book::John, "2", 25)).unwrap();
    assert_eq!(
        format_interval(&i, &Delimiters::default()).unwrap(),
        "John 1—2"
    );
}

#[test]
fn cross_book_interval_spells_out_both_endpoints() {
    let v = gospels();
    let i = Interval::new(
        verse(&v, Book::Matthew, "28", 20),
        verse(&v, Book::Mark, "1", 1),
    )
    .unwrap();
    assert_eq!(
        format_interval(&i, &Delimiters::default()).unwrap(),
        "Matthew 28:20 — Mark 1:1"
    );
}

#[test]
fn separate_books_group_with_full_renderings() {
    let v = gospels();
    assert_eq!(
        render(vec![
            verse(&v, Book::Matthew, "28", 20),
            verse(&v, Book::Mark, "1", 1),
        ]),
        "Matthew 28:20;Mark 1:1"
    );
}

#[test]
fn version_change_annotates_the_previous_group() {
    let kjv = gospels();
    let tst = small_john();
    let reference = Reference::build(vec![
        verse(&kjv, Book::John, "3", 16),
        verse(&tst, Book::John, "3", 1),
    ])
    .unwrap();
    assert_eq!(
        format(&reference, &Delimiters::default()).unwrap(),
        "John 3:16 (King James Version);John 3:1"
    );
}

#[test]
fn formatting_leaves_the_reference_intervals_untouched() {
    let v = gospels();
    let reference = Reference::build(vec![
        verse(&v, Book::John, "10", 1),
        verse(&v, Book::John, "2", 1),
    ])
    .unwrap();
    let before: Vec<String> = reference.intervals().iter().map(|i| i.interval_id()).collect();
    format(&reference, &Delimiters::default()).unwrap();
    let after: Vec<String> = reference.intervals().iter().map(|i| i.interval_id()).collect();
    assert_eq!(before, after);
}

#[test]
fn empty_reference_rejected() {
    assert_matches!(Reference::build(vec![]), Err(BibleError::EmptyReference));
}

#[test]
fn cross_version_interval_rejected() {
    let kjv = gospels();
    let tst = small_john();
    let err = Interval::new(
        verse(&kjv, Book::John, "3", 16),
        verse(&tst, Book::John, "3", 17),
    )
    .unwrap_err();
    assert_matches!(err, BibleError::InvalidInterval(_));
}

#[test]
fn cross_version_verse_comparison_rejected() {
    let kjv = gospels();
    let tst = small_john();
    let a = verse(&kjv, Book::John, "3", 16);
    let b = verse(&tst, Book::John, "3", 16);
    assert_matches!(a.compare(&b), Err(BibleError::IncomparableVersions { .. }));
}

proptest! {
    /// Any non-empty ascending verse sequence merges into pairwise
    /// non-overlapping, maximal intervals that cover the input exactly.
    #[test]
    fn merge_is_maximal_and_non_overlapping(
        picks in proptest::collection::btree_set((1u32..=3, 1u32..=4), 1..=12)
    ) {
        let v = small_john();
        let verses: Vec<Verse> = picks
            .iter()
            .map(|(c, n)| verse(&v, Book::John, &c.to_string(), *n))
            .collect();

        let reference = Reference::build(verses.clone()).unwrap();

        let covered: usize = reference
            .intervals()
            .iter()
            .map(|i| (i.right().verse_number() - i.left().verse_number() + 1) as usize)
            .sum();
        prop_assert_eq!(covered, verses.len());

        for pair in reference.intervals().windows(2) {
            prop_assert_eq!(
                pair[0].right().compare(pair[1].left()).unwrap(),
                std::cmp::Ordering::Less
            );
            // Maximal: the gap between adjacent intervals is at least one verse.
            prop_assert!(!pair[0].right().is_next_sibling(pair[1].left()));
        }
    }

    /// Every valid interval classifies into exactly one numbering case, and
    /// that case agrees with the boolean boundary predicates.
    #[test]
    fn classification_is_exhaustive_and_consistent(
        a in (1u32..=3, 1u32..=4),
        b in (1u32..=3, 1u32..=4)
    ) {
        let v = small_john();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let i = Interval::new(
            verse(&v, Book::John, &lo.0.to_string(), lo.1),
            verse(&v, Book::John, &hi.0.to_string(), hi.1),
        )
        .unwrap();

        match i.classify().unwrap() {
            IntervalCase::Degenerate => prop_assert!(i.is_degenerate()),
            IntervalCase::PartialChapter => {
                prop_assert!(i.is_partial_chapter().unwrap() && !i.is_degenerate())
            }
            IntervalCase::FullChapter => prop_assert!(i.is_full_chapter().unwrap()),
            IntervalCase::CrossFullChapter => prop_assert!(i.is_cross_full_chapter().unwrap()),
            IntervalCase::CrossFullToPartial => {
                prop_assert!(i.is_cross_full_to_partial().unwrap())
            }
            IntervalCase::CrossPartialToFull => {
                prop_assert!(i.is_cross_partial_to_full().unwrap())
            }
            IntervalCase::CrossGeneral => {
                prop_assert!(!i.same_chapter());
                prop_assert!(!i.starts_at_chapter_beginning());
                prop_assert!(!i.ends_at_chapter_end().unwrap());
            }
        }

        // Rendering hits exactly one branch and never fails for valid input.
        let rendered = format_numbering(&i, &Delimiters::default()).unwrap();
        prop_assert!(!rendered.is_empty());
    }
}
