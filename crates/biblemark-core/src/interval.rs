//! Contiguous verse intervals.
//!
//! An [`Interval`] is a run of contiguous verses represented by its first and
//! last verse, both from the same version, with `left <= right`. Intervals
//! are built once by [`crate::reference::Reference`] and never mutated.
//!
//! Each interval falls into exactly one [`IntervalCase`], the discriminant
//! the citation formatter matches on. Classification is a single exhaustive
//! function rather than a cascade of boolean checks, so the compiler proves
//! that every interval hits exactly one rendering branch.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::errors::{BibleError, BibleResult};
use crate::verse::Verse;

/// The seven shapes an interval can take, most specific first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntervalCase {
    /// A single verse, e.g. `3:16`.
    Degenerate,
    /// Part of one chapter, e.g. `3:1-5`.
    PartialChapter,
    /// Exactly one whole chapter, e.g. `3`.
    FullChapter,
    /// Several chapters, both ends on chapter boundaries, e.g. `1—2`.
    CrossFullChapter,
    /// Starts on a chapter boundary, ends mid-chapter, e.g. `1—2:5`.
    CrossFullToPartial,
    /// Starts mid-chapter, ends on a chapter boundary, e.g. `1:5—2`.
    CrossPartialToFull,
    /// Crosses chapters with neither end aligned, e.g. `1:5—2:3`.
    CrossGeneral,
}

/// Deserialization runs through [`Interval::new`], so deserialized
/// intervals satisfy the same endpoint invariants as constructed ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IntervalRepr")]
pub struct Interval {
    left: Verse,
    right: Verse,
}

#[derive(Deserialize)]
struct IntervalRepr {
    left: Verse,
    right: Verse,
}

impl TryFrom<IntervalRepr> for Interval {
    type Error = BibleError;

    fn try_from(repr: IntervalRepr) -> BibleResult<Self> {
        Interval::new(repr.left, repr.right)
    }
}

impl Interval {
    /// Build an interval. Fails with `InvalidInterval` if the endpoints
    /// belong to different versions or `left` comes after `right`.
    pub fn new(left: Verse, right: Verse) -> BibleResult<Self> {
        if left.version() != right.version() {
            return Err(BibleError::invalid_interval(format!(
                "endpoints from different versions [{}] and [{}]",
                left.version().internal_id(),
                right.version().internal_id()
            )));
        }
        if left.compare(&right)? == Ordering::Greater {
            return Err(BibleError::invalid_interval(format!(
                "left verse {} comes after right verse {}",
                left.verse_id(),
                right.verse_id()
            )));
        }
        Ok(Self { left, right })
    }

    pub fn left(&self) -> &Verse {
        &self.left
    }

    pub fn right(&self) -> &Verse {
        &self.right
    }

    /// An interval [a, b] is degenerate iff a = b: it holds a single verse.
    pub fn is_degenerate(&self) -> bool {
        self.left == self.right
    }

    pub fn same_book(&self) -> bool {
        self.left.book() == self.right.book()
    }

    pub fn same_chapter(&self) -> bool {
        self.same_book() && self.left.chapter() == self.right.chapter()
    }

    pub fn starts_at_chapter_beginning(&self) -> bool {
        self.left.verse_number() == 1
    }

    /// Whether the right endpoint is the last verse of its chapter, per the
    /// owning version's structure.
    pub fn ends_at_chapter_end(&self) -> BibleResult<bool> {
        let count = self
            .right
            .version()
            .structure()
            .verse_count(self.right.book(), self.right.chapter().number())?;
        Ok(self.right.verse_number() == count)
    }

    pub fn is_full_chapter(&self) -> BibleResult<bool> {
        Ok(self.same_chapter() && self.starts_at_chapter_beginning() && self.ends_at_chapter_end()?)
    }

    pub fn is_partial_chapter(&self) -> BibleResult<bool> {
        Ok(self.same_chapter() && !self.is_full_chapter()?)
    }

    pub fn is_cross_full_chapter(&self) -> BibleResult<bool> {
        Ok(!self.same_chapter() && self.starts_at_chapter_beginning() && self.ends_at_chapter_end()?)
    }

    pub fn is_cross_full_to_partial(&self) -> BibleResult<bool> {
        Ok(!self.same_chapter()
            && self.starts_at_chapter_beginning()
            && !self.ends_at_chapter_end()?)
    }

    pub fn is_cross_partial_to_full(&self) -> BibleResult<bool> {
        Ok(!self.same_chapter()
            && !self.starts_at_chapter_beginning()
            && self.ends_at_chapter_end()?)
    }

    /// Classify this interval into exactly one [`IntervalCase`].
    ///
    /// A degenerate interval classifies as `Degenerate` even when its single
    /// verse happens to span a whole chapter.
    pub fn classify(&self) -> BibleResult<IntervalCase> {
        if self.same_chapter() {
            if self.is_degenerate() {
                return Ok(IntervalCase::Degenerate);
            }
            return Ok(
                if self.starts_at_chapter_beginning() && self.ends_at_chapter_end()? {
                    IntervalCase::FullChapter
                } else {
                    IntervalCase::PartialChapter
                },
            );
        }

        let case = match (self.starts_at_chapter_beginning(), self.ends_at_chapter_end()?) {
            (true, true) => IntervalCase::CrossFullChapter,
            (true, false) => IntervalCase::CrossFullToPartial,
            (false, true) => IntervalCase::CrossPartialToFull,
            (false, false) => IntervalCase::CrossGeneral,
        };
        Ok(case)
    }

    /// Stable interval id: the verse id for a single verse, otherwise
    /// `"<left>-<right>"`, e.g. `"JHN.3.16-JHN.3.18"`.
    pub fn interval_id(&self) -> String {
        if self.is_degenerate() {
            self.left.verse_id()
        } else {
            format!("{}-{}", self.left.verse_id(), self.right.verse_id())
        }
    }

    /// Compare two intervals by their left verse.
    pub fn compare(&self, other: &Interval) -> BibleResult<Ordering> {
        self.left.compare(&other.left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::Book;
    use crate::structure::{BookStructure, VersionStructure};
    use crate::verse::ChapterId;
    use crate::version::Version;
    use assert_matches::assert_matches;
    use std::sync::Arc;

    fn version(internal_id: &str) -> Arc<Version> {
        // John with three chapters of 5, 4 and 5 verses.
        let structure = VersionStructure::new(vec![
            BookStructure::from_counts(Book::John, 43, &[5, 4, 5]).unwrap(),
            BookStructure::from_counts(Book::Acts, 44, &[26, 47]).unwrap(),
        ])
        .unwrap();
        Arc::new(Version::new(internal_id, "ext", "en", "Test Version", false, structure).unwrap())
    }

    fn verse(v: &Arc<Version>, book: Book, chapter: &str, n: u32) -> Verse {
        Verse::new(v.clone(), book, ChapterId::new(chapter).unwrap(), n).unwrap()
    }

    fn interval(v: &Arc<Version>, left: (&str, u32), right: (&str, u32)) -> Interval {
        Interval::new(
            verse(v, Book::John, left.0, left.1),
            verse(v, Book::John, right.0, right.1),
        )
        .unwrap()
    }

    #[test]
    fn reversed_endpoints_rejected() {
        let v = version("kjv");
        let err = Interval::new(verse(&v, Book::John, "3", 5), verse(&v, Book::John, "3", 1))
            .unwrap_err();
        assert_matches!(err, BibleError::InvalidInterval(_));
    }

    #[test]
    fn mixed_versions_rejected() {
        let kjv = version("kjv");
        let web = version("web");
        let err = Interval::new(
            verse(&kjv, Book::John, "3", 1),
            verse(&web, Book::John, "3", 2),
        )
        .unwrap_err();
        assert_matches!(err, BibleError::InvalidInterval(_));
    }

    #[test]
    fn classification_covers_all_shapes() {
        let v = version("kjv");

        assert_eq!(
            interval(&v, ("1", 3), ("1", 3)).classify().unwrap(),
            IntervalCase::Degenerate
        );
        assert_eq!(
            interval(&v, ("1", 1), ("1", 3)).classify().unwrap(),
            IntervalCase::PartialChapter
        );
        assert_eq!(
            interval(&v, ("1", 1), ("1", 5)).classify().unwrap(),
            IntervalCase::FullChapter
        );
        assert_eq!(
            interval(&v, ("1", 1), ("2", 4)).classify().unwrap(),
            IntervalCase::CrossFullChapter
        );
        assert_eq!(
            interval(&v, ("1", 1), ("2", 2)).classify().unwrap(),
            IntervalCase::CrossFullToPartial
        );
        assert_eq!(
            interval(&v, ("1", 2), ("2", 4)).classify().unwrap(),
            IntervalCase::CrossPartialToFull
        );
        assert_eq!(
            interval(&v, ("1", 2), ("2", 2)).classify().unwrap(),
            IntervalCase::CrossGeneral
        );
    }

    #[test]
    fn cross_book_interval_classifies_by_boundaries() {
        let v = version("kjv");
        let i = Interval::new(
            verse(&v, Book::John, "3", 1),
            verse(&v, Book::Acts, "2", 47),
        )
        .unwrap();
        assert!(!i.same_book());
        assert_eq!(i.classify().unwrap(), IntervalCase::CrossFullChapter);
    }

    #[test]
    fn chapter_missing_from_structure_is_an_error() {
        let v = version("kjv");
        let i = interval(&v, ("1", 1), ("9", 2));
        assert_matches!(
            i.classify(),
            Err(BibleError::ChapterNotInStructure { .. })
        );
    }

    #[test]
    fn intervals_order_by_left_verse() {
        let v = version("kjv");
        let a = interval(&v, ("1", 2), ("1", 4));
        let b = interval(&v, ("2", 1), ("2", 2));
        assert_eq!(a.compare(&b).unwrap(), Ordering::Less);
        assert_eq!(b.compare(&a).unwrap(), Ordering::Greater);

        // Only the left endpoints take part in interval ordering.
        let c = interval(&v, ("1", 2), ("1", 3));
        assert_eq!(a.compare(&c).unwrap(), Ordering::Equal);
    }

    #[test]
    fn intervals_of_different_versions_do_not_order() {
        let kjv = version("kjv");
        let web = version("web");
        let a = interval(&kjv, ("1", 2), ("1", 4));
        let b = interval(&web, ("1", 2), ("1", 4));
        assert_matches!(a.compare(&b), Err(BibleError::IncomparableVersions { .. }));
    }

    #[test]
    fn deserialization_rejects_reversed_endpoints() {
        let v = version("kjv");
        let good = interval(&v, ("3", 2), ("3", 4));

        let json = serde_json::to_string(&good).unwrap();
        let back: Interval = serde_json::from_str(&json).unwrap();
        assert_eq!(back, good);

        let swapped = serde_json::json!({
            "left": serde_json::to_value(good.right()).unwrap(),
            "right": serde_json::to_value(good.left()).unwrap(),
        });
        assert!(serde_json::from_value::<Interval>(swapped).is_err());
    }

    #[test]
    fn interval_ids() {
        let v = version("kjv");
        assert_eq!(interval(&v, ("3", 2), ("3", 2)).interval_id(), "JHN.3.2");
        assert_eq!(
            interval(&v, ("3", 2), ("3", 4)).interval_id(),
            "JHN.3.2-JHN.3.4"
        );
    }
}
