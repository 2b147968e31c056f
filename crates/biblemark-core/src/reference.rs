//! Reduction of verse lists to minimal interval sets.
//!
//! [`Reference::build`] scans a verse list once and merges runs of sibling
//! verses into intervals. The scan trusts the order it is given: for the
//! result to be a minimal set of maximal intervals, the caller must supply
//! verses already in ascending canonical order (see [`Verse::compare`]).
//! Unsorted input is not an error, but its decomposition reflects the input
//! order rather than the canonical one.

use serde::{Deserialize, Serialize};

use crate::errors::{BibleError, BibleResult};
use crate::interval::Interval;
use crate::verse::Verse;

/// An ordered set of verses reduced to non-overlapping intervals.
///
/// Immutable after construction: to add a verse to a reference, rebuild it
/// from the extended verse list, so the intervals are always re-merged and
/// maximal.
///
/// Deserialization reads the verse list only and re-runs the merge through
/// [`Reference::build`]; a serialized interval list is never trusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ReferenceRepr")]
pub struct Reference {
    verses: Vec<Verse>,
    intervals: Vec<Interval>,
}

#[derive(Deserialize)]
struct ReferenceRepr {
    verses: Vec<Verse>,
}

impl TryFrom<ReferenceRepr> for Reference {
    type Error = BibleError;

    fn try_from(repr: ReferenceRepr) -> BibleResult<Self> {
        Reference::build(repr.verses)
    }
}

impl Reference {
    /// Merge a verse list into intervals.
    ///
    /// Fails with `EmptyReference` for an empty input.
    ///
    /// Precondition: verses must already be in ascending canonical order for
    /// the intervals to be maximal. The builder does not sort.
    pub fn build(verses: Vec<Verse>) -> BibleResult<Self> {
        let mut iter = verses.iter();
        let first = iter.next().ok_or(BibleError::EmptyReference)?;

        let mut intervals = Vec::new();
        let mut left = first.clone();
        let mut previous = first.clone();

        for current in iter {
            if !previous.is_next_sibling(current) {
                intervals.push(Interval::new(left, previous)?);
                left = current.clone();
            }
            previous = current.clone();
        }
        intervals.push(Interval::new(left, previous)?);

        Ok(Self { verses, intervals })
    }

    /// The merged intervals, in input order.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// The verses this reference was built from.
    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }
}
