//! Citation rendering.
//!
//! Renders a [`Reference`] into a single citation string following
//! conventional Bible-citation typography: `"John 3:16"`, `"Matthew 1—2"`,
//! `"Genesis 1:1-3;2:4"`. Delimiters are an explicit [`Delimiters`] config
//! value with documented defaults, never implicit function defaults.
//!
//! Rendering walks the intervals in ascending order and, for each interval
//! after the first, emits only what the previous interval does not already
//! imply: a new book restates the book name, a new chapter restates the
//! chapter, a range in the same chapter emits bare verse numbers. A version
//! change annotates the finished group with the previous version's display
//! name before starting over with a full rendering.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::errors::BibleResult;
use crate::interval::{Interval, IntervalCase};
use crate::reference::Reference;

/// Delimiter configuration for citation rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delimiters {
    /// Between unrelated ranges. Default `";"`.
    pub group_separator: String,
    /// Between verse ranges within the same chapter. Default `","`.
    pub verse_group_separator: String,
    /// Between the endpoints of a cross-book range. Default `" — "`.
    pub cross_book_delimiter: String,
    /// Between the endpoints of a cross-chapter range. Default `"—"`.
    pub cross_chapter_delimiter: String,
    /// Between the endpoints of a verse range. Default `"-"`.
    pub cross_verse_delimiter: String,
    /// Between a chapter and a verse number. Default `":"`.
    pub chapter_verse_separator: String,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            group_separator: ";".to_string(),
            verse_group_separator: ",".to_string(),
            cross_book_delimiter: " — ".to_string(),
            cross_chapter_delimiter: "—".to_string(),
            cross_verse_delimiter: "-".to_string(),
            chapter_verse_separator: ":".to_string(),
        }
    }
}

/// Render a reference into a citation string.
///
/// The reference's own interval sequence is left untouched; rendering sorts
/// a private copy ascending by left verse (ties by right verse). Intervals
/// of different versions are grouped by version internal id, since canonical
/// order across versions is undefined.
pub fn format(reference: &Reference, delimiters: &Delimiters) -> BibleResult<String> {
    let mut keyed = Vec::with_capacity(reference.intervals().len());
    for interval in reference.intervals() {
        keyed.push((sort_key(interval)?, interval));
    }
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    let mut out = String::new();
    let mut previous: Option<&Interval> = None;

    for (_, current) in keyed {
        let Some(prev) = previous else {
            out.push_str(&format_interval(current, delimiters)?);
            previous = Some(current);
            continue;
        };

        if current.left().version() != prev.right().version() {
            // Close the previous version's group with its display name, then
            // start over with a fully qualified rendering.
            let _ = write!(out, " ({})", prev.right().version().name());
            out.push_str(&delimiters.group_separator);
            out.push_str(&format_interval(current, delimiters)?);
        } else if current.left().book() != prev.right().book() {
            out.push_str(&delimiters.group_separator);
            out.push_str(&format_interval(current, delimiters)?);
        } else if current.left().chapter() != prev.right().chapter() {
            out.push_str(&delimiters.group_separator);
            out.push_str(&format_numbering(current, delimiters)?);
        } else {
            out.push_str(&delimiters.verse_group_separator);
            if current.is_degenerate() {
                let _ = write!(out, "{}", current.left().verse_number());
            } else {
                let _ = write!(
                    out,
                    "{}{}{}",
                    current.left().verse_number(),
                    delimiters.cross_verse_delimiter,
                    current.right().verse_number()
                );
            }
        }
        previous = Some(current);
    }

    Ok(out)
}

/// Render one interval with its book name(s).
///
/// Within one book: `"<book> <numbering>"`. Across books both endpoints are
/// always spelled out in full chapter:verse form; no compaction applies.
pub fn format_interval(interval: &Interval, delimiters: &Delimiters) -> BibleResult<String> {
    if interval.same_book() {
        return Ok(format!(
            "{} {}",
            interval.left().book().english_name(),
            format_numbering(interval, delimiters)?
        ));
    }

    Ok(format!(
        "{} {}{}{}{}{} {}{}{}",
        interval.left().book().english_name(),
        interval.left().chapter(),
        delimiters.chapter_verse_separator,
        interval.left().verse_number(),
        delimiters.cross_book_delimiter,
        interval.right().book().english_name(),
        interval.right().chapter(),
        delimiters.chapter_verse_separator,
        interval.right().verse_number()
    ))
}

/// Render the chapter/verse numbering of an interval, without book names,
/// in the most compact valid notation for its [`IntervalCase`].
pub fn format_numbering(interval: &Interval, delimiters: &Delimiters) -> BibleResult<String> {
    let left = interval.left();
    let right = interval.right();
    let sep = &delimiters.chapter_verse_separator;
    let ccd = &delimiters.cross_chapter_delimiter;
    let cvd = &delimiters.cross_verse_delimiter;

    let rendered = match interval.classify()? {
        // e.g. "1:2" -> verse 2 of chapter 1
        IntervalCase::Degenerate => {
            format!("{}{sep}{}", left.chapter(), left.verse_number())
        }
        // e.g. "1:1-2" -> verses 1 and 2 of chapter 1
        IntervalCase::PartialChapter => format!(
            "{}{sep}{}{cvd}{}",
            left.chapter(),
            left.verse_number(),
            right.verse_number()
        ),
        // e.g. "1" -> the whole of chapter 1
        IntervalCase::FullChapter => left.chapter().to_string(),
        // e.g. "1—2" -> the whole of chapters 1 and 2
        IntervalCase::CrossFullChapter => {
            format!("{}{ccd}{}", left.chapter(), right.chapter())
        }
        // e.g. "1—2:1" -> chapter 1, then chapter 2 up to verse 1
        IntervalCase::CrossFullToPartial => format!(
            "{}{ccd}{}{sep}{}",
            left.chapter(),
            right.chapter(),
            right.verse_number()
        ),
        // e.g. "1:2—2" -> chapter 1 from verse 2, then the whole of chapter 2
        IntervalCase::CrossPartialToFull => format!(
            "{}{sep}{}{ccd}{}",
            left.chapter(),
            left.verse_number(),
            right.chapter()
        ),
        // e.g. "1:2—2:1" -> chapter 1 from verse 2 up to chapter 2 verse 1
        IntervalCase::CrossGeneral => format!(
            "{}{sep}{}{ccd}{}{sep}{}",
            left.chapter(),
            left.verse_number(),
            right.chapter(),
            right.verse_number()
        ),
    };

    Ok(rendered)
}

type SortKey = (String, (u32, u32, u32), (u32, u32, u32));

fn sort_key(interval: &Interval) -> BibleResult<SortKey> {
    let structure = interval.left().version().structure();
    let left = (
        structure.book_order(interval.left().book())?,
        interval.left().chapter().number(),
        interval.left().verse_number(),
    );
    let right = (
        structure.book_order(interval.right().book())?,
        interval.right().chapter().number(),
        interval.right().verse_number(),
    );
    Ok((
        interval.left().version().internal_id().to_string(),
        left,
        right,
    ))
}
