//! Verse identifiers and their order.
//!
//! A [`Verse`] addresses one verse of one chapter of one book in one version.
//! Verses are immutable and cheap to clone (the owning [`Version`] sits
//! behind an `Arc`).
//!
//! Ordering is defined only within a single version, by the key
//! `(book order, chapter number, verse number)`, and is exposed as the
//! explicit [`Verse::compare`] method rather than operator traits: comparing
//! across versions is a typed error, not a panic or a silent misorder.
//!
//! Chapter identifiers arrive from the outside as strings. They are parsed
//! to numbers at construction and compared numerically everywhere, so
//! chapter "10" sorts after chapter "2" and agrees with the numeric keys of
//! [`crate::structure::VersionStructure`] by construction.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::book::Book;
use crate::errors::{BibleError, BibleResult};
use crate::version::Version;

/// A chapter identifier: the external string form plus its numeric value.
///
/// Travels over the wire as its string form and re-parses on the way in, so
/// a deserialized chapter id is always internally consistent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ChapterId {
    raw: String,
    number: u32,
}

impl From<ChapterId> for String {
    fn from(chapter: ChapterId) -> String {
        chapter.raw
    }
}

impl TryFrom<String> for ChapterId {
    type Error = BibleError;

    fn try_from(raw: String) -> BibleResult<Self> {
        ChapterId::new(raw)
    }
}

impl ChapterId {
    /// Parse a chapter id. Fails with `InvalidVerse` for empty, non-numeric,
    /// or zero input. (The upstream provider's non-numeric pseudo-chapters,
    /// like introductions, never carry verses and are rejected here.)
    pub fn new(raw: impl Into<String>) -> BibleResult<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(BibleError::invalid_verse("empty chapter id"));
        }
        let number: u32 = raw
            .parse()
            .map_err(|_| BibleError::invalid_verse(format!("non-numeric chapter id [{raw}]")))?;
        if number == 0 {
            return Err(BibleError::invalid_verse("chapter id must be at least 1"));
        }
        Ok(Self { raw, number })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn number(&self) -> u32 {
        self.number
    }
}

impl PartialEq for ChapterId {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for ChapterId {}

impl PartialOrd for ChapterId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChapterId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.number.cmp(&other.number)
    }
}

impl std::fmt::Display for ChapterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// One verse of one version.
///
/// Deserialization runs through [`Verse::new`], so the construction
/// invariants hold for deserialized values too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VerseRepr")]
pub struct Verse {
    version: Arc<Version>,
    book: Book,
    chapter: ChapterId,
    verse_number: u32,
}

#[derive(Deserialize)]
struct VerseRepr {
    version: Arc<Version>,
    book: Book,
    chapter: ChapterId,
    verse_number: u32,
}

impl TryFrom<VerseRepr> for Verse {
    type Error = BibleError;

    fn try_from(repr: VerseRepr) -> BibleResult<Self> {
        Verse::new(repr.version, repr.book, repr.chapter, repr.verse_number)
    }
}

impl Verse {
    /// Build a verse. Fails with `InvalidVerse` if `verse_number` is below 1.
    pub fn new(
        version: Arc<Version>,
        book: Book,
        chapter: ChapterId,
        verse_number: u32,
    ) -> BibleResult<Self> {
        if verse_number < 1 {
            return Err(BibleError::invalid_verse("verse number must be at least 1"));
        }
        Ok(Self {
            version,
            book,
            chapter,
            verse_number,
        })
    }

    /// Build a verse from raw storage/API parts: a book code and a chapter
    /// id string.
    pub fn from_parts(
        version: Arc<Version>,
        book_code: &str,
        chapter_id: &str,
        verse_number: u32,
    ) -> BibleResult<Self> {
        let book = Book::from_code(book_code)?;
        let chapter = ChapterId::new(chapter_id)?;
        Self::new(version, book, chapter, verse_number)
    }

    pub fn version(&self) -> &Arc<Version> {
        &self.version
    }

    pub fn book(&self) -> Book {
        self.book
    }

    pub fn chapter(&self) -> &ChapterId {
        &self.chapter
    }

    pub fn verse_number(&self) -> u32 {
        self.verse_number
    }

    /// Version-less verse id, e.g. `"JHN.3.16"`.
    pub fn verse_id(&self) -> String {
        format!("{}.{}.{}", self.book.code(), self.chapter, self.verse_number)
    }

    /// Version-qualified verse id, e.g. `"kjv.JHN.3.16"`.
    pub fn versioned_id(&self) -> String {
        format!("{}.{}", self.version.internal_id(), self.verse_id())
    }

    /// Whether `other` immediately follows this verse: same version, book
    /// and chapter, and the next verse number.
    pub fn is_next_sibling(&self, other: &Verse) -> bool {
        other.version == self.version
            && other.book == self.book
            && other.chapter == self.chapter
            && other.verse_number == self.verse_number + 1
    }

    /// Compare two verses of the same version by
    /// `(book order, chapter number, verse number)`.
    ///
    /// Fails with `IncomparableVersions` if the verses belong to different
    /// versions, and with `UnknownBook` if either book is absent from the
    /// version's structure.
    pub fn compare(&self, other: &Verse) -> BibleResult<Ordering> {
        if self.version != other.version {
            return Err(BibleError::IncomparableVersions {
                left: self.version.internal_id().to_string(),
                right: other.version.internal_id().to_string(),
            });
        }

        let structure = self.version.structure();
        let own = (
            structure.book_order(self.book)?,
            self.chapter.number(),
            self.verse_number,
        );
        let theirs = (
            structure.book_order(other.book)?,
            other.chapter.number(),
            other.verse_number,
        );
        Ok(own.cmp(&theirs))
    }
}

impl std::fmt::Display for Verse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.versioned_id())
    }
}
