//! Per-version structure metadata.
//!
//! A Bible version decides which books it contains, the sequence they appear
//! in, and how many chapters and verses each book has. Every ordering and
//! boundary decision in the crate (is this verse the last of its chapter?
//! does this range span a whole chapter?) is answered from this metadata,
//! never from the verse values themselves.
//!
//! Both structures validate at construction and are immutable afterwards.
//! `BTreeMap` keeps iteration deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::book::Book;
use crate::errors::{BibleError, BibleResult};

/// Structure of a single book within one version: its position among the
/// version's books, its chapter count, and the verse count of each chapter.
///
/// Deserialization runs through [`BookStructure::new`], so the
/// chapter-coverage invariants hold for deserialized values too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BookStructureRepr")]
pub struct BookStructure {
    book: Book,
    order: u32,
    chapters: u32,
    /// Chapter number (1-based) to verse count.
    verses: BTreeMap<u32, u32>,
}

#[derive(Deserialize)]
struct BookStructureRepr {
    book: Book,
    order: u32,
    chapters: u32,
    verses: BTreeMap<u32, u32>,
}

impl TryFrom<BookStructureRepr> for BookStructure {
    type Error = BibleError;

    fn try_from(repr: BookStructureRepr) -> BibleResult<Self> {
        BookStructure::new(repr.book, repr.order, repr.chapters, repr.verses)
    }
}

impl BookStructure {
    /// Build a book structure, validating that `verses` covers exactly the
    /// chapters `1..=chapters` and that every chapter has at least one verse.
    pub fn new(
        book: Book,
        order: u32,
        chapters: u32,
        verses: BTreeMap<u32, u32>,
    ) -> BibleResult<Self> {
        if chapters == 0 {
            return Err(BibleError::invalid_structure(format!(
                "book {book} must have at least one chapter"
            )));
        }
        if verses.len() as u32 != chapters {
            return Err(BibleError::invalid_structure(format!(
                "book {book} declares {chapters} chapters but {} verse-count entries",
                verses.len()
            )));
        }
        for chapter in 1..=chapters {
            match verses.get(&chapter) {
                None => {
                    return Err(BibleError::invalid_structure(format!(
                        "book {book} is missing a verse count for chapter {chapter}"
                    )))
                }
                Some(0) => {
                    return Err(BibleError::invalid_structure(format!(
                        "book {book} chapter {chapter} has a zero verse count"
                    )))
                }
                Some(_) => {}
            }
        }
        Ok(Self {
            book,
            order,
            chapters,
            verses,
        })
    }

    /// Build from a slice of verse counts, where index `i` holds the count
    /// of chapter `i + 1`.
    pub fn from_counts(book: Book, order: u32, counts: &[u32]) -> BibleResult<Self> {
        let verses = counts
            .iter()
            .enumerate()
            .map(|(i, &n)| (i as u32 + 1, n))
            .collect();
        Self::new(book, order, counts.len() as u32, verses)
    }

    pub fn book(&self) -> Book {
        self.book
    }

    /// Position of this book in the version's canonical sequence.
    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn chapters(&self) -> u32 {
        self.chapters
    }

    /// Verse count of the given chapter.
    pub fn verse_count(&self, chapter: u32) -> BibleResult<u32> {
        self.verses
            .get(&chapter)
            .copied()
            .ok_or(BibleError::ChapterNotInStructure {
                book: self.book,
                chapter,
            })
    }
}

/// Structure of a whole version: one [`BookStructure`] per book it contains.
///
/// Deserialization runs through [`VersionStructure::new`] and additionally
/// checks that every map key matches the book of its entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VersionStructureRepr")]
pub struct VersionStructure {
    books: BTreeMap<Book, BookStructure>,
}

#[derive(Deserialize)]
struct VersionStructureRepr {
    books: BTreeMap<Book, BookStructure>,
}

impl TryFrom<VersionStructureRepr> for VersionStructure {
    type Error = BibleError;

    fn try_from(repr: VersionStructureRepr) -> BibleResult<Self> {
        for (book, bs) in &repr.books {
            if *book != bs.book() {
                return Err(BibleError::invalid_structure(format!(
                    "entry keyed {book} describes book {}",
                    bs.book()
                )));
            }
        }
        VersionStructure::new(repr.books.into_values().collect())
    }
}

impl VersionStructure {
    /// Build a version structure, validating that book order values are
    /// unique (they define the canonical book sequence) and that no book
    /// appears twice.
    pub fn new(books: Vec<BookStructure>) -> BibleResult<Self> {
        let mut by_book = BTreeMap::new();
        let mut seen_orders = BTreeMap::new();

        for bs in books {
            if let Some(other) = seen_orders.insert(bs.order(), bs.book()) {
                return Err(BibleError::invalid_structure(format!(
                    "books {other} and {} share order {}",
                    bs.book(),
                    bs.order()
                )));
            }
            let book = bs.book();
            if by_book.insert(book, bs).is_some() {
                return Err(BibleError::invalid_structure(format!(
                    "book {book} appears twice"
                )));
            }
        }

        Ok(Self { books: by_book })
    }

    /// Structure of a single book.
    pub fn get(&self, book: Book) -> BibleResult<&BookStructure> {
        self.books
            .get(&book)
            .ok_or_else(|| BibleError::unknown_book(book.code()))
    }

    /// Canonical position of a book within this version.
    pub fn book_order(&self, book: Book) -> BibleResult<u32> {
        Ok(self.get(book)?.order())
    }

    /// Verse count of a chapter of a book.
    pub fn verse_count(&self, book: Book, chapter: u32) -> BibleResult<u32> {
        self.get(book)?.verse_count(chapter)
    }

    /// Books present in this version.
    pub fn books(&self) -> impl Iterator<Item = &BookStructure> {
        self.books.values()
    }
}
