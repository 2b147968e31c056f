//! The canonical book catalog.
//!
//! `Book` is a closed enumeration of the 66 Protestant-canon books and the
//! only source of book identity in the crate: nothing else carries
//! stringly-typed book names. Each book exposes a stable three-character
//! external code (the id scheme of the upstream scripture API) and an English
//! display name used by the citation formatter.
//!
//! Canonical *ordering* of books is deliberately not defined here; it belongs
//! to the per-version structure metadata (`crate::structure`), because book
//! sequence is a property of a Bible version, not of the catalog.

use serde::{Deserialize, Serialize};

use crate::errors::{BibleError, BibleResult};

/// Static catalog data for a single book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookInfo {
    /// Stable external code, e.g. `"GEN"`, `"JHN"`.
    pub code: &'static str,
    /// English display name, e.g. `"Genesis"`, `"John"`.
    pub english_name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Book {
    Genesis,
    Exodus,
    Leviticus,
    Numbers,
    Deuteronomy,
    Joshua,
    Judges,
    Ruth,
    FirstSamuel,
    SecondSamuel,
    FirstKings,
    SecondKings,
    FirstChronicles,
    SecondChronicles,
    Ezra,
    Nehemiah,
    Esther,
    Job,
    Psalms,
    Proverbs,
    Ecclesiastes,
    SongOfSolomon,
    Isaiah,
    Jeremiah,
    Lamentations,
    Ezekiel,
    Daniel,
    Hosea,
    Joel,
    Amos,
    Obadiah,
    Jonah,
    Micah,
    Nahum,
    Habakkuk,
    Zephaniah,
    Haggai,
    Zechariah,
    Malachi,
    Matthew,
    Mark,
    Luke,
    John,
    Acts,
    Romans,
    FirstCorinthians,
    SecondCorinthians,
    Galatians,
    Ephesians,
    Philippians,
    Colossians,
    FirstThessalonians,
    SecondThessalonians,
    FirstTimothy,
    SecondTimothy,
    Titus,
    Philemon,
    Hebrews,
    James,
    FirstPeter,
    SecondPeter,
    FirstJohn,
    SecondJohn,
    ThirdJohn,
    Jude,
    Revelation,
}

impl Book {
    /// Every book in Genesis..Revelation catalog order.
    pub const ALL: [Book; 66] = [
        Book::Genesis,
        Book::Exodus,
        Book::Leviticus,
        Book::Numbers,
        Book::Deuteronomy,
        Book::Joshua,
        Book::Judges,
        Book::Ruth,
        Book::FirstSamuel,
        Book::SecondSamuel,
        Book::FirstKings,
        Book::SecondKings,
        Book::FirstChronicles,
        Book::SecondChronicles,
        Book::Ezra,
        Book::Nehemiah,
        Book::Esther,
        Book::Job,
        Book::Psalms,
        Book::Proverbs,
        Book::Ecclesiastes,
        Book::SongOfSolomon,
        Book::Isaiah,
        Book::Jeremiah,
        Book::Lamentations,
        Book::Ezekiel,
        Book::Daniel,
        Book::Hosea,
        Book::Joel,
        Book::Amos,
        Book::Obadiah,
        Book::Jonah,
        Book::Micah,
        Book::Nahum,
        Book::Habakkuk,
        Book::Zephaniah,
        Book::Haggai,
        Book::Zechariah,
        Book::Malachi,
        Book::Matthew,
        Book::Mark,
        Book::Luke,
        Book::John,
        Book::Acts,
        Book::Romans,
        Book::FirstCorinthians,
        Book::SecondCorinthians,
        Book::Galatians,
        Book::Ephesians,
        Book::Philippians,
        Book::Colossians,
        Book::FirstThessalonians,
        Book::SecondThessalonians,
        Book::FirstTimothy,
        Book::SecondTimothy,
        Book::Titus,
        Book::Philemon,
        Book::Hebrews,
        Book::James,
        Book::FirstPeter,
        Book::SecondPeter,
        Book::FirstJohn,
        Book::SecondJohn,
        Book::ThirdJohn,
        Book::Jude,
        Book::Revelation,
    ];

    /// Catalog data for this book.
    pub fn info(&self) -> BookInfo {
        let (code, english_name) = match self {
            Book::Genesis => ("GEN", "Genesis"),
            Book::Exodus => ("EXO", "Exodus"),
            Book::Leviticus => ("LEV", "Leviticus"),
            Book::Numbers => ("NUM", "Numbers"),
            Book::Deuteronomy => ("DEU", "Deuteronomy"),
            Book::Joshua => ("JOS", "Joshua"),
            Book::Judges => ("JDG", "Judges"),
            Book::Ruth => ("RUT", "Ruth"),
            Book::FirstSamuel => ("1SA", "1 Samuel"),
            Book::SecondSamuel => ("2SA", "2 Samuel"),
            Book::FirstKings => ("1KI", "1 Kings"),
            Book::SecondKings => ("2KI", "2 Kings"),
            Book::FirstChronicles => ("1CH", "1 Chronicles"),
            Book::SecondChronicles => ("2CH", "2 Chronicles"),
            Book::Ezra => ("EZR", "Ezra"),
            Book::Nehemiah => ("NEH", "Nehemiah"),
            Book::Esther => ("EST", "Esther"),
            Book::Job => ("JOB", "Job"),
            Book::Psalms => ("PSA", "Psalms"),
            Book::Proverbs => ("PRO", "Proverbs"),
            Book::Ecclesiastes => ("ECC", "Ecclesiastes"),
            Book::SongOfSolomon => ("SNG", "Song of Solomon"),
            Book::Isaiah => ("ISA", "Isaiah"),
            Book::Jeremiah => ("JER", "Jeremiah"),
            Book::Lamentations => ("LAM", "Lamentations"),
            Book::Ezekiel => ("EZK", "Ezekiel"),
            Book::Daniel => ("DAN", "Daniel"),
            Book::Hosea => ("HOS", "Hosea"),
            Book::Joel => ("JOL", "Joel"),
            Book::Amos => ("AMO", "Amos"),
            Book::Obadiah => ("OBA", "Obadiah"),
            Book::Jonah => ("JON", "Jonah"),
            Book::Micah => ("MIC", "Micah"),
            Book::Nahum => ("NAM", "Nahum"),
            Book::Habakkuk => ("HAB", "Habakkuk"),
            Book::Zephaniah => ("ZEP", "Zephaniah"),
            Book::Haggai => ("HAG", "Haggai"),
            Book::Zechariah => ("ZEC", "Zechariah"),
            Book::Malachi => ("MAL", "Malachi"),
            Book::Matthew => ("MAT", "Matthew"),
            Book::Mark => ("MRK", "Mark"),
            Book::Luke => ("LUK", "Luke"),
            Book::John => ("JHN", "John"),
            Book::Acts => ("ACT", "Acts"),
            Book::Romans => ("ROM", "Romans"),
            Book::FirstCorinthians => ("1CO", "1 Corinthians"),
            Book::SecondCorinthians => ("2CO", "2 Corinthians"),
            Book::Galatians => ("GAL", "Galatians"),
            Book::Ephesians => ("EPH", "Ephesians"),
            Book::Philippians => ("PHP", "Philippians"),
            Book::Colossians => ("COL", "Colossians"),
            Book::FirstThessalonians => ("1TH", "1 Thessalonians"),
            Book::SecondThessalonians => ("2TH", "2 Thessalonians"),
            Book::FirstTimothy => ("1TI", "1 Timothy"),
            Book::SecondTimothy => ("2TI", "2 Timothy"),
            Book::Titus => ("TIT", "Titus"),
            Book::Philemon => ("PHM", "Philemon"),
            Book::Hebrews => ("HEB", "Hebrews"),
            Book::James => ("JAS", "James"),
            Book::FirstPeter => ("1PE", "1 Peter"),
            Book::SecondPeter => ("2PE", "2 Peter"),
            Book::FirstJohn => ("1JN", "1 John"),
            Book::SecondJohn => ("2JN", "2 John"),
            Book::ThirdJohn => ("3JN", "3 John"),
            Book::Jude => ("JUD", "Jude"),
            Book::Revelation => ("REV", "Revelation"),
        };
        BookInfo { code, english_name }
    }

    /// Stable external code of this book.
    pub fn code(&self) -> &'static str {
        self.info().code
    }

    /// English display name of this book.
    pub fn english_name(&self) -> &'static str {
        self.info().english_name
    }

    /// Look up a book by its external code, case-insensitively.
    pub fn from_code(code: &str) -> BibleResult<Book> {
        let needle = code.trim().to_ascii_uppercase();
        Book::ALL
            .iter()
            .copied()
            .find(|b| b.code() == needle)
            .ok_or_else(|| BibleError::unknown_book(code))
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
