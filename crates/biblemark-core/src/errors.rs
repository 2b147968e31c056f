//! Error types for biblemark-core.
//!
//! Every failure in this crate is a local validation failure surfaced
//! synchronously to the immediate caller; nothing is transient or retriable.
//! The crate never logs and never produces user-facing text. Presentation
//! layers translate these variants into whatever their surface needs.

use crate::book::Book;

/// Result alias used across the crate.
pub type BibleResult<T> = Result<T, BibleError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BibleError {
    /// Malformed verse coordinates: empty or non-numeric chapter id, or a
    /// verse number below 1.
    #[error("invalid verse: {0}")]
    InvalidVerse(String),

    /// Ordering attempted between verses of two different versions.
    /// Cross-version order is undefined by design; the formatter handles
    /// version transitions explicitly instead.
    #[error("cannot compare verses across versions [{left}] and [{right}]")]
    IncomparableVersions { left: String, right: String },

    /// Interval endpoints from different versions, or left after right.
    #[error("invalid interval: {0}")]
    InvalidInterval(String),

    /// A reference cannot be built from zero verses.
    #[error("reference without verses")]
    EmptyReference,

    /// No entry for this book code in the catalog or the supplied structure.
    #[error("unknown book: {code}")]
    UnknownBook { code: String },

    /// The book exists in the structure but the chapter does not.
    #[error("chapter {chapter} of {book} not present in version structure")]
    ChapterNotInStructure { book: Book, chapter: u32 },

    /// Version structure metadata failed construction-time validation.
    #[error("invalid version structure: {0}")]
    InvalidStructure(String),

    /// Version metadata failed construction-time validation.
    #[error("invalid version: {0}")]
    InvalidVersion(String),
}

impl BibleError {
    pub fn invalid_verse(msg: impl Into<String>) -> Self {
        BibleError::InvalidVerse(msg.into())
    }

    pub fn invalid_interval(msg: impl Into<String>) -> Self {
        BibleError::InvalidInterval(msg.into())
    }

    pub fn invalid_structure(msg: impl Into<String>) -> Self {
        BibleError::InvalidStructure(msg.into())
    }

    pub fn invalid_version(msg: impl Into<String>) -> Self {
        BibleError::InvalidVersion(msg.into())
    }

    pub fn unknown_book(code: impl Into<String>) -> Self {
        BibleError::UnknownBook { code: code.into() }
    }
}
