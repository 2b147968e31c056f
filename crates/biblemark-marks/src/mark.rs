//! Marks: highlights and notes over sets of verses.
//!
//! A mark is valid only as a whole, so construction validates everything and
//! the struct is immutable afterwards. Adding a verse to a mark rebuilds the
//! mark from the extended verse list rather than appending in place; the
//! derived reference is therefore always re-merged and maximal.

use serde::{Deserialize, Serialize};

use biblemark_core::reference::Reference;
use biblemark_core::verse::Verse;
use biblemark_core::BibleError;

use crate::user::User;

/// Longest allowed note text, in characters.
pub const MAX_NOTE_LENGTH: usize = 1024;

pub type MarkResult<T> = Result<T, MarkError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkError {
    /// Username with characters outside letters, digits and underscores.
    #[error("invalid username: [{0}]")]
    InvalidUsername(String),

    /// Empty or blank user display name.
    #[error("user display name must be non-empty")]
    InvalidUserName,

    /// Highlight color that is not a 6-digit hex code.
    #[error("invalid highlight color: [{0}]")]
    InvalidColor(String),

    /// Blank note text.
    #[error("note text must be non-blank")]
    BlankNote,

    /// Note text over [`MAX_NOTE_LENGTH`] characters.
    #[error("note text of {len} characters exceeds the limit of {max}")]
    NoteTooLong { len: usize, max: usize },

    /// A mark must cover at least one verse.
    #[error("mark without marked verses")]
    EmptyMark,

    /// Failure from the underlying reference engine.
    #[error(transparent)]
    Bible(#[from] BibleError),
}

/// A validated highlight color: six hex digits, optionally prefixed with
/// `#`, case-insensitive on input. Stored normalized as lowercase `rrggbb`.
///
/// Travels over the wire as the normalized hex string and re-parses on the
/// way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct HighlightColor(String);

impl From<HighlightColor> for String {
    fn from(color: HighlightColor) -> String {
        color.0
    }
}

impl TryFrom<String> for HighlightColor {
    type Error = MarkError;

    fn try_from(raw: String) -> MarkResult<Self> {
        HighlightColor::parse(&raw)
    }
}

impl HighlightColor {
    pub fn parse(input: &str) -> MarkResult<Self> {
        let hex = input.strip_prefix('#').unwrap_or(input);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(MarkError::InvalidColor(input.to_string()));
        }
        Ok(Self(hex.to_ascii_lowercase()))
    }

    /// The normalized `rrggbb` form, without the leading `#`.
    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HighlightColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One verse covered by a mark, with a per-verse visibility flag (hidden
/// marked verses survive in storage but are excluded from chapter views).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkedVerse {
    verse: Verse,
    visible: bool,
}

impl MarkedVerse {
    pub fn new(verse: Verse, visible: bool) -> Self {
        Self { verse, visible }
    }

    /// A visible marked verse, the common case.
    pub fn visible(verse: Verse) -> Self {
        Self::new(verse, true)
    }

    pub fn verse(&self) -> &Verse {
        &self.verse
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// A user's highlight and/or note over a set of verses.
///
/// Deserialization runs through [`Mark::new`], so deserialized marks obey
/// the same note and verse-list invariants as constructed ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MarkRepr")]
pub struct Mark {
    user: User,
    color: Option<HighlightColor>,
    note: Option<String>,
    marked_verses: Vec<MarkedVerse>,
}

#[derive(Deserialize)]
struct MarkRepr {
    user: User,
    color: Option<HighlightColor>,
    note: Option<String>,
    marked_verses: Vec<MarkedVerse>,
}

impl TryFrom<MarkRepr> for Mark {
    type Error = MarkError;

    fn try_from(repr: MarkRepr) -> MarkResult<Self> {
        Mark::new(repr.user, repr.color, repr.note, repr.marked_verses)
    }
}

impl Mark {
    /// Build a mark. The note, when present, must be non-blank and at most
    /// [`MAX_NOTE_LENGTH`] characters; at least one marked verse is required.
    pub fn new(
        user: User,
        color: Option<HighlightColor>,
        note: Option<String>,
        marked_verses: Vec<MarkedVerse>,
    ) -> MarkResult<Self> {
        if let Some(text) = &note {
            if text.trim().is_empty() {
                return Err(MarkError::BlankNote);
            }
            let len = text.chars().count();
            if len > MAX_NOTE_LENGTH {
                return Err(MarkError::NoteTooLong {
                    len,
                    max: MAX_NOTE_LENGTH,
                });
            }
        }
        if marked_verses.is_empty() {
            return Err(MarkError::EmptyMark);
        }

        Ok(Self {
            user,
            color,
            note,
            marked_verses,
        })
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn color(&self) -> Option<&HighlightColor> {
        self.color.as_ref()
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn marked_verses(&self) -> &[MarkedVerse] {
        &self.marked_verses
    }

    /// Rebuild this mark with one more marked verse.
    ///
    /// Consumes the mark and re-runs full validation, so every observable
    /// mark is a valid one. The verse list keeps its given order; callers
    /// that want a canonical reference must keep it ascending, as with
    /// [`Reference::build`].
    pub fn with_marked_verse(self, marked_verse: MarkedVerse) -> MarkResult<Self> {
        let mut marked_verses = self.marked_verses;
        marked_verses.push(marked_verse);
        Self::new(self.user, self.color, self.note, marked_verses)
    }

    /// Reduce the marked verses to a reference for citation rendering.
    pub fn to_reference(&self) -> MarkResult<Reference> {
        let verses = self
            .marked_verses
            .iter()
            .map(|mv| mv.verse().clone())
            .collect();
        Ok(Reference::build(verses)?)
    }
}
