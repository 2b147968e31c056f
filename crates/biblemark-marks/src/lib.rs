//! biblemark-marks
//!
//! User marks over biblical references: a mark couples an owning user, an
//! optional highlight color, an optional note, and a non-empty set of marked
//! verses. Marks reduce to `biblemark_core::Reference` values for citation
//! rendering.
//!
//! Like the core, this crate holds pure value objects only. Persistence,
//! pagination, authentication, and passage-text enrichment are external
//! collaborators.

pub mod mark;
pub mod user;

pub use crate::mark::{HighlightColor, Mark, MarkError, MarkResult, MarkedVerse, MAX_NOTE_LENGTH};
pub use crate::user::User;
