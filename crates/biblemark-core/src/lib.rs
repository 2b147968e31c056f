//! biblemark-core
//!
//! The biblical reference engine:
//! - a closed catalog of canonical books with stable external codes
//! - per-version structure metadata (book order, chapter and verse counts)
//! - comparable verse identifiers with an explicit, version-scoped total order
//! - maximal contiguous verse intervals and their boundary classification
//! - reduction of arbitrary verse lists to minimal interval sets
//! - citation rendering with configurable delimiters
//!
//! The crate is pure and synchronous: no I/O, no logging, no shared mutable
//! state. All entities are immutable value objects after construction, so
//! independent references can be built and formatted concurrently without
//! coordination. Higher layers (web, persistence, text retrieval) consume
//! this crate and own everything side-effectful.

pub mod book;
pub mod errors;
pub mod format;
pub mod interval;
pub mod reference;
pub mod structure;
pub mod verse;
pub mod version;

pub use crate::errors::{BibleError, BibleResult};

/// Convenience re-exports.
pub mod prelude {
    pub use crate::book::{Book, BookInfo};
    pub use crate::format::{format, format_interval, format_numbering, Delimiters};
    pub use crate::interval::{Interval, IntervalCase};
    pub use crate::reference::Reference;
    pub use crate::structure::{BookStructure, VersionStructure};
    pub use crate::verse::{ChapterId, Verse};
    pub use crate::version::Version;
    pub use crate::{BibleError, BibleResult};
}
