//! Bible version metadata.
//!
//! A `Version` couples the identifiers a version is known by (internal id,
//! the upstream provider's external id), its language and display name, and
//! its [`VersionStructure`]. Two versions are the same iff their internal
//! ids are equal; the remaining fields are descriptive.

use serde::{Deserialize, Serialize};

use crate::errors::{BibleError, BibleResult};
use crate::structure::VersionStructure;

/// Deserialization runs through [`Version::new`], so the non-empty-field
/// invariants hold for deserialized values too.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "VersionRepr")]
pub struct Version {
    internal_id: String,
    external_id: String,
    lang: String,
    name: String,
    disabled: bool,
    structure: VersionStructure,
}

#[derive(Deserialize)]
struct VersionRepr {
    internal_id: String,
    external_id: String,
    lang: String,
    name: String,
    disabled: bool,
    structure: VersionStructure,
}

impl TryFrom<VersionRepr> for Version {
    type Error = BibleError;

    fn try_from(repr: VersionRepr) -> BibleResult<Self> {
        Version::new(
            repr.internal_id,
            repr.external_id,
            repr.lang,
            repr.name,
            repr.disabled,
            repr.structure,
        )
    }
}

impl Version {
    /// Build a version, validating that every identifier field is non-empty.
    pub fn new(
        internal_id: impl Into<String>,
        external_id: impl Into<String>,
        lang: impl Into<String>,
        name: impl Into<String>,
        disabled: bool,
        structure: VersionStructure,
    ) -> BibleResult<Self> {
        let internal_id = internal_id.into();
        let external_id = external_id.into();
        let lang = lang.into();
        let name = name.into();

        if internal_id.is_empty() {
            return Err(BibleError::invalid_version("internal id must be non-empty"));
        }
        if external_id.is_empty() {
            return Err(BibleError::invalid_version("external id must be non-empty"));
        }
        if lang.is_empty() {
            return Err(BibleError::invalid_version("language must be non-empty"));
        }
        if name.is_empty() {
            return Err(BibleError::invalid_version("name must be non-empty"));
        }

        Ok(Self {
            internal_id,
            external_id,
            lang,
            name,
            disabled,
            structure,
        })
    }

    pub fn internal_id(&self) -> &str {
        &self.internal_id
    }

    /// Id of this version at the upstream content provider.
    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Display name, e.g. `"King James Version"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn structure(&self) -> &VersionStructure {
        &self.structure
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.internal_id == other.internal_id
    }
}

impl Eq for Version {}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.internal_id)
    }
}
