//! Mark-owning users.

use serde::{Deserialize, Serialize};

use crate::mark::{MarkError, MarkResult};

/// The owner of a mark. Identity is the username; `name` is the display
/// form. Credentials and storage ids live with the authentication and
/// persistence collaborators, not here.
///
/// Deserialization runs through [`User::new`], so the username and display
/// name rules hold for deserialized values too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserRepr")]
pub struct User {
    username: String,
    name: String,
}

#[derive(Deserialize)]
struct UserRepr {
    username: String,
    name: String,
}

impl TryFrom<UserRepr> for User {
    type Error = MarkError;

    fn try_from(repr: UserRepr) -> Result<Self, MarkError> {
        User::new(repr.username, repr.name)
    }
}

impl User {
    /// Build a user. The username may only contain letters, digits and
    /// underscores; the display name must be non-empty.
    pub fn new(username: impl Into<String>, name: impl Into<String>) -> MarkResult<Self> {
        let username = username.into();
        let name = name.into();

        if username.is_empty()
            || !username
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(MarkError::InvalidUsername(username));
        }
        if name.trim().is_empty() {
            return Err(MarkError::InvalidUserName);
        }

        Ok(Self { username, name })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
