//! Domain models that mirror what the database procedures expect and return.
//! The intent is that these types stay light-weight data holders so the prompt
//! and persistence layers can focus on collecting input and issuing
//! statements. Nothing here outlives a single menu action; the database owns
//! every entity for real.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

/// Account roles recognized by the database. The column is enumerated on the
/// server side, so the client narrows free text down to the two accepted
/// values before anything travels over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Member,
    Admin,
}

impl Role {
    /// The lowercase spelling the database stores.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when prompted text is neither `member` nor `admin`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Role must be either 'member' or 'admin'.")]
pub struct ParseRoleError;

impl FromStr for Role {
    type Err = ParseRoleError;

    /// Accept the two role spellings case-insensitively, ignoring surrounding
    /// whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "member" => Ok(Role::Member),
            "admin" => Ok(Role::Admin),
            _ => Err(ParseRoleError),
        }
    }
}

/// Field bundle handed to the `new_user_insert` routine. The database assigns
/// the id and enforces email uniqueness.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Field bundle handed to the `book_insert` routine. The three ids reference
/// rows the database already knows about; the routine rejects dangling ones.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub summary: String,
    pub publish_date: NaiveDate,
    pub author_id: i32,
    pub publisher_id: i32,
    pub category_id: i32,
}

/// One row of the `book_search` result set. The routine ranks matches on the
/// server, so row order is meaningful and preserved as-is.
#[derive(Debug, Clone)]
pub struct BookMatch {
    pub id: i32,
    pub title: String,
    pub author_first_name: String,
    pub author_last_name: String,
}

impl BookMatch {
    /// Compose the author's full name, tolerating a blank half so partial
    /// records still print sensibly.
    pub fn author(&self) -> String {
        let first = self.author_first_name.trim();
        let last = self.author_last_name.trim();
        if first.is_empty() {
            last.to_string()
        } else if last.is_empty() {
            first.to_string()
        } else {
            format!("{first} {last}")
        }
    }
}
