//! Error type shared by the persistence functions. Connection setup gets its
//! own variant because the menu aborts an action before issuing any statement
//! when the server is unreachable.

use thiserror::Error;

/// Failure modes of a single database action.
#[derive(Debug, Error)]
pub enum DbError {
    /// The connection could not be established at all.
    #[error("could not connect to the database: {0}")]
    Connect(#[source] postgres::Error),

    /// A statement was issued and the server rejected it.
    #[error("{0}")]
    Sql(#[from] postgres::Error),

    /// An update or delete matched zero rows.
    #[error("no user found with id {0}")]
    UserNotFound(i32),
}

/// Convenience alias for results with [`DbError`].
pub type Result<T> = std::result::Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_not_found_names_the_id() {
        let err = DbError::UserNotFound(42);
        assert_eq!(err.to_string(), "no user found with id 42");
    }
}
