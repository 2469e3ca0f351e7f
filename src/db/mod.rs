//! Persistence module split across logical submodules. Every function here
//! issues exactly one parameterized statement against the club database,
//! which keeps the substance of the domain logic (identity generation, search
//! ranking, cascading deletes) inside the stored procedures and triggers on
//! the server.

mod books;
mod connection;
mod error;
mod memberships;
mod users;

pub use books::{create_book, search_books};
pub use connection::connect;
pub use error::{DbError, Result};
pub use memberships::add_membership;
pub use users::{create_user, delete_user, update_user};
