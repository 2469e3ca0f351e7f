use postgres::Client;
use tracing::debug;

use super::error::Result;
use crate::models::{BookMatch, NewBook};

/// Run the `book_search` routine against a free-text term. Matching and
/// ranking happen on the server; rows come back already ordered.
pub fn search_books(client: &mut Client, term: &str) -> Result<Vec<BookMatch>> {
    debug!(term, "searching books");

    let rows = client.query("SELECT * FROM book_search($1)", &[&term])?;

    let matches = rows
        .iter()
        .map(|row| BookMatch {
            id: row.get(0),
            title: row.get(1),
            author_first_name: row.get(2),
            author_last_name: row.get(3),
        })
        .collect();

    Ok(matches)
}

/// Register a new book through the `book_insert` routine. Author, publisher,
/// and category ids must already exist; the routine rejects dangling ones.
pub fn create_book(client: &mut Client, book: &NewBook) -> Result<()> {
    debug!(title = %book.title, "inserting book");

    client.execute(
        "SELECT book_insert($1, $2, $3, $4, $5, $6)",
        &[
            &book.title,
            &book.summary,
            &book.publish_date,
            &book.author_id,
            &book.publisher_id,
            &book.category_id,
        ],
    )?;
    Ok(())
}
