//! Rendering for the menu banner and result sets. Kept apart from the action
//! handlers so the exact output text can be asserted in tests.

use std::io::Write;

use anyhow::{Context, Result};

use crate::models::BookMatch;

/// The numbered entries shown each time around the loop, in dispatch order.
const MENU_ENTRIES: [&str; 7] = [
    "1. Add New User",
    "2. Search Books",
    "3. Add New Book",
    "4. Add Club Membership",
    "5. Update User",
    "6. Delete User",
    "7. Exit",
];

/// Write the menu banner and the numbered entries.
pub(crate) fn render_menu<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "\n--- Book Club Manager ---").context("failed to write menu")?;
    for entry in MENU_ENTRIES {
        writeln!(output, "{entry}").context("failed to write menu")?;
    }
    Ok(())
}

/// Print the book-search result set, one line per match, preserving the order
/// the search routine ranked them in.
pub(crate) fn render_search_results<W: Write>(
    output: &mut W,
    matches: &[BookMatch],
) -> Result<()> {
    writeln!(output, "Search Results:").context("failed to write search results")?;

    if matches.is_empty() {
        writeln!(output, "No book found with that term.")
            .context("failed to write search results")?;
        return Ok(());
    }

    for hit in matches {
        writeln!(
            output,
            "Book ID: {}, Title: {}, Author: {}",
            hit.id,
            hit.title,
            hit.author()
        )
        .context("failed to write search results")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_lists_all_seven_entries() {
        let mut output = Vec::new();
        render_menu(&mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("--- Book Club Manager ---"));
        for entry in MENU_ENTRIES {
            assert!(text.contains(entry), "missing menu entry: {entry}");
        }
    }

    #[test]
    fn empty_search_results_print_placeholder() {
        let mut output = Vec::new();
        render_search_results(&mut output, &[]).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("Search Results:"));
        assert!(text.contains("No book found with that term."));
    }

    #[test]
    fn search_results_print_one_line_per_match() {
        let matches = vec![
            BookMatch {
                id: 4,
                title: "Dune".to_string(),
                author_first_name: "Frank".to_string(),
                author_last_name: "Herbert".to_string(),
            },
            BookMatch {
                id: 9,
                title: "Dune Messiah".to_string(),
                author_first_name: "Frank".to_string(),
                author_last_name: "Herbert".to_string(),
            },
        ];

        let mut output = Vec::new();
        render_search_results(&mut output, &matches).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("Book ID: 4, Title: Dune, Author: Frank Herbert"));
        assert!(text.contains("Book ID: 9, Title: Dune Messiah, Author: Frank Herbert"));
    }
}
