use std::io::{BufRead, Write};

use anyhow::Result;

use super::actions;
use super::helpers::prompt_line;
use super::screens::render_menu;
use crate::config::DbConfig;

/// The seven menu actions, in the order they are listed on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuChoice {
    AddUser,
    SearchBooks,
    AddBook,
    AddMembership,
    UpdateUser,
    DeleteUser,
    Exit,
}

impl MenuChoice {
    /// Map one line of input to a menu action. Anything other than the digits
    /// 1 through 7 (surrounding whitespace aside) is rejected so the loop can
    /// re-prompt.
    pub(crate) fn parse(selection: &str) -> Option<Self> {
        match selection.trim() {
            "1" => Some(MenuChoice::AddUser),
            "2" => Some(MenuChoice::SearchBooks),
            "3" => Some(MenuChoice::AddBook),
            "4" => Some(MenuChoice::AddMembership),
            "5" => Some(MenuChoice::UpdateUser),
            "6" => Some(MenuChoice::DeleteUser),
            "7" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Holds the pieces every menu action needs: the connection settings plus the
/// input and output streams. Generic over the streams so tests can drive the
/// loop with scripted input and capture what it prints.
pub struct App<R, W> {
    config: DbConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(config: DbConfig, input: R, output: W) -> Self {
        Self {
            config,
            input,
            output,
        }
    }

    /// Give back the output stream, mainly so tests can inspect what the loop
    /// printed.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Drive the menu loop until the user selects exit. Each action is
/// self-contained: it prompts its own fields, opens its own connection, and
/// prints its own outcome, so a failed action never affects the next one.
pub fn run_app<R: BufRead, W: Write>(app: &mut App<R, W>) -> Result<()> {
    loop {
        render_menu(&mut app.output)?;
        let selection = prompt_line(&mut app.input, &mut app.output, "Please select an option: ")?;

        let Some(choice) = MenuChoice::parse(&selection) else {
            writeln!(app.output, "Invalid choice, please try again.")?;
            continue;
        };

        match choice {
            MenuChoice::AddUser => actions::add_user(&app.config, &mut app.input, &mut app.output)?,
            MenuChoice::SearchBooks => {
                actions::search_books(&app.config, &mut app.input, &mut app.output)?
            }
            MenuChoice::AddBook => actions::add_book(&app.config, &mut app.input, &mut app.output)?,
            MenuChoice::AddMembership => {
                actions::add_membership(&app.config, &mut app.input, &mut app.output)?
            }
            MenuChoice::UpdateUser => {
                actions::update_user(&app.config, &mut app.input, &mut app.output)?
            }
            MenuChoice::DeleteUser => {
                actions::delete_user(&app.config, &mut app.input, &mut app.output)?
            }
            MenuChoice::Exit => {
                writeln!(app.output, "Exiting the application. Goodbye!")?;
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run_script(script: &str) -> String {
        let mut app = App::new(
            DbConfig::default(),
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
        );
        run_app(&mut app).expect("menu loop failed");
        String::from_utf8(app.into_output()).expect("output was not utf-8")
    }

    #[test]
    fn parse_accepts_all_seven_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddUser));
        assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::SearchBooks));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::AddBook));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::AddMembership));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::UpdateUser));
        assert_eq!(MenuChoice::parse("6"), Some(MenuChoice::DeleteUser));
        assert_eq!(MenuChoice::parse("7"), Some(MenuChoice::Exit));
    }

    #[test]
    fn parse_tolerates_surrounding_whitespace() {
        assert_eq!(MenuChoice::parse(" 7 "), Some(MenuChoice::Exit));
    }

    #[test]
    fn parse_rejects_out_of_range_and_text() {
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("8"), None);
        assert_eq!(MenuChoice::parse("exit"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn exit_terminates_the_loop() {
        let output = run_script("7\n");
        assert!(output.contains("Exiting the application. Goodbye!"));
        assert_eq!(output.matches("--- Book Club Manager ---").count(), 1);
    }

    #[test]
    fn invalid_selection_reprompts_without_crashing() {
        let output = run_script("0\nnine\n7\n");
        assert_eq!(
            output.matches("Invalid choice, please try again.").count(),
            2
        );
        assert_eq!(output.matches("Please select an option: ").count(), 3);
        assert!(output.contains("Goodbye!"));
    }
}
