//! One handler per menu action. Every handler follows the same shape: prompt
//! the fields, coerce them, open a connection, run the single statement, and
//! print the outcome. Database and coercion failures are printed and logged
//! but never escape, so the menu loop keeps running; only stream failures
//! bubble up as fatal.

use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::error;

use super::forms::{BookForm, MembershipForm, UserDeleteForm, UserForm, UserUpdateForm};
use super::helpers::prompt_line;
use super::screens::render_search_results;
use crate::config::DbConfig;
use crate::db::{self, DbError};

/// Print a failure to the user and record it in the log.
fn report<W: Write>(output: &mut W, err: &dyn Display) -> Result<()> {
    error!("action failed: {err}");
    writeln!(output, "Error: {err}").context("failed to write error message")?;
    Ok(())
}

/// Action 1: collect the new user fields and hand them to the insert routine.
pub(crate) fn add_user<R: BufRead, W: Write>(
    config: &DbConfig,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let form = UserForm::prompt(input, output)?;
    let user = match form.parse_inputs() {
        Ok(user) => user,
        Err(err) => return report(output, &err),
    };

    let mut client = match db::connect(config) {
        Ok(client) => client,
        Err(err) => return report(output, &err),
    };

    match db::create_user(&mut client, &user) {
        Ok(()) => writeln!(output, "New user added successfully.")?,
        Err(err) => report(output, &err)?,
    }
    Ok(())
}

/// Action 2: run the search routine and print the ranked matches.
pub(crate) fn search_books<R: BufRead, W: Write>(
    config: &DbConfig,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let term = prompt_line(input, output, "Enter book or author name to search: ")?;

    let mut client = match db::connect(config) {
        Ok(client) => client,
        Err(err) => return report(output, &err),
    };

    match db::search_books(&mut client, &term) {
        Ok(matches) => render_search_results(output, &matches)?,
        Err(err) => report(output, &err)?,
    }
    Ok(())
}

/// Action 3: collect the new book fields and hand them to the insert routine.
pub(crate) fn add_book<R: BufRead, W: Write>(
    config: &DbConfig,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let form = BookForm::prompt(input, output)?;
    let book = match form.parse_inputs() {
        Ok(book) => book,
        Err(err) => return report(output, &err),
    };

    let mut client = match db::connect(config) {
        Ok(client) => client,
        Err(err) => return report(output, &err),
    };

    match db::create_book(&mut client, &book) {
        Ok(()) => writeln!(output, "New book added successfully.")?,
        Err(err) => report(output, &err)?,
    }
    Ok(())
}

/// Action 4: link a user to a club through the membership routine.
pub(crate) fn add_membership<R: BufRead, W: Write>(
    config: &DbConfig,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let form = MembershipForm::prompt(input, output)?;
    let (club_id, user_id) = match form.parse_inputs() {
        Ok(ids) => ids,
        Err(err) => return report(output, &err),
    };

    let mut client = match db::connect(config) {
        Ok(client) => client,
        Err(err) => return report(output, &err),
    };

    match db::add_membership(&mut client, club_id, user_id) {
        Ok(()) => writeln!(output, "User {user_id} added to club {club_id}.")?,
        Err(err) => report(output, &err)?,
    }
    Ok(())
}

/// Action 5: rewrite a user's email and role with a direct statement.
pub(crate) fn update_user<R: BufRead, W: Write>(
    config: &DbConfig,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let form = UserUpdateForm::prompt(input, output)?;
    let (user_id, email, role) = match form.parse_inputs() {
        Ok(fields) => fields,
        Err(err) => return report(output, &err),
    };

    let mut client = match db::connect(config) {
        Ok(client) => client,
        Err(err) => return report(output, &err),
    };

    match db::update_user(&mut client, user_id, &email, role) {
        Ok(()) => writeln!(output, "User updated successfully.")?,
        Err(DbError::UserNotFound(_)) => writeln!(output, "No user found with that ID.")?,
        Err(err) => report(output, &err)?,
    }
    Ok(())
}

/// Action 6: delete a user with a direct statement. Membership cleanup is
/// cascaded by triggers on the server.
pub(crate) fn delete_user<R: BufRead, W: Write>(
    config: &DbConfig,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let form = UserDeleteForm::prompt(input, output)?;
    let user_id = match form.parse_inputs() {
        Ok(id) => id,
        Err(err) => return report(output, &err),
    };

    let mut client = match db::connect(config) {
        Ok(client) => client,
        Err(err) => return report(output, &err),
    };

    match db::delete_user(&mut client, user_id) {
        Ok(()) => writeln!(output, "User deleted successfully.")?,
        Err(DbError::UserNotFound(_)) => writeln!(output, "No user found with that ID.")?,
        Err(err) => report(output, &err)?,
    }
    Ok(())
}
