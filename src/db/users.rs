use postgres::Client;
use tracing::debug;

use super::error::{DbError, Result};
use crate::models::{NewUser, Role};

/// Register a new user through the `new_user_insert` routine. The routine
/// owns id assignment and any validation beyond what the prompts coerce.
pub fn create_user(client: &mut Client, user: &NewUser) -> Result<()> {
    debug!(email = %user.email, role = %user.role, "inserting user");

    let role = user.role.as_str();
    client.execute(
        "SELECT new_user_insert($1, $2, $3, $4, $5)",
        &[
            &user.first_name,
            &user.last_name,
            &user.email,
            &user.password,
            &role,
        ],
    )?;
    Ok(())
}

/// Rewrite the email and role of an existing user with a direct statement.
/// We surface a dedicated error when nothing was updated so the menu can show
/// a friendly message instead of silently continuing.
pub fn update_user(client: &mut Client, id: i32, email: &str, role: Role) -> Result<()> {
    debug!(id, "updating user");

    let role = role.as_str();
    let updated = client.execute(
        "UPDATE users SET email = $1, role = $2 WHERE id = $3",
        &[&email, &role, &id],
    )?;

    if updated == 0 {
        Err(DbError::UserNotFound(id))
    } else {
        Ok(())
    }
}

/// Remove a user row with a direct statement. Triggers on the server cascade
/// the cleanup of club memberships, so no second statement is needed here.
pub fn delete_user(client: &mut Client, id: i32) -> Result<()> {
    debug!(id, "deleting user");

    let deleted = client.execute("DELETE FROM users WHERE id = $1", &[&id])?;

    if deleted == 0 {
        Err(DbError::UserNotFound(id))
    } else {
        Ok(())
    }
}
