use postgres::Client;
use tracing::debug;

use super::error::Result;

/// Link a user to a club through the `membership_insert` routine. Both ids
/// are validated on the server, including duplicate membership checks.
pub fn add_membership(client: &mut Client, club_id: i32, user_id: i32) -> Result<()> {
    debug!(club_id, user_id, "inserting club membership");

    client.execute("SELECT membership_insert($1, $2)", &[&club_id, &user_id])?;
    Ok(())
}
