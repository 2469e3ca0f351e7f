use postgres::{Client, Config, NoTls};
use tracing::debug;

use super::error::{DbError, Result};
use crate::config::DbConfig;

/// Open a fresh connection to the club database. Each menu action calls this
/// once and drops the client when it finishes, so there is no pooling and no
/// state shared between actions.
pub fn connect(config: &DbConfig) -> Result<Client> {
    debug!(host = %config.host, port = config.port, dbname = %config.dbname,
        "opening database connection");

    Config::new()
        .host(&config.host)
        .port(config.port)
        .dbname(&config.dbname)
        .user(&config.user)
        .password(&config.password)
        .connect(NoTls)
        .map_err(DbError::Connect)
}
