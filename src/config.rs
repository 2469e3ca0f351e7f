//! Connection settings for the PostgreSQL instance that owns the book club
//! data. The defaults match a stock local install; each field can be
//! overridden through the environment (or a `.env` file loaded by the binary)
//! so the binary never needs editing to point at another server.

use std::env;

use tracing::warn;

/// Host the defaults point at.
const DEFAULT_HOST: &str = "localhost";
/// Standard PostgreSQL port.
const DEFAULT_PORT: u16 = 5432;
/// Database that holds the club schema and its routines.
const DEFAULT_DBNAME: &str = "book_club";
/// Default login role.
const DEFAULT_USER: &str = "postgres";
/// Default password, expected to be overridden outside of local development.
const DEFAULT_PASSWORD: &str = "postgres";

/// Everything needed to open one connection. Cloned freely since each menu
/// action dials the server from scratch.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub user: String,
    pub password: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            dbname: DEFAULT_DBNAME.to_string(),
            user: DEFAULT_USER.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

impl DbConfig {
    /// Build the settings from the defaults, letting `BOOK_CLUB_DB_*`
    /// environment variables override individual fields. A port that fails to
    /// parse keeps the default rather than aborting startup.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = env::var("BOOK_CLUB_DB_HOST") {
            config.host = host;
        }
        if let Ok(port) = env::var("BOOK_CLUB_DB_PORT") {
            match port.parse::<u16>() {
                Ok(port) => config.port = port,
                Err(_) => warn!(value = %port, "ignoring unparseable BOOK_CLUB_DB_PORT"),
            }
        }
        if let Ok(dbname) = env::var("BOOK_CLUB_DB_NAME") {
            config.dbname = dbname;
        }
        if let Ok(user) = env::var("BOOK_CLUB_DB_USER") {
            config.user = user;
        }
        if let Ok(password) = env::var("BOOK_CLUB_DB_PASSWORD") {
            config.password = password;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_install() {
        let config = DbConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5432);
        assert_eq!(config.dbname, "book_club");
        assert_eq!(config.user, "postgres");
        assert_eq!(config.password, "postgres");
    }

    // The only test that touches the process environment; keeping it alone
    // avoids interference between parallel test threads.
    #[test]
    fn from_env_overrides_fields_and_keeps_bad_port() {
        env::set_var("BOOK_CLUB_DB_HOST", "db.internal");
        env::set_var("BOOK_CLUB_DB_PORT", "not-a-port");
        env::set_var("BOOK_CLUB_DB_NAME", "club_test");

        let config = DbConfig::from_env();
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 5432);
        assert_eq!(config.dbname, "club_test");
        assert_eq!(config.user, "postgres");

        env::remove_var("BOOK_CLUB_DB_HOST");
        env::remove_var("BOOK_CLUB_DB_PORT");
        env::remove_var("BOOK_CLUB_DB_NAME");
    }
}
