use std::time::Duration;

use serde::Deserialize;

use crate::traits::TryResolve;
use crate::DatabaseConfigurationError;


const DEFAULT_STATEMENT_CACHE_CAPACITY: usize = 200;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_ACQUIRE_TIMEOUT_SECONDS: u64 = 10;


#[derive(Deserialize, Debug, Clone)]
pub(crate) struct UnresolvedDatabaseConfiguration {
    host: String,

    port: u16,

    username: String,

    password: Option<String>,

    database_name: String,

    statement_cache_capacity: Option<usize>,

    max_connections: Option<u32>,

    acquire_timeout_seconds: Option<u64>,
}


/// PostgreSQL-related configuration.
#[derive(Debug, Clone)]
pub struct DatabaseConfiguration {
    /// Host of the database.
    pub host: String,

    /// Port the database is listening at.
    pub port: u16,

    /// Login username.
    pub username: String,

    /// Login password.
    pub password: Option<String>,

    /// Database name.
    pub database_name: String,

    /// Capacity of the per-connection prepared statement cache.
    pub statement_cache_capacity: usize,

    /// Upper bound on the number of pooled connections.
    pub max_connections: u32,

    /// How long a request may wait for a pooled connection before failing.
    pub acquire_timeout: Duration,
}

impl TryResolve for UnresolvedDatabaseConfiguration {
    type Resolved = DatabaseConfiguration;
    type Error = DatabaseConfigurationError;

    fn try_resolve(self) -> Result<Self::Resolved, Self::Error> {
        let max_connections = self.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS);
        if max_connections == 0 {
            return Err(DatabaseConfigurationError::ZeroMaxConnections);
        }

        let acquire_timeout_seconds = self
            .acquire_timeout_seconds
            .unwrap_or(DEFAULT_ACQUIRE_TIMEOUT_SECONDS);
        if acquire_timeout_seconds == 0 {
            return Err(DatabaseConfigurationError::ZeroAcquireTimeout);
        }

        Ok(DatabaseConfiguration {
            host: self.host,
            port: self.port,
            username: self.username,
            password: self.password,
            database_name: self.database_name,
            statement_cache_capacity: self
                .statement_cache_capacity
                .unwrap_or(DEFAULT_STATEMENT_CACHE_CAPACITY),
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_seconds),
        })
    }
}
