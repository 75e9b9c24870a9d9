use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};
use std::time::Duration;
use trivia_configuration::DatabaseConfiguration;

pub mod api;
pub mod cli;
pub mod logging;
pub mod state;

#[cfg(feature = "with_test_facilities")]
pub mod testing;


fn database_connect_options(database_configuration: &DatabaseConfiguration) -> PgConnectOptions {
    let mut connection_options = PgConnectOptions::new_without_pgpass()
        .application_name(&format!(
            "trivia-api_v{}",
            env!("CARGO_PKG_VERSION")
        ))
        .statement_cache_capacity(database_configuration.statement_cache_capacity)
        .host(&database_configuration.host)
        .port(database_configuration.port)
        .username(&database_configuration.username)
        .database(&database_configuration.database_name);

    if let Some(password) = &database_configuration.password {
        connection_options = connection_options.password(password.as_str());
    }

    connection_options
}

fn database_pool_options(database_configuration: &DatabaseConfiguration) -> PgPoolOptions {
    PgPoolOptions::new()
        .idle_timeout(Some(Duration::from_secs(60 * 20)))
        .max_lifetime(Some(Duration::from_secs(60 * 60)))
        .min_connections(1)
        .max_connections(database_configuration.max_connections)
        .acquire_timeout(database_configuration.acquire_timeout)
        .test_before_acquire(true)
}


/// Connects to the database, failing if the first connection can not be established.
pub async fn establish_database_connection_pool(
    database_configuration: &DatabaseConfiguration,
) -> Result<PgPool, sqlx::Error> {
    database_pool_options(database_configuration)
        .connect_with(database_connect_options(database_configuration))
        .await
}

/// Builds a connection pool that only connects once a connection is first requested.
pub fn lazy_database_connection_pool(database_configuration: &DatabaseConfiguration) -> PgPool {
    database_pool_options(database_configuration)
        .min_connections(0)
        .connect_lazy_with(database_connect_options(database_configuration))
}
