//! Application-wide state (shared between endpoint functions).

use actix_web::web::Data;
use sqlx::{pool::PoolConnection, PgPool, Postgres};
use thiserror::Error;
use trivia_configuration::Configuration;

use crate::establish_database_connection_pool;



#[derive(Debug, Error)]
pub enum ApplicationStateError {
    #[error("unable to connect to database")]
    UnableToConnectToDatabase {
        #[from]
        #[source]
        error: sqlx::Error,
    },
}



/// Central application state.
///
/// Use [`ApplicationState`] instead as it already wraps this struct
/// in [`actix_web::web::Data`]!
///
/// Nothing in here is mutable: every request re-queries the database.
pub struct ApplicationStateInner {
    /// The configuration that this server was loaded with.
    #[allow(unused)]
    pub configuration: Configuration,

    /// PostgreSQL database connection pool.
    pub database_pool: PgPool,
}

impl ApplicationStateInner {
    pub async fn new(configuration: Configuration) -> Result<Self, ApplicationStateError> {
        let database_pool = establish_database_connection_pool(&configuration.database).await?;

        Ok(Self {
            configuration,
            database_pool,
        })
    }

    pub fn with_database_pool(configuration: Configuration, database_pool: PgPool) -> Self {
        Self {
            configuration,
            database_pool,
        }
    }

    pub async fn acquire_database_connection(&self) -> Result<PoolConnection<Postgres>, sqlx::Error> {
        self.database_pool.acquire().await
    }
}


/// Central application state, wrapped in an actix [`Data`] wrapper.
///
/// This enables usage in endpoint functions.
/// See <https://actix.rs/docs/application#state> for more information.
///
/// # Examples
/// ```no_run
/// # use trivia::api::errors::EndpointResult;
/// # use trivia::state::ApplicationState;
/// pub async fn some_endpoint(
///     state: ApplicationState,
/// ) -> EndpointResult {
///     let mut database_connection = state.acquire_database_connection().await?;
///     // ...
///     # todo!();
/// }
/// ```
pub type ApplicationState = Data<ApplicationStateInner>;
