//! Data-access layer of the trivia API.
//!
//! Every query and mutation lives on a zero-sized struct in [`entities`]
//! (e.g. [`entities::QuestionQuery`], [`entities::QuestionMutation`]) and operates on
//! a borrowed [`sqlx::PgConnection`], so callers decide whether it runs
//! inside a transaction or not.

use std::borrow::Cow;

use thiserror::Error;

#[macro_use]
pub(crate) mod macros;

pub mod entities;



#[derive(Debug, Error)]
pub enum QueryError {
    #[error("sqlx error")]
    SqlxError {
        #[from]
        #[source]
        error: sqlx::Error,
    },

    #[error("database inconsistency: {}", .problem)]
    DatabaseInconsistencyError { problem: Cow<'static, str> },
}

impl QueryError {
    pub fn database_inconsistency<R>(problem: R) -> Self
    where
        R: Into<Cow<'static, str>>,
    {
        Self::DatabaseInconsistencyError {
            problem: problem.into(),
        }
    }
}



pub type QueryResult<R, E = QueryError> = Result<R, E>;


/// Converts an internal (row-level) model into its strongly-typed public counterpart.
pub trait IntoExternalModel {
    type ExternalModel;

    fn into_external_model(self) -> Self::ExternalModel;
}
