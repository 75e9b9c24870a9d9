use sqlx::PgConnection;
use trivia_core::ids::{CategoryId, QuestionId};

use super::QuestionModel;
use crate::{IntoExternalModel, QueryError, QueryResult};



/// Values of a question that is about to be inserted.
///
/// Any field may be missing, in which case it is stored as `NULL`.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<CategoryId>,
    pub difficulty: Option<i32>,
}



pub struct QuestionMutation;

impl QuestionMutation {
    pub async fn create(
        database_connection: &mut PgConnection,
        new_question: NewQuestion,
    ) -> QueryResult<QuestionModel> {
        let newly_created_question = sqlx::query_as::<_, super::InternalQuestionModel>(
            "INSERT INTO questions \
                (question, answer, category, difficulty) \
                VALUES ($1, $2, $3, $4) \
                RETURNING \
                    id, question, answer, category, difficulty",
        )
        .bind(new_question.question)
        .bind(new_question.answer)
        .bind(new_question.category.map(CategoryId::into_inner))
        .bind(new_question.difficulty)
        .fetch_one(database_connection)
        .await?;

        Ok(newly_created_question.into_external_model())
    }

    /// Deletes a question, returning whether a row was removed.
    pub async fn delete(
        database_connection: &mut PgConnection,
        question_id: QuestionId,
    ) -> QueryResult<bool> {
        let query_result = sqlx::query(
            "DELETE FROM questions \
                WHERE id = $1",
        )
        .bind(question_id.into_inner())
        .execute(database_connection)
        .await?;


        if query_result.rows_affected() > 1 {
            return Err(QueryError::database_inconsistency(
                "attempted to delete a question by ID, but more than one row matched",
            ));
        }

        Ok(query_result.rows_affected() == 1)
    }
}
