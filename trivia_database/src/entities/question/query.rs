use sqlx::PgConnection;
use trivia_core::ids::{CategoryId, QuestionId};

use super::QuestionModel;
use crate::{IntoExternalModel, QueryResult};


/// A `LIMIT` / `OFFSET` window over an ordered result set.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RowWindow {
    pub limit: i64,
    pub offset: i64,
}


/// Escapes `LIKE` wildcards (and the escape character itself) in `term`
/// and wraps it in `%` so that it matches as a literal substring.
pub fn build_substring_like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');

    for character in term.chars() {
        if matches!(character, '\\' | '%' | '_') {
            pattern.push('\\');
        }

        pattern.push(character);
    }

    pattern.push('%');
    pattern
}


fn into_external_models(internal_models: Vec<super::InternalQuestionModel>) -> Vec<QuestionModel> {
    internal_models
        .into_iter()
        .map(super::InternalQuestionModel::into_external_model)
        .collect()
}



pub struct QuestionQuery;

impl QuestionQuery {
    pub async fn count(database_connection: &mut PgConnection) -> QueryResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(database_connection)
            .await?;

        Ok(count)
    }

    /// Returns a window of all questions, ordered by ascending ID.
    pub async fn get_window(
        database_connection: &mut PgConnection,
        window: RowWindow,
    ) -> QueryResult<Vec<QuestionModel>> {
        let internal_questions = sqlx::query_as::<_, super::InternalQuestionModel>(
            "SELECT id, question, answer, category, difficulty \
                FROM questions \
                ORDER BY id ASC \
                LIMIT $1 OFFSET $2",
        )
        .bind(window.limit)
        .bind(window.offset)
        .fetch_all(database_connection)
        .await?;

        Ok(into_external_models(internal_questions))
    }

    pub async fn exists_by_id(
        database_connection: &mut PgConnection,
        question_id: QuestionId,
    ) -> QueryResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (\
                SELECT 1 \
                    FROM questions \
                    WHERE id = $1\
            )",
        )
        .bind(question_id.into_inner())
        .fetch_one(database_connection)
        .await?;

        Ok(exists)
    }

    /// Counts the questions whose text contains `search_term`, ignoring case.
    pub async fn count_matching_search(
        database_connection: &mut PgConnection,
        search_term: &str,
    ) -> QueryResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) \
                FROM questions \
                WHERE question ILIKE $1",
        )
        .bind(build_substring_like_pattern(search_term))
        .fetch_one(database_connection)
        .await?;

        Ok(count)
    }

    /// Returns a window of the questions whose text contains `search_term`
    /// (ignoring case), ordered by ascending ID.
    pub async fn get_window_matching_search(
        database_connection: &mut PgConnection,
        search_term: &str,
        window: RowWindow,
    ) -> QueryResult<Vec<QuestionModel>> {
        let internal_questions = sqlx::query_as::<_, super::InternalQuestionModel>(
            "SELECT id, question, answer, category, difficulty \
                FROM questions \
                WHERE question ILIKE $1 \
                ORDER BY id ASC \
                LIMIT $2 OFFSET $3",
        )
        .bind(build_substring_like_pattern(search_term))
        .bind(window.limit)
        .bind(window.offset)
        .fetch_all(database_connection)
        .await?;

        Ok(into_external_models(internal_questions))
    }

    pub async fn count_in_category(
        database_connection: &mut PgConnection,
        category_id: CategoryId,
    ) -> QueryResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) \
                FROM questions \
                WHERE category = $1",
        )
        .bind(category_id.into_inner())
        .fetch_one(database_connection)
        .await?;

        Ok(count)
    }

    pub async fn get_window_in_category(
        database_connection: &mut PgConnection,
        category_id: CategoryId,
        window: RowWindow,
    ) -> QueryResult<Vec<QuestionModel>> {
        let internal_questions = sqlx::query_as::<_, super::InternalQuestionModel>(
            "SELECT id, question, answer, category, difficulty \
                FROM questions \
                WHERE category = $1 \
                ORDER BY id ASC \
                LIMIT $2 OFFSET $3",
        )
        .bind(category_id.into_inner())
        .bind(window.limit)
        .bind(window.offset)
        .fetch_all(database_connection)
        .await?;

        Ok(into_external_models(internal_questions))
    }

    /// Returns every question in the given category whose ID is not
    /// in `excluded_question_ids`, ordered by ascending ID.
    pub async fn get_all_in_category_excluding(
        database_connection: &mut PgConnection,
        category_id: CategoryId,
        excluded_question_ids: &[QuestionId],
    ) -> QueryResult<Vec<QuestionModel>> {
        let excluded_question_ids = excluded_question_ids
            .iter()
            .map(|question_id| question_id.into_inner())
            .collect::<Vec<_>>();

        let internal_questions = sqlx::query_as::<_, super::InternalQuestionModel>(
            "SELECT id, question, answer, category, difficulty \
                FROM questions \
                WHERE category = $1 \
                    AND NOT (id = ANY($2)) \
                ORDER BY id ASC",
        )
        .bind(category_id.into_inner())
        .bind(excluded_question_ids)
        .fetch_all(database_connection)
        .await?;

        Ok(into_external_models(internal_questions))
    }
}



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn plain_term_is_wrapped_in_wildcards() {
        assert_eq!(build_substring_like_pattern("title"), "%title%");
    }

    #[test]
    fn empty_term_matches_everything() {
        assert_eq!(build_substring_like_pattern(""), "%%");
    }

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(
            build_substring_like_pattern("100%_sure\\"),
            "%100\\%\\_sure\\\\%"
        );
    }
}
