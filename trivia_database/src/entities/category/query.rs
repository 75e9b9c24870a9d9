use futures_core::stream::BoxStream;
use sqlx::PgConnection;
use trivia_core::ids::CategoryId;

use crate::{IntoExternalModel, QueryError, QueryResult};

type RawCategoryStream<'c> = BoxStream<'c, Result<super::InternalCategoryModel, sqlx::Error>>;

create_async_stream_wrapper!(
    pub struct CategoryStream<'c>;
    transforms stream RawCategoryStream<'c> => stream of QueryResult<super::CategoryModel>:
        |value|
            value.map(
                |some| some
                    .map(super::InternalCategoryModel::into_external_model)
                    .map_err(|error| QueryError::SqlxError { error })
            )
);


pub struct CategoryQuery;

impl CategoryQuery {
    /// Streams every category, ordered by ascending ID.
    pub fn get_all_categories(database_connection: &mut PgConnection) -> CategoryStream<'_> {
        let internal_category_stream = sqlx::query_as::<_, super::InternalCategoryModel>(
            "SELECT id, type \
                FROM categories \
                ORDER BY id ASC",
        )
        .fetch(database_connection);

        CategoryStream::new(internal_category_stream)
    }

    pub async fn count(database_connection: &mut PgConnection) -> QueryResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
            .fetch_one(database_connection)
            .await?;

        Ok(count)
    }

    /// Returns the display names of all categories with the given ID.
    ///
    /// With a primary key this is at most one name, but callers
    /// receive a list to render it as-is.
    pub async fn get_names_by_id(
        database_connection: &mut PgConnection,
        category_id: CategoryId,
    ) -> QueryResult<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT type \
                FROM categories \
                WHERE id = $1 \
                ORDER BY id ASC",
        )
        .bind(category_id.into_inner())
        .fetch_all(database_connection)
        .await?;

        Ok(names)
    }
}
