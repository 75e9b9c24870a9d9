use futures_util::StreamExt;
use sqlx::PgConnection;
use trivia_core::api_models::CategoryMap;
use trivia_database::{entities, QueryResult};


/// Loads every category into an ID-ordered map of display names.
pub async fn collect_category_map(
    database_connection: &mut PgConnection,
) -> QueryResult<CategoryMap> {
    let mut category_stream = entities::CategoryQuery::get_all_categories(database_connection);

    let mut categories = CategoryMap::new();
    while let Some(category) = category_stream.next().await {
        let category = category?;
        categories.insert(category.id, category.name);
    }

    Ok(categories)
}


/// Whether `category_id` lies beyond the number of existing categories.
///
/// This compares against the count, not against the existing IDs:
/// with categories `{1, 2, 5}`, IDs `1` to `3` are in range (even the missing `3`),
/// while `4` and the existing `5` are not.
pub fn category_id_exceeds_count(category_id: i32, category_count: i64) -> bool {
    i64::from(category_id) > category_count
}
