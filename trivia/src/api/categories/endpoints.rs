use actix_web::web;
use tracing::debug;
use trivia_core::{
    api_models::{CategoriesResponse, CategoryQuestionsResponse},
    ids::CategoryId,
};
use trivia_database::entities;

use super::{category_id_exceeds_count, collect_category_map};
use crate::{
    api::{
        errors::{EndpointError, EndpointResponseBuilder, EndpointResult},
        openapi,
        pagination::{PageParameter, PageQuery},
        questions::into_api_questions,
    },
    state::ApplicationState,
};



/// List all categories
///
/// Returns every category as a map of category ID to its display name,
/// ordered by ID.
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (
            status = 200,
            description = "All categories.",
            body = CategoriesResponse
        ),
        openapi::ResourceNotFound,
        openapi::UnprocessableRequest,
    )
)]
pub async fn get_all_categories(state: ApplicationState) -> EndpointResult {
    let mut database_connection = state.acquire_database_connection().await?;

    let categories = collect_category_map(&mut database_connection).await?;
    if categories.is_empty() {
        return Err(EndpointError::NotFound);
    }


    EndpointResponseBuilder::ok()
        .with_json_body(CategoriesResponse::new(categories))
        .build()
}



/// List questions in a category
///
/// Returns a page of the questions in the given category, ordered by ID.
///
/// Category IDs larger than the *number* of existing categories are rejected with `404`.
/// Every other failure on this endpoint is reported as `404` as well.
/// A page past the end is not an error: it contains no questions.
#[utoipa::path(
    get,
    path = "/categories/{category_id}/questions",
    tag = "categories",
    params(
        ("category_id" = u32, Path, description = "ID of the category."),
        PageQuery
    ),
    responses(
        (
            status = 200,
            description = "A page of questions in the category.",
            body = CategoryQuestionsResponse
        ),
        openapi::ResourceNotFound,
    )
)]
pub async fn get_questions_in_category(
    state: ApplicationState,
    parameters: web::Path<u32>,
    page: PageParameter,
) -> EndpointResult {
    respond_with_questions_in_category(state, parameters.into_inner(), page)
        .await
        .map_err(EndpointError::into_not_found)
}

async fn respond_with_questions_in_category(
    state: ApplicationState,
    raw_category_id: u32,
    page: PageParameter,
) -> EndpointResult {
    let raw_category_id = i32::try_from(raw_category_id).map_err(|_| EndpointError::NotFound)?;
    let category_id = CategoryId::new(raw_category_id);

    let mut database_connection = state.acquire_database_connection().await?;


    let category_count = entities::CategoryQuery::count(&mut database_connection).await?;
    if category_id_exceeds_count(raw_category_id, category_count) {
        debug!(
            category_id = raw_category_id,
            category_count,
            "Category ID is past the number of categories."
        );

        return Err(EndpointError::NotFound);
    }


    let total_questions =
        entities::QuestionQuery::count_in_category(&mut database_connection, category_id).await?;

    let questions = match page.window() {
        Some(window) => {
            entities::QuestionQuery::get_window_in_category(
                &mut database_connection,
                category_id,
                window,
            )
            .await?
        }
        None => Vec::new(),
    };

    let current_category =
        entities::CategoryQuery::get_names_by_id(&mut database_connection, category_id).await?;


    EndpointResponseBuilder::ok()
        .with_json_body(CategoryQuestionsResponse::new(
            into_api_questions(questions),
            total_questions,
            current_category,
        ))
        .build()
}
