use actix_web::web;
use sqlx::Connection;
use tracing::info;
use trivia_core::{
    api_models::{
        QuestionCreationRequest,
        QuestionCreationResponse,
        QuestionDeletionResponse,
        QuestionSearchQuery,
        QuestionSearchResponse,
        QuestionsResponse,
    },
    ids::{CategoryId, QuestionId},
};
use trivia_database::entities::{self, NewQuestion};

use super::into_api_questions;
use crate::{
    api::{
        categories::collect_category_map,
        errors::{EndpointError, EndpointResponseBuilder, EndpointResult},
        openapi,
        pagination::{PageParameter, PageQuery},
        query::SearchTermParameter,
    },
    state::ApplicationState,
};



/// List questions
///
/// Returns a page of all questions (ordered by ID), the total number of questions
/// and every category.
///
/// Unlike the other listing endpoints, an empty page is reported as `404`.
#[utoipa::path(
    get,
    path = "/questions",
    tag = "questions",
    params(PageQuery),
    responses(
        (
            status = 200,
            description = "A page of questions.",
            body = QuestionsResponse
        ),
        openapi::ResourceNotFound,
        openapi::UnprocessableRequest,
    )
)]
pub async fn get_questions(state: ApplicationState, page: PageParameter) -> EndpointResult {
    let Some(window) = page.window() else {
        return Err(EndpointError::NotFound);
    };

    let mut database_connection = state.acquire_database_connection().await?;


    let questions = entities::QuestionQuery::get_window(&mut database_connection, window).await?;
    if questions.is_empty() {
        return Err(EndpointError::NotFound);
    }

    let total_questions = entities::QuestionQuery::count(&mut database_connection).await?;
    let categories = collect_category_map(&mut database_connection).await?;


    EndpointResponseBuilder::ok()
        .with_json_body(QuestionsResponse::new(
            into_api_questions(questions),
            total_questions,
            categories,
        ))
        .build()
}



/// Create a question
///
/// Every field is optional and stored as `null` when missing.
/// The response contains the requested page of questions (`page` query parameter,
/// defaulting to the first one) as it looks *after* the new question was inserted.
#[utoipa::path(
    post,
    path = "/questions",
    tag = "questions",
    params(PageQuery),
    request_body(
        content = QuestionCreationRequest
    ),
    responses(
        (
            status = 200,
            description = "The question has been created.",
            body = QuestionCreationResponse
        ),
        openapi::BadRequest,
        openapi::UnprocessableRequest,
    )
)]
pub async fn create_question(
    state: ApplicationState,
    page: PageParameter,
    request_body: web::Json<QuestionCreationRequest>,
) -> EndpointResult {
    let request_body = request_body.into_inner();

    let mut database_connection = state.acquire_database_connection().await?;
    let mut transaction = database_connection.begin().await?;


    let newly_created_question = entities::QuestionMutation::create(
        &mut transaction,
        NewQuestion {
            question: request_body.question,
            answer: request_body.answer,
            category: request_body.category.map(CategoryId::new),
            difficulty: request_body.difficulty,
        },
    )
    .await?;

    let questions = match page.window() {
        Some(window) => entities::QuestionQuery::get_window(&mut transaction, window).await?,
        None => Vec::new(),
    };

    let total_questions = entities::QuestionQuery::count(&mut transaction).await?;


    transaction.commit().await?;

    info!(
        question_id = %newly_created_question.id,
        "Created new question."
    );


    EndpointResponseBuilder::ok()
        .with_json_body(QuestionCreationResponse::new(
            newly_created_question.id,
            into_api_questions(questions),
            total_questions,
        ))
        .build()
}



/// Search questions
///
/// Case-insensitive substring search over question texts, with the term taken
/// from the `search` query parameter (a JSON body is ignored).
///
/// A search without matches (or a page past the end) is *not* an error;
/// it responds with an empty list. Only a missing `search` parameter is `404`.
/// When `search` is repeated, its first value is used.
#[utoipa::path(
    post,
    path = "/questions/search",
    tag = "questions",
    params(QuestionSearchQuery, PageQuery),
    responses(
        (
            status = 200,
            description = "A page of matching questions.",
            body = QuestionSearchResponse
        ),
        openapi::ResourceNotFound,
        openapi::UnprocessableRequest,
    )
)]
pub async fn search_questions(
    state: ApplicationState,
    search_term: SearchTermParameter,
    page: PageParameter,
) -> EndpointResult {
    let Some(search_term) = search_term.into_inner() else {
        return Err(EndpointError::NotFound);
    };

    let mut database_connection = state.acquire_database_connection().await?;


    let total_questions =
        entities::QuestionQuery::count_matching_search(&mut database_connection, &search_term)
            .await?;

    let questions = match page.window() {
        Some(window) => {
            entities::QuestionQuery::get_window_matching_search(
                &mut database_connection,
                &search_term,
                window,
            )
            .await?
        }
        None => Vec::new(),
    };


    EndpointResponseBuilder::ok()
        .with_json_body(QuestionSearchResponse::new(
            into_api_questions(questions),
            total_questions,
        ))
        .build()
}



/// Delete a question
///
/// Responds with the ID of the deleted question and the number of questions left.
#[utoipa::path(
    delete,
    path = "/questions/{question_id}",
    tag = "questions",
    params(
        ("question_id" = u32, Path, description = "ID of the question to delete.")
    ),
    responses(
        (
            status = 200,
            description = "The question has been deleted.",
            body = QuestionDeletionResponse
        ),
        openapi::ResourceNotFound,
        openapi::UnprocessableRequest,
    )
)]
pub async fn delete_question(
    state: ApplicationState,
    parameters: web::Path<u32>,
) -> EndpointResult {
    let question_id = i32::try_from(parameters.into_inner())
        .map(QuestionId::new)
        .map_err(|_| EndpointError::NotFound)?;

    let mut database_connection = state.acquire_database_connection().await?;
    let mut transaction = database_connection.begin().await?;


    let question_exists =
        entities::QuestionQuery::exists_by_id(&mut transaction, question_id).await?;
    if !question_exists {
        return Err(EndpointError::NotFound);
    }

    let has_been_deleted = entities::QuestionMutation::delete(&mut transaction, question_id).await?;
    if !has_been_deleted {
        return Err(EndpointError::unprocessable(
            "question existed, but was not deleted",
        ));
    }

    let total_questions = entities::QuestionQuery::count(&mut transaction).await?;


    transaction.commit().await?;

    info!(
        question_id = %question_id,
        "Deleted question."
    );


    EndpointResponseBuilder::ok()
        .with_json_body(QuestionDeletionResponse::new(
            question_id,
            total_questions,
        ))
        .build()
}
