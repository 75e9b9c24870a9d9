use actix_web::web;
use tracing::debug;
use trivia_core::{
    api_models::{QuizQuestionRequest, QuizQuestionResponse},
    ids::{CategoryId, QuestionId},
};
use trivia_database::entities;

use super::choose_quiz_question;
use crate::{
    api::{
        errors::{EndpointError, EndpointResponseBuilder, EndpointResult},
        openapi,
        traits::IntoApiModel,
    },
    state::ApplicationState,
};



/// Get the next quiz question
///
/// Picks a random question from the quiz category that has not been asked yet
/// (i.e. is not in `previous_questions`). When every question in the category
/// has already been asked, `question` is `null`.
#[utoipa::path(
    post,
    path = "/quizzes",
    tag = "quizzes",
    request_body(
        content = QuizQuestionRequest
    ),
    responses(
        (
            status = 200,
            description = "The next quiz question, or `null` if there are none left.",
            body = QuizQuestionResponse
        ),
        openapi::UnprocessableRequest,
    )
)]
pub async fn get_next_quiz_question(
    state: ApplicationState,
    request_body: web::Json<QuizQuestionRequest>,
) -> EndpointResult {
    let request_body = request_body.into_inner();

    let Some(quiz_category) = request_body.quiz_category else {
        return Err(EndpointError::unprocessable("missing quiz_category"));
    };

    let Some(raw_category_id) = quiz_category.id else {
        return Err(EndpointError::unprocessable("missing quiz_category.id"));
    };

    let Some(previous_questions) = request_body.previous_questions else {
        return Err(EndpointError::unprocessable("missing previous_questions"));
    };

    let category_id = CategoryId::new(raw_category_id);
    let previous_question_ids = previous_questions
        .into_iter()
        .map(QuestionId::new)
        .collect::<Vec<_>>();


    let mut database_connection = state.acquire_database_connection().await?;

    let candidate_questions = entities::QuestionQuery::get_all_in_category_excluding(
        &mut database_connection,
        category_id,
        &previous_question_ids,
    )
    .await?;

    debug!(
        category_id = %category_id,
        candidates = candidate_questions.len(),
        "Choosing next quiz question."
    );

    let next_question = choose_quiz_question(candidate_questions, &mut rand::thread_rng())
        .map(IntoApiModel::into_api_model);


    EndpointResponseBuilder::ok()
        .with_json_body(QuizQuestionResponse::new(next_question))
        .build()
}
