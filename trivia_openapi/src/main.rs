use std::net::Ipv4Addr;

use actix_web::{App, HttpServer};
use miette::{Context, IntoDiagnostic, Result};
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;
use trivia::api::{categories, questions, quizzes};
use trivia::logging::initialize_tracing;
use trivia_core::{api_models, ids};
use utoipa::{openapi::OpenApi, OpenApi as OpenApiDerivable};
use utoipa_rapidoc::RapiDoc;


const DOCUMENTATION_SERVER_PORT: u16 = 8877;


#[derive(OpenApiDerivable)]
#[openapi(
    paths(
        /***
         * Annotated paths are relative to `trivia/src/api`.
         */

        // trivia::api::categories
        categories::get_all_categories,
        categories::get_questions_in_category,


        // trivia::api::questions
        questions::get_questions,
        questions::create_question,
        questions::search_questions,
        questions::delete_question,


        // trivia::api::quizzes
        quizzes::get_next_quiz_question,
    ),
    components(
        schemas(
            // trivia_core::ids
            ids::CategoryId,
            ids::QuestionId,

            // trivia_core::api_models::error_response
            api_models::ErrorResponse,

            // trivia_core::api_models::categories
            api_models::CategoriesResponse,

            // trivia_core::api_models::questions
            api_models::Question,
            api_models::QuestionsResponse,
            api_models::QuestionCreationRequest,
            api_models::QuestionCreationResponse,
            api_models::QuestionDeletionResponse,
            api_models::QuestionSearchResponse,
            api_models::CategoryQuestionsResponse,

            // trivia_core::api_models::quizzes
            api_models::QuizCategory,
            api_models::QuizQuestionRequest,
            api_models::QuizQuestionResponse,
        ),
    ),
    tags(
        (name = "categories", description = "Question categories and the questions in them."),
        (name = "questions", description = "Listing, creating, searching and deleting questions."),
        (name = "quizzes", description = "Random quiz questions."),
    ),
    info(
        title = "Trivia API",
        description = "Paginated trivia questions and quizzes. \
                       Pages hold `10` questions; see the `page` query parameter."
    ),
    servers(
        (
            url = "http://127.0.0.1:5000/",
            description = "Local development server"
        )
    )
)]
struct APIDocumentation;


fn remove_duplicated_summary_from_description(summary: &str, paragraph: &mut String) {
    if paragraph.starts_with(summary) {
        *paragraph = paragraph[summary.len()..].trim_start().to_string();
    }
}

/// Removes the summary line that `utoipa` repeats at the start
/// of every operation description.
fn clean_up_documentation(documentation: &mut OpenApi) {
    for path in documentation.paths.paths.values_mut() {
        for operation in path.operations.values_mut() {
            if let (Some(operation_summary), Some(operation_description)) = (
                operation.summary.as_ref(),
                operation.description.as_mut(),
            ) {
                remove_duplicated_summary_from_description(
                    operation_summary,
                    operation_description,
                );
            }
        }
    }
}


#[actix_web::main]
async fn main() -> Result<()> {
    // Initialize logging and tracing.
    let guard = initialize_tracing(
        EnvFilter::builder().from_env_lossy(),
        EnvFilter::builder().from_env_lossy(),
        "./logs",
        "trivia-openapi.log",
    )
    .into_diagnostic()
    .wrap_err("Failed to initialize tracing.")?;

    // Initialize compile-time generated OpenApi documentation.
    let mut open_api: OpenApi = APIDocumentation::openapi();
    clean_up_documentation(&mut open_api);

    // Start actix HTTP server to serve the documentation.
    // The interactive documentation page will be served at `/api-documentation`,
    // and the OpenAPI JSON file at `/api-documentation/openapi.json`.

    let server = HttpServer::new(move || {
        App::new().wrap(TracingLogger::default()).service(
            RapiDoc::with_openapi(
                "/api-documentation/openapi.json",
                open_api.clone(),
            )
            .path("/api-documentation"),
        )
    })
    .bind((Ipv4Addr::LOCALHOST, DOCUMENTATION_SERVER_PORT))
    .into_diagnostic()
    .wrap_err("Failed to set up actix HTTP server.")?;

    info!(
        port = DOCUMENTATION_SERVER_PORT,
        "HTTP server initialized, running."
    );

    server
        .run()
        .await
        .into_diagnostic()
        .wrap_err("Errored while running actix HTTP server.")?;

    drop(guard);
    Ok(())
}
