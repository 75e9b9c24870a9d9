//! API definitions and annotations for the trivia backend.

use actix_cors::Cors;
use actix_web::{http::header, web, Scope};

use self::{
    categories::categories_router,
    errors::{json_extractor_config, not_found, path_extractor_config},
    questions::questions_router,
    quizzes::quizzes_router,
};

pub mod categories;
pub mod errors;
pub mod openapi;
pub mod pagination;
pub mod query;
pub mod questions;
pub mod quizzes;
pub mod traits;


/// CORS policy: any origin may call the API with the methods and headers the frontend uses.
pub fn cors_middleware() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["GET", "PUT", "POST", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
}


/// Router for the entire public API.
///
/// Also installs the extractor configurations that turn extraction
/// failures into error envelopes, and a `404` default service for unknown paths.
/// Nested scopes do not inherit that default, so each of them installs its own.
///
/// As this scope matches every path, anything that should live next to it
/// (e.g. the testing router) must be registered first.
#[rustfmt::skip]
pub fn api_router() -> Scope {
    web::scope("")
        .app_data(json_extractor_config())
        .app_data(path_extractor_config())
        .service(categories_router())
        .service(questions_router())
        .service(quizzes_router())
        .default_service(web::to(not_found))
}



#[cfg(test)]
mod test {
    use std::time::Duration;

    use actix_web::{
        body::MessageBody,
        dev::{Service, ServiceResponse},
        http::{Method, StatusCode},
        middleware::NormalizePath,
        test,
        App,
    };
    use trivia_configuration::Configuration;

    use super::*;
    use crate::{
        lazy_database_connection_pool,
        state::{ApplicationState, ApplicationStateInner},
    };

    const TEST_CONFIGURATION: &str = r#"
        [logging]
        console_output_level_filter = "info"
        log_file_output_level_filter = "info"
        log_file_output_directory = "./logs"

        [http]
        host = "127.0.0.1"
        port = 5000

        [database]
        host = "127.0.0.1"
        port = 1
        username = "trivia"
        database_name = "trivia"
        max_connections = 1
        acquire_timeout_seconds = 1
    "#;

    /// Application state whose database can never be reached,
    /// so any endpoint that touches it fails.
    fn unreachable_database_state() -> ApplicationState {
        let mut configuration =
            Configuration::load_from_str(TEST_CONFIGURATION, "./configuration.toml").unwrap();
        configuration.database.acquire_timeout = Duration::from_millis(250);

        let database_pool = lazy_database_connection_pool(&configuration.database);

        ApplicationState::new(ApplicationStateInner::with_database_pool(
            configuration,
            database_pool,
        ))
    }

    async fn initialize_app() -> impl Service<
        actix_http::Request,
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
    > {
        test::init_service(
            App::new()
                .wrap(cors_middleware())
                .wrap(NormalizePath::trim())
                .app_data(unreachable_database_state())
                .service(api_router()),
        )
        .await
    }

    async fn assert_envelope<B>(response: ServiceResponse<B>, expected_status: StatusCode)
    where
        B: MessageBody,
    {
        assert_eq!(response.status(), expected_status);

        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], expected_status.as_u16());
    }


    #[actix_web::test]
    async fn unknown_paths_are_not_found() {
        let app = initialize_app().await;

        let response =
            test::call_service(&app, test::TestRequest::get().uri("/nope").to_request()).await;
        assert_envelope(response, StatusCode::NOT_FOUND).await;

        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/categories/1/answers").to_request(),
        )
        .await;
        assert_envelope(response, StatusCode::NOT_FOUND).await;

        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/questions/1/extra").to_request(),
        )
        .await;
        assert_envelope(response, StatusCode::NOT_FOUND).await;

        let response = test::call_service(
            &app,
            test::TestRequest::post().uri("/quizzes/next").to_request(),
        )
        .await;
        assert_envelope(response, StatusCode::NOT_FOUND).await;
    }

    #[actix_web::test]
    async fn wrong_method_is_not_allowed() {
        let app = initialize_app().await;

        let response =
            test::call_service(&app, test::TestRequest::post().uri("/questions/41").to_request())
                .await;
        let status = response.status();

        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            body,
            serde_json::json!({ "success": false, "error": 405, "message": "method not allowed" })
        );


        let response = test::call_service(
            &app,
            test::TestRequest::default()
                .method(Method::PATCH)
                .uri("/categories")
                .to_request(),
        )
        .await;
        assert_envelope(response, StatusCode::METHOD_NOT_ALLOWED).await;
    }

    #[actix_web::test]
    async fn non_integer_and_negative_ids_are_not_found() {
        let app = initialize_app().await;

        let response = test::call_service(
            &app,
            test::TestRequest::delete().uri("/questions/abc").to_request(),
        )
        .await;
        assert_envelope(response, StatusCode::NOT_FOUND).await;

        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/categories/-1/questions").to_request(),
        )
        .await;
        assert_envelope(response, StatusCode::NOT_FOUND).await;
    }

    #[actix_web::test]
    async fn search_without_term_is_not_found() {
        let app = initialize_app().await;

        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/questions/search")
                .set_json(serde_json::json!({ "searchTerm": "title" }))
                .to_request(),
        )
        .await;
        assert_envelope(response, StatusCode::NOT_FOUND).await;
    }

    #[actix_web::test]
    async fn repeated_search_term_is_still_a_search() {
        let app = initialize_app().await;

        // The term is accepted, so the request only fails once the database is needed.
        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/questions/search?search=what&search=title")
                .to_request(),
        )
        .await;
        assert_envelope(response, StatusCode::UNPROCESSABLE_ENTITY).await;
    }

    #[actix_web::test]
    async fn malformed_quiz_requests_are_unprocessable() {
        let app = initialize_app().await;

        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/quizzes")
                .set_json(serde_json::json!({ "previous_questions": [] }))
                .to_request(),
        )
        .await;
        assert_envelope(response, StatusCode::UNPROCESSABLE_ENTITY).await;

        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/quizzes")
                .set_json(serde_json::json!({
                    "previous_questions": [],
                    "quiz_category": { "type": "Art" }
                }))
                .to_request(),
        )
        .await;
        assert_envelope(response, StatusCode::UNPROCESSABLE_ENTITY).await;

        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/quizzes")
                .set_json(serde_json::json!({
                    "previous_questions": "none",
                    "quiz_category": { "id": 1 }
                }))
                .to_request(),
        )
        .await;
        assert_envelope(response, StatusCode::UNPROCESSABLE_ENTITY).await;

        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/quizzes")
                .insert_header((header::CONTENT_TYPE, "text/plain"))
                .set_payload("previous_questions=1")
                .to_request(),
        )
        .await;
        assert_envelope(response, StatusCode::UNPROCESSABLE_ENTITY).await;
    }

    #[actix_web::test]
    async fn malformed_question_bodies() {
        let app = initialize_app().await;

        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/questions")
                .set_json(serde_json::json!({ "question": "Why?", "category": "science" }))
                .to_request(),
        )
        .await;
        assert_envelope(response, StatusCode::UNPROCESSABLE_ENTITY).await;

        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/questions")
                .insert_header((header::CONTENT_TYPE, "text/plain"))
                .set_payload("question=Why?")
                .to_request(),
        )
        .await;
        assert_envelope(response, StatusCode::BAD_REQUEST).await;

        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/questions")
                .insert_header((header::CONTENT_TYPE, "application/json"))
                .set_payload("{\"question\": ")
                .to_request(),
        )
        .await;
        assert_envelope(response, StatusCode::BAD_REQUEST).await;
    }

    #[actix_web::test]
    async fn database_failures_are_unprocessable() {
        let app = initialize_app().await;

        let response =
            test::call_service(&app, test::TestRequest::get().uri("/questions").to_request()).await;
        assert_envelope(response, StatusCode::UNPROCESSABLE_ENTITY).await;

        let response =
            test::call_service(&app, test::TestRequest::get().uri("/categories/").to_request())
                .await;
        assert_envelope(response, StatusCode::UNPROCESSABLE_ENTITY).await;
    }

    #[actix_web::test]
    async fn category_questions_turn_every_failure_into_not_found() {
        let app = initialize_app().await;

        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/categories/1/questions").to_request(),
        )
        .await;
        assert_envelope(response, StatusCode::NOT_FOUND).await;
    }

    #[actix_web::test]
    async fn page_that_can_not_exist_is_not_found_without_touching_the_database() {
        let app = initialize_app().await;

        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/questions?page=0").to_request(),
        )
        .await;
        assert_envelope(response, StatusCode::NOT_FOUND).await;
    }

    #[actix_web::test]
    async fn cors_headers_are_present() {
        let app = initialize_app().await;

        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/nope")
                .insert_header((header::ORIGIN, "http://localhost:3000"))
                .to_request(),
        )
        .await;

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|value| value.to_str().ok()),
            Some("*")
        );
    }
}
