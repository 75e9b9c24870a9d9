use serde_json::json;
use trivia_test::prelude::*;


async fn request_quiz_question(
    server: &TestServer,
    category_id: serde_json::Value,
    previous_questions: &[i32],
) -> QuizQuestionResponse {
    let response = server
        .request(Method::POST, "/quizzes")
        .with_json_body(json!({
            "previous_questions": previous_questions,
            "quiz_category": { "type": "Science", "id": category_id }
        }))
        .send()
        .await;

    response.assert_status_equals(StatusCode::OK);
    response.json_body()
}


#[tokio::test]
#[ignore = "requires a running server, see the crate documentation"]
async fn quiz_questions_come_from_the_category_and_skip_previous_ones() {
    let server = prepare_test_server_instance().await;

    let body = request_quiz_question(&server, json!(1), &[]).await;
    let question = body.question.expect("expected a quiz question");

    assert!(body.success);
    assert_eq!(question.category, Some(CategoryId::new(1)));
    assert!([1, 2, 3].contains(&question.id.into_inner()));


    let body = request_quiz_question(&server, json!("1"), &[1, 2]).await;
    assert_eq!(
        body.question.map(|question| question.id.into_inner()),
        Some(3)
    );


    let body = request_quiz_question(&server, json!(1), &[1, 2, 3]).await;
    assert_eq!(body, QuizQuestionResponse::new(None));
}


#[tokio::test]
#[ignore = "requires a running server, see the crate documentation"]
async fn malformed_quiz_requests_are_unprocessable() {
    let server = prepare_test_server_instance().await;

    server
        .request(Method::POST, "/quizzes")
        .with_json_body(json!({ "previous_questions": [] }))
        .send()
        .await
        .assert_error_envelope(ErrorKind::Unprocessable);

    server
        .request(Method::POST, "/quizzes")
        .with_json_body(json!({ "quiz_category": { "id": 1 } }))
        .send()
        .await
        .assert_error_envelope(ErrorKind::Unprocessable);

    server
        .request(Method::POST, "/quizzes")
        .with_raw_body("text/plain", "not json")
        .send()
        .await
        .assert_error_envelope(ErrorKind::Unprocessable);
}
