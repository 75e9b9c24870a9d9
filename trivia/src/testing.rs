//! A test-only API. Compiled into the binary and enabled only when
//! the `with_test_facilities` feature flag is enabled.

use actix_web::{post, web, HttpResponse, Scope};
use sqlx::{Connection, PgConnection};
use tracing::{info, warn};
use trivia_core::ids::CategoryId;
use trivia_database::{
    entities::{NewQuestion, QuestionMutation},
    QueryResult,
};

use crate::{
    api::errors::{not_found, EndpointResult},
    state::ApplicationState,
};


/// Categories seeded by [`reset_server`], in ID order (starting at 1).
pub const SAMPLE_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Questions seeded by [`reset_server`], in ID order (starting at 1):
/// `(question, answer, category, difficulty)`.
pub const SAMPLE_QUESTIONS: [(&str, &str, i32, i32); 12] = [
    (
        "What is the heaviest organ in the human body?",
        "The Liver",
        1,
        4,
    ),
    (
        "Who discovered penicillin?",
        "Alexander Fleming",
        1,
        3,
    ),
    (
        "Hematology is a branch of medicine involving the study of what?",
        "Blood",
        1,
        4,
    ),
    (
        "Which Dutch graphic artist, initials M C, was a creator of optical illusions?",
        "Escher",
        2,
        1,
    ),
    (
        "La Giaconda is better known as what?",
        "Mona Lisa",
        2,
        3,
    ),
    (
        "What is the largest lake in Africa?",
        "Lake Victoria",
        3,
        2,
    ),
    (
        "In which royal palace would you find the Hall of Mirrors?",
        "The Palace of Versailles",
        3,
        3,
    ),
    (
        "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
        "Maya Angelou",
        4,
        2,
    ),
    (
        "Which country won the first ever soccer World Cup in 1930?",
        "Uruguay",
        6,
        4,
    ),
    (
        "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
        "Apollo 13",
        5,
        4,
    ),
    (
        "Which is the only team to play in every soccer World Cup tournament?",
        "Brazil",
        6,
        3,
    ),
    (
        "What boxer's original name is Cassius Clay?",
        "Muhammad Ali",
        4,
        1,
    ),
];


/// Empties both tables (restarting their ID sequences) and seeds the sample data.
pub async fn reset_and_seed_database(database_connection: &mut PgConnection) -> QueryResult<()> {
    let mut transaction = database_connection.begin().await?;

    sqlx::query("TRUNCATE TABLE questions, categories RESTART IDENTITY")
        .execute(&mut *transaction)
        .await?;

    for category_name in SAMPLE_CATEGORIES {
        sqlx::query("INSERT INTO categories (type) VALUES ($1)")
            .bind(category_name)
            .execute(&mut *transaction)
            .await?;
    }

    for (question, answer, category, difficulty) in SAMPLE_QUESTIONS {
        QuestionMutation::create(
            &mut transaction,
            NewQuestion {
                question: Some(question.to_string()),
                answer: Some(answer.to_string()),
                category: Some(CategoryId::new(category)),
                difficulty: Some(difficulty),
            },
        )
        .await?;
    }

    transaction.commit().await?;

    Ok(())
}


#[post("/full-reset")]
pub async fn reset_server(state: ApplicationState) -> EndpointResult {
    warn!("Resetting database to the sample data set.");

    let mut database_connection = state.acquire_database_connection().await?;
    reset_and_seed_database(&mut database_connection).await?;

    info!("Database reset.");

    Ok(HttpResponse::Ok().finish())
}


#[rustfmt::skip]
pub fn testing_router() -> Scope {
    web::scope("/testing")
        .service(reset_server)
        .default_service(web::to(not_found))
}
