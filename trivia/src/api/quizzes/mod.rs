mod endpoints;
mod selection;

use actix_web::web;
pub use endpoints::*;
pub use selection::*;

use super::errors::{method_not_allowed, not_found, strict_json_extractor_config};


/// Router for `/quizzes`.
///
/// Every malformed quiz payload, JSON or not, is reported as `422`.
#[rustfmt::skip]
pub fn quizzes_router() -> actix_web::Scope {
    web::scope("/quizzes")
        .service(
            web::resource("")
                .app_data(strict_json_extractor_config())
                .route(web::post().to(get_next_quiz_question))
                .default_service(web::to(method_not_allowed))
        )
        .default_service(web::to(not_found))
}
