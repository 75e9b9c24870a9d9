mod endpoints;
mod model_impls;

use actix_web::web;
pub use endpoints::*;
pub use model_impls::*;

use super::errors::{method_not_allowed, not_found};


/// Router for `/questions` and its sub-routes.
///
/// `/search` is registered before `/{question_id}`, as the latter would otherwise match it.
#[rustfmt::skip]
pub fn questions_router() -> actix_web::Scope {
    web::scope("/questions")
        .service(
            web::resource("")
                .route(web::get().to(get_questions))
                .route(web::post().to(create_question))
                .default_service(web::to(method_not_allowed))
        )
        .service(
            web::resource("/search")
                .route(web::post().to(search_questions))
                .default_service(web::to(method_not_allowed))
        )
        .service(
            web::resource("/{question_id}")
                .route(web::delete().to(delete_question))
                .default_service(web::to(method_not_allowed))
        )
        .default_service(web::to(not_found))
}
