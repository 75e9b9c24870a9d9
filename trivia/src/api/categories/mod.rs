mod endpoints;
mod model_impls;

use actix_web::web;
pub use endpoints::*;
pub use model_impls::*;

use super::errors::{method_not_allowed, not_found};


#[rustfmt::skip]
pub fn categories_router() -> actix_web::Scope {
    web::scope("/categories")
        .service(
            web::resource("")
                .route(web::get().to(get_all_categories))
                .default_service(web::to(method_not_allowed))
        )
        .service(
            web::resource("/{category_id}/questions")
                .route(web::get().to(get_questions_in_category))
                .default_service(web::to(method_not_allowed))
        )
        .default_service(web::to(not_found))
}
