//! HTTP handlers and route configuration.

mod health;
mod posts;
mod users;

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{Error, HttpRequest, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(json_error))
            .app_data(web::PathConfig::default().error_handler(path_error))
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/users")
                    .route("", web::post().to(users::create_user))
                    .route("", web::get().to(users::list_users))
                    .route("/{id}", web::get().to(users::get_user))
                    .route("/{id}", web::put().to(users::update_user))
                    .route("/{id}", web::delete().to(users::delete_user)),
            )
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list_posts))
                    .route("/users/{user_id}", web::post().to(posts::create_post))
                    .route("/users/{user_id}", web::get().to(posts::list_posts_by_user))
                    .route("/{id}", web::get().to(posts::get_post))
                    .route("/{id}", web::put().to(posts::update_post))
                    .route("/{id}", web::delete().to(posts::delete_post)),
            ),
    );
}

/// Malformed or incomplete request bodies.
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    AppError::BadRequest(err.to_string()).into()
}

/// Path segments that do not parse, e.g. a non-numeric id.
fn path_error(err: PathError, _req: &HttpRequest) -> Error {
    AppError::BadRequest(err.to_string()).into()
}
