pub mod events;
pub mod health;
pub mod swagger;

use actix_web::{web, Error, HttpRequest};

use crate::utils::AppError;

/// Malformed bodies, queries and path segments answer 422 with a `detail`
fn validation_error(err: impl std::fmt::Display, req: &HttpRequest) -> Error {
    log::debug!("⚠️ Invalid request to {}: {}", req.path(), err);
    AppError::Validation(err.to_string()).into()
}

/// Registers every route. The storage backend is expected as
/// `web::Data<dyn EventStore>` app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, req| validation_error(err, req)))
        .app_data(web::QueryConfig::default().error_handler(|err, req| validation_error(err, req)))
        .app_data(web::PathConfig::default().error_handler(|err, req| validation_error(err, req)))
        .route("/", web::get().to(health::root))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/events")
                .route("", web::get().to(events::get_events))
                .route("", web::post().to(events::create_event))
                // Static paths before the catch-all /{id}
                .route("/filter", web::get().to(events::filter_events))
                .route(
                    "/joiners/multiple-meetings",
                    web::get().to(events::joiners_multiple_meetings),
                )
                .route("/{id}", web::get().to(events::get_event))
                .route("/{id}", web::put().to(events::update_event))
                .route("/{id}", web::delete().to(events::delete_event)),
        );
}
