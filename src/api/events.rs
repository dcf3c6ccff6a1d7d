use actix_web::{web, HttpResponse};

use crate::database::EventStore;
use crate::models::{ErrorResponse, Event, EventFilter, MessageResponse};
use crate::services::joiner_service;
use crate::utils::AppError;

/// GET /events - Every stored record, unmodified
#[utoipa::path(
    get,
    path = "/events",
    tag = "Events",
    responses(
        (status = 200, description = "All events", body = [Event])
    )
)]
pub async fn get_events(store: web::Data<dyn EventStore>) -> Result<HttpResponse, AppError> {
    let events = store.list().await?;
    Ok(HttpResponse::Ok().json(events))
}

/// POST /events - Creates an event (ids must be unique)
#[utoipa::path(
    post,
    path = "/events",
    tag = "Events",
    request_body = Event,
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 400, description = "Event ID already exists", body = ErrorResponse),
        (status = 422, description = "Invalid event body", body = ErrorResponse)
    )
)]
pub async fn create_event(
    store: web::Data<dyn EventStore>,
    body: web::Json<Event>,
) -> Result<HttpResponse, AppError> {
    let event = body.into_inner();
    let id = event.id;

    let created = store.create(event).await.map_err(|e| {
        log::warn!("⚠️ Rejected event {}: {}", id, e);
        e
    })?;

    log::info!("✅ Event {} created", created.id);
    Ok(HttpResponse::Created().json(created))
}

/// GET /events/filter - Events matching every given criterion
#[utoipa::path(
    get,
    path = "/events/filter",
    tag = "Events",
    params(EventFilter),
    responses(
        (status = 200, description = "Matching events", body = [Event])
    )
)]
pub async fn filter_events(
    store: web::Data<dyn EventStore>,
    query: web::Query<EventFilter>,
) -> Result<HttpResponse, AppError> {
    let events = store.list().await?;
    let matching = query.apply(events);

    log::debug!("🔎 Filter {:?} matched {} events", query, matching.len());
    Ok(HttpResponse::Ok().json(matching))
}

/// GET /events/joiners/multiple-meetings - Joiners attending 2+ events
#[utoipa::path(
    get,
    path = "/events/joiners/multiple-meetings",
    tag = "Events",
    responses(
        (status = 200, description = "Joiner identities, or a message when nobody qualifies", body = [String])
    )
)]
pub async fn joiners_multiple_meetings(
    store: web::Data<dyn EventStore>,
) -> Result<HttpResponse, AppError> {
    let records = store.list().await?;
    let joiners = joiner_service::joiners_in_multiple_meetings(&records);

    if joiners.is_empty() {
        return Ok(HttpResponse::Ok().json(MessageResponse::new(
            "No joiners attending at least 2 meetings",
        )));
    }

    Ok(HttpResponse::Ok().json(joiners))
}

/// GET /events/{id} - One event
#[utoipa::path(
    get,
    path = "/events/{id}",
    tag = "Events",
    params(("id" = i64, Path, description = "Event id")),
    responses(
        (status = 200, description = "The event", body = Event),
        (status = 404, description = "Event not found", body = ErrorResponse)
    )
)]
pub async fn get_event(
    store: web::Data<dyn EventStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    match store.get(id).await? {
        Some(event) => Ok(HttpResponse::Ok().json(event)),
        None => Err(AppError::NotFound("Event not found".to_string())),
    }
}

/// PUT /events/{id} - Replaces an event; the path id always wins over the body id
#[utoipa::path(
    put,
    path = "/events/{id}",
    tag = "Events",
    params(("id" = i64, Path, description = "Event id")),
    request_body = Event,
    responses(
        (status = 200, description = "Event replaced", body = Event),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 422, description = "Invalid event body", body = ErrorResponse)
    )
)]
pub async fn update_event(
    store: web::Data<dyn EventStore>,
    path: web::Path<i64>,
    body: web::Json<Event>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    match store.replace(id, body.into_inner()).await? {
        Some(event) => {
            log::info!("🔧 Event {} replaced", id);
            Ok(HttpResponse::Ok().json(event))
        }
        None => Err(AppError::NotFound("Event Not found".to_string())),
    }
}

/// DELETE /events/{id} - Removes an event
#[utoipa::path(
    delete,
    path = "/events/{id}",
    tag = "Events",
    params(("id" = i64, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event deleted", body = MessageResponse),
        (status = 404, description = "Event not found", body = ErrorResponse)
    )
)]
pub async fn delete_event(
    store: web::Data<dyn EventStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    if !store.delete(id).await? {
        return Err(AppError::NotFound("Event Not found".to_string()));
    }

    log::info!("🗑️  Event {} deleted", id);
    Ok(HttpResponse::Ok().json(MessageResponse::new("Event deleted successfully")))
}
