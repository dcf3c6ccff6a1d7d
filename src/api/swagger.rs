use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Events Service API",
        version = "1.0.0",
        description = "Meetings with joiner lists, stored in a single JSON file.\n\n**Features:**\n- Event CRUD\n- Filtering by date, organizer, status and type\n- Report of joiners attending two or more meetings"
    ),
    paths(
        crate::api::health::root,
        crate::api::health::health_check,

        crate::api::events::get_events,
        crate::api::events::create_event,
        crate::api::events::filter_events,
        crate::api::events::joiners_multiple_meetings,
        crate::api::events::get_event,
        crate::api::events::update_event,
        crate::api::events::delete_event,
    ),
    components(
        schemas(
            crate::models::Event,
            crate::models::Person,
            crate::models::MessageResponse,
            crate::models::ErrorResponse,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Root", description = "Greeting."),
        (name = "Health", description = "Health check for monitoring service status."),
        (name = "Events", description = "Event management and joiner reports."),
    )
)]
pub struct ApiDoc;
