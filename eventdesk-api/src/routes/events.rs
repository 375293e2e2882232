/// Event endpoints
///
/// Reads are public; writes require an asserted role. Creation is open to
/// organizers and admins; update and delete additionally apply the
/// ownership rule (admins touch anything, organizers only their own rows).
/// The ownership check and the mutation run in one transaction inside the
/// model layer, so a concurrent delete cannot slip between them.
///
/// # Endpoints
///
/// - `GET    /api/events` - List all events
/// - `GET    /api/events/:id` - Fetch a single event
/// - `POST   /api/events` - Create event (organizer/admin)
/// - `PUT    /api/events/:id` - Update event (admin or owning organizer)
/// - `DELETE /api/events/:id` - Delete event (admin or owning organizer)

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::Caller,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use eventdesk_shared::models::event::{CreateEvent, Event, EventWriteOutcome, UpdateEvent};
use serde::Serialize;
use uuid::Uuid;

/// Response wrapper for event mutations
#[derive(Debug, Serialize)]
pub struct EventResponse {
    /// Human-readable outcome
    pub message: String,

    /// The affected row
    pub event: Event,
}

/// List all events ordered by date ascending
///
/// # Errors
///
/// - `500 Internal Server Error`: Store failure
pub async fn list_events(State(state): State<AppState>) -> ApiResult<Json<Vec<Event>>> {
    let events = Event::list(&state.db).await?;
    Ok(Json(events))
}

/// Fetch a single event by id
///
/// # Errors
///
/// - `404 Not Found`: No event with this id
/// - `500 Internal Server Error`: Store failure
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Event>> {
    let event = Event::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;

    Ok(Json(event))
}

/// Create a new event
///
/// # Endpoint
///
/// ```text
/// POST /api/events
/// x-user-role: organizer
/// Content-Type: application/json
///
/// {
///   "title": "RustConf",
///   "description": "Annual gathering",
///   "location": "Montreal",
///   "date": "2026-09-01T18:00:00Z",
///   "organizer_id": "uuid",
///   "image_url": null
/// }
/// ```
///
/// # Errors
///
/// - `403 Forbidden`: Caller is not an organizer or admin
/// - `500 Internal Server Error`: Store failure (including an organizer_id
///   that references no user)
pub async fn create_event(
    State(state): State<AppState>,
    Caller(identity): Caller,
    Json(req): Json<CreateEvent>,
) -> ApiResult<(StatusCode, Json<EventResponse>)> {
    if !identity.may_create_events() {
        return Err(ApiError::Forbidden(
            "Only organizers or admins can create events".to_string(),
        ));
    }

    let event = Event::create(&state.db, req).await?;

    Ok((
        StatusCode::CREATED,
        Json(EventResponse {
            message: "Event created".to_string(),
            event,
        }),
    ))
}

/// Update an event
///
/// Overwrites title/description/location/date/image_url; organizer_id is
/// immutable.
///
/// # Errors
///
/// - `403 Forbidden`: Caller lacks the role, or is an organizer who does
///   not own this event
/// - `404 Not Found`: No event with this id
/// - `500 Internal Server Error`: Store failure
pub async fn update_event(
    State(state): State<AppState>,
    Caller(identity): Caller,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEvent>,
) -> ApiResult<Json<EventResponse>> {
    let actor = identity.event_actor().ok_or_else(|| {
        ApiError::Forbidden("Access denied. Admins and organizers only.".to_string())
    })?;

    match Event::update_checked(&state.db, id, req, actor).await? {
        EventWriteOutcome::Done(event) => Ok(Json(EventResponse {
            message: "Event updated successfully".to_string(),
            event,
        })),
        EventWriteOutcome::NotFound => Err(ApiError::NotFound("Event not found".to_string())),
        EventWriteOutcome::NotOwner => Err(ApiError::Forbidden(
            "Access denied. You can only update events you created.".to_string(),
        )),
    }
}

/// Delete an event
///
/// Returns the deleted row.
///
/// # Errors
///
/// Same decision table as update.
pub async fn delete_event(
    State(state): State<AppState>,
    Caller(identity): Caller,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<EventResponse>> {
    let actor = identity.event_actor().ok_or_else(|| {
        ApiError::Forbidden("Access denied. Admins and organizers only.".to_string())
    })?;

    match Event::delete_checked(&state.db, id, actor).await? {
        EventWriteOutcome::Done(event) => Ok(Json(EventResponse {
            message: "Event deleted successfully".to_string(),
            event,
        })),
        EventWriteOutcome::NotFound => Err(ApiError::NotFound("Event not found".to_string())),
        EventWriteOutcome::NotOwner => Err(ApiError::Forbidden(
            "Access denied. You can only delete events you created.".to_string(),
        )),
    }
}
