/// Ticket endpoints
///
/// Claiming inserts a row with a server-assigned timestamp; the same user
/// may claim the same event repeatedly and each claim is a distinct ticket.
/// Listings join each ticket with its full event row.
///
/// # Endpoints
///
/// - `POST /api/tickets/claim` - Claim a ticket
/// - `GET  /api/tickets/:user_id` - List a user's tickets

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use eventdesk_shared::models::ticket::{ClaimedTicket, Ticket};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claim request
///
/// Both ids are optional at the deserialization level so the handler can
/// answer a missing field with the contract's 400 body instead of a
/// deserializer rejection.
#[derive(Debug, Deserialize)]
pub struct ClaimRequest {
    /// Claiming user
    pub user_id: Option<Uuid>,

    /// Event to claim
    pub event_id: Option<Uuid>,
}

/// Claim response
#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    /// Human-readable outcome
    pub message: String,

    /// The created ticket row
    pub ticket: Ticket,
}

/// Claim a ticket
///
/// # Endpoint
///
/// ```text
/// POST /api/tickets/claim
/// Content-Type: application/json
///
/// {
///   "user_id": "uuid",
///   "event_id": "uuid"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Missing user_id or event_id
/// - `500 Internal Server Error`: Store failure (including ids that
///   reference no user or event; the foreign keys reject those)
pub async fn claim_ticket(
    State(state): State<AppState>,
    Json(req): Json<ClaimRequest>,
) -> ApiResult<(StatusCode, Json<ClaimResponse>)> {
    let (user_id, event_id) = match (req.user_id, req.event_id) {
        (Some(u), Some(e)) => (u, e),
        _ => {
            return Err(ApiError::BadRequest(
                "Missing user_id or event_id".to_string(),
            ))
        }
    };

    let ticket = Ticket::claim(&state.db, user_id, event_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(ClaimResponse {
            message: "Ticket claimed!".to_string(),
            ticket,
        }),
    ))
}

/// List a user's tickets joined with their events
///
/// Ordered by claim time descending. An unknown user id yields an empty
/// array, not a 404.
///
/// # Errors
///
/// - `500 Internal Server Error`: Store failure
pub async fn list_user_tickets(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<Vec<ClaimedTicket>>> {
    let tickets = Ticket::list_for_user(&state.db, user_id).await?;
    Ok(Json(tickets))
}
