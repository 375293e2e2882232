/// Ticket model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tickets (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     user_id UUID NOT NULL REFERENCES users(id),
///     event_id UUID NOT NULL REFERENCES events(id),
///     claimed_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// There is intentionally no UNIQUE (user_id, event_id): a user may claim
/// several tickets to the same event. Referential integrity against users
/// and events is left to the foreign keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Ticket model; rows are immutable once inserted
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Ticket {
    /// Unique ticket ID (UUID v4)
    pub id: Uuid,

    /// Claiming user
    pub user_id: Uuid,

    /// Claimed event
    pub event_id: Uuid,

    /// Server-assigned claim timestamp
    pub claimed_at: DateTime<Utc>,
}

/// A claimed ticket joined with its event, for per-user listings
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ClaimedTicket {
    /// Ticket ID
    pub ticket_id: Uuid,

    /// When the ticket was claimed
    pub claimed_at: DateTime<Utc>,

    /// Event ID
    pub id: Uuid,

    /// Event title
    pub title: String,

    /// Event description
    pub description: Option<String>,

    /// Event location
    pub location: String,

    /// Event date
    pub date: DateTime<Utc>,

    /// Event organizer
    pub organizer_id: Uuid,

    /// Event image URL
    pub image_url: Option<String>,

    /// When the event row was created
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    /// Claims a ticket for a user
    ///
    /// `claimed_at` is assigned by the database at insert time. Duplicate
    /// claims for the same (user, event) pair are allowed and produce
    /// distinct rows.
    pub async fn claim(pool: &PgPool, user_id: Uuid, event_id: Uuid) -> Result<Self, sqlx::Error> {
        let ticket = sqlx::query_as::<_, Ticket>(
            r#"
            INSERT INTO tickets (user_id, event_id, claimed_at)
            VALUES ($1, $2, NOW())
            RETURNING id, user_id, event_id, claimed_at
            "#,
        )
        .bind(user_id)
        .bind(event_id)
        .fetch_one(pool)
        .await?;

        Ok(ticket)
    }

    /// Lists a user's tickets joined with their events
    ///
    /// Ordered by claim time descending (most recent claim first).
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<ClaimedTicket>, sqlx::Error> {
        let tickets = sqlx::query_as::<_, ClaimedTicket>(
            r#"
            SELECT tickets.id AS ticket_id, tickets.claimed_at,
                   events.id, events.title, events.description, events.location,
                   events.date, events.organizer_id, events.image_url,
                   events.created_at
            FROM tickets
            JOIN events ON tickets.event_id = events.id
            WHERE tickets.user_id = $1
            ORDER BY tickets.claimed_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(tickets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claimed_ticket_serializes_event_fields_flat() {
        let row = ClaimedTicket {
            ticket_id: Uuid::new_v4(),
            claimed_at: Utc::now(),
            id: Uuid::new_v4(),
            title: "RustConf".to_string(),
            description: None,
            location: "Montreal".to_string(),
            date: Utc::now(),
            organizer_id: Uuid::new_v4(),
            image_url: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&row).unwrap();
        assert!(json.get("ticket_id").is_some());
        assert!(json.get("created_at").is_some());
        assert_eq!(json["title"], "RustConf");
    }
}
