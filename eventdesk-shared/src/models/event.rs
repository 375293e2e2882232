/// Event model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE events (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     title TEXT NOT NULL,
///     description TEXT,
///     location TEXT NOT NULL,
///     date TIMESTAMPTZ NOT NULL,
///     organizer_id UUID NOT NULL REFERENCES users(id),
///     image_url TEXT,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// Update and delete take an [`EventActor`] and run the ownership check and
/// the mutation inside one transaction, with the target row locked via
/// `SELECT ... FOR UPDATE`. Two concurrent mutations of the same event
/// therefore serialize instead of racing a stale read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::identity::EventActor;

/// Event model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    /// Unique event ID (UUID v4)
    pub id: Uuid,

    /// Event title
    pub title: String,

    /// Optional longer description
    pub description: Option<String>,

    /// Venue or address
    pub location: String,

    /// When the event takes place
    pub date: DateTime<Utc>,

    /// Owning organizer; immutable after creation
    pub organizer_id: Uuid,

    /// Optional promotional image URL
    pub image_url: Option<String>,

    /// When the row was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new event
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub date: DateTime<Utc>,
    pub organizer_id: Uuid,
    pub image_url: Option<String>,
}

/// Input for updating an event
///
/// All mutable fields are overwritten; `organizer_id` cannot be changed.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEvent {
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub date: DateTime<Utc>,
    pub image_url: Option<String>,
}

/// Outcome of an authorized event mutation
///
/// Separating `NotFound` from `NotOwner` lets the API preserve its 404/403
/// distinction without a second query.
#[derive(Debug, Clone)]
pub enum EventWriteOutcome {
    /// Mutation applied; carries the resulting (or deleted) row
    Done(Event),

    /// No event with the given id
    NotFound,

    /// Event exists but the actor fails the ownership check
    NotOwner,
}

const EVENT_COLUMNS: &str =
    "id, title, description, location, date, organizer_id, image_url, created_at";

impl Event {
    /// Lists all events ordered by date ascending
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY date ASC"
        ))
        .fetch_all(pool)
        .await?;

        Ok(events)
    }

    /// Finds an event by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(event)
    }

    /// Creates a new event
    ///
    /// Role checks happen in the handler; this only runs the insert. The
    /// organizer foreign key is enforced by the database.
    pub async fn create(pool: &PgPool, data: CreateEvent) -> Result<Self, sqlx::Error> {
        let event = sqlx::query_as::<_, Event>(&format!(
            r#"
            INSERT INTO events (title, description, location, date, organizer_id, image_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(data.title)
        .bind(data.description)
        .bind(data.location)
        .bind(data.date)
        .bind(data.organizer_id)
        .bind(data.image_url)
        .fetch_one(pool)
        .await?;

        Ok(event)
    }

    /// Updates an event after an ownership check, atomically
    ///
    /// The row is locked with `FOR UPDATE` for the duration of the check and
    /// the write, so a concurrent delete or update cannot slip between them.
    pub async fn update_checked(
        pool: &PgPool,
        id: Uuid,
        data: UpdateEvent,
        actor: EventActor,
    ) -> Result<EventWriteOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let existing = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(existing) = existing else {
            return Ok(EventWriteOutcome::NotFound);
        };

        if !actor.may_modify(existing.organizer_id) {
            return Ok(EventWriteOutcome::NotOwner);
        }

        let updated = sqlx::query_as::<_, Event>(&format!(
            r#"
            UPDATE events
            SET title = $1, description = $2, location = $3, date = $4, image_url = $5
            WHERE id = $6
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(data.title)
        .bind(data.description)
        .bind(data.location)
        .bind(data.date)
        .bind(data.image_url)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(EventWriteOutcome::Done(updated))
    }

    /// Deletes an event after an ownership check, atomically
    ///
    /// Returns the deleted row on success, mirroring `update_checked`.
    pub async fn delete_checked(
        pool: &PgPool,
        id: Uuid,
        actor: EventActor,
    ) -> Result<EventWriteOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let existing = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(existing) = existing else {
            return Ok(EventWriteOutcome::NotFound);
        };

        if !actor.may_modify(existing.organizer_id) {
            return Ok(EventWriteOutcome::NotOwner);
        }

        let deleted = sqlx::query_as::<_, Event>(&format!(
            "DELETE FROM events WHERE id = $1 RETURNING {EVENT_COLUMNS}"
        ))
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(EventWriteOutcome::Done(deleted))
    }
}
