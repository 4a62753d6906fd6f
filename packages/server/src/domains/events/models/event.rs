use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use typed_builder::TypedBuilder;

use crate::common::{EventId, OrganizedResource, UserId};
use crate::domains::attendees::models::{AttendeeRecord, AttendeeRole, RsvpStatus};

/// Event model - SQL persistence layer
///
/// `date` and `time` are stored in separate `DATE` / `TIME` columns and are
/// serialized as `YYYY-MM-DD` and `HH:MM:SS`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    /// Never changes after creation
    pub organizer_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl OrganizedResource for Event {
    fn organizer_id(&self) -> UserId {
        self.organizer_id
    }
}

/// Validated fields for a new event
#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct NewEvent {
    pub title: String,
    #[builder(default)]
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub organizer_id: UserId,
}

/// Partial update. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub location: Option<String>,
}

impl EventChanges {
    pub fn is_empty(&self) -> bool {
        self == &EventChanges::default()
    }

    /// Apply onto an in-memory event (used where no SQL `COALESCE` is available)
    pub fn apply_to(self, event: &mut Event) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(description) = self.description {
            event.description = description;
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(time) = self.time {
            event.time = time;
        }
        if let Some(location) = self.location {
            event.location = location;
        }
    }
}

/// An event seen from one member's perspective
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventMembership {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub event: Event,
    pub role: AttendeeRole,
    pub status: RsvpStatus,
}

// =============================================================================
// SQL Queries
// =============================================================================

impl Event {
    pub async fn find_by_id(id: EventId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM events ORDER BY date DESC, id DESC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_organizer(organizer_id: UserId, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM events WHERE organizer_id = $1 ORDER BY date DESC, id DESC",
        )
        .bind(organizer_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Events a user is a member of, with their role and RSVP status
    pub async fn find_attended_by(user_id: UserId, pool: &PgPool) -> Result<Vec<EventMembership>> {
        sqlx::query_as::<_, EventMembership>(
            r#"
            SELECT e.*, ea.role, ea.status
            FROM events e
            JOIN event_attendees ea ON e.id = ea.event_id
            WHERE ea.user_id = $1
            ORDER BY e.date DESC, e.time DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Insert the event and register its organizer as a member in one
    /// transaction, so no reader ever sees an event without its organizer.
    pub async fn create_with_organizer(new: NewEvent, pool: &PgPool) -> Result<Self> {
        let mut tx = pool.begin().await?;

        let event = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO events (title, description, date, time, location, organizer_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&new.title)
        .bind(&new.description)
        .bind(new.date)
        .bind(new.time)
        .bind(&new.location)
        .bind(new.organizer_id)
        .fetch_one(&mut *tx)
        .await?;

        AttendeeRecord::upsert(event.id, event.organizer_id, AttendeeRole::Organizer, &mut *tx)
            .await?;

        tx.commit().await?;

        Ok(event)
    }

    /// Apply a partial update. Returns `None` if the event does not exist.
    pub async fn update(id: EventId, changes: EventChanges, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE events
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                date = COALESCE($4, date),
                time = COALESCE($5, time),
                location = COALESCE($6, location)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.title)
        .bind(changes.description)
        .bind(changes.date)
        .bind(changes.time)
        .bind(changes.location)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Delete an event. Memberships and invitations cascade.
    ///
    /// Returns whether a row was removed.
    pub async fn delete(id: EventId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
