use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, PgPool};

use crate::common::{AttendeeId, EventId, UserId};

// ============================================================================
// Enums
// ============================================================================

/// Role of a member within an event
///
/// Also used as the role an invitation grants on acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "attendee_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AttendeeRole {
    Organizer,
    Attendee,
    Collaborator,
}

impl AttendeeRole {
    pub const ALL: [AttendeeRole; 3] = [
        AttendeeRole::Organizer,
        AttendeeRole::Attendee,
        AttendeeRole::Collaborator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendeeRole::Organizer => "organizer",
            AttendeeRole::Attendee => "attendee",
            AttendeeRole::Collaborator => "collaborator",
        }
    }
}

impl std::fmt::Display for AttendeeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AttendeeRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "organizer" => Ok(AttendeeRole::Organizer),
            "attendee" => Ok(AttendeeRole::Attendee),
            "collaborator" => Ok(AttendeeRole::Collaborator),
            _ => Err(anyhow::anyhow!(
                "must be 'attendee', 'collaborator', or 'organizer' (got '{}')",
                s
            )),
        }
    }
}

/// A member's attendance intent, independent of their role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "rsvp_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RsvpStatus {
    #[default]
    Going,
    Maybe,
    NotGoing,
}

impl RsvpStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RsvpStatus::Going => "going",
            RsvpStatus::Maybe => "maybe",
            RsvpStatus::NotGoing => "not_going",
        }
    }
}

impl std::fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RsvpStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "going" => Ok(RsvpStatus::Going),
            "maybe" => Ok(RsvpStatus::Maybe),
            "not_going" => Ok(RsvpStatus::NotGoing),
            _ => Err(anyhow::anyhow!(
                "must be 'going', 'maybe', or 'not_going' (got '{}')",
                s
            )),
        }
    }
}

// ============================================================================
// Model
// ============================================================================

/// Membership of one user in one event
///
/// `(event_id, user_id)` is unique; the constraint
/// `event_attendees_event_user_key` is what makes `upsert` race-free.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AttendeeRecord {
    pub id: AttendeeId,
    pub event_id: EventId,
    pub user_id: UserId,
    pub role: AttendeeRole,
    pub status: RsvpStatus,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// SQL Queries
// =============================================================================

impl AttendeeRecord {
    /// Insert a membership with status `going`, or overwrite the role of the
    /// existing one. Status is never touched on conflict.
    ///
    /// Generic over the executor so event creation can run it inside its
    /// transaction.
    pub async fn upsert<'e, E>(
        event_id: EventId,
        user_id: UserId,
        role: AttendeeRole,
        executor: E,
    ) -> Result<Self>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO event_attendees (event_id, user_id, role, status)
            VALUES ($1, $2, $3, 'going')
            ON CONFLICT (event_id, user_id) DO UPDATE SET role = EXCLUDED.role
            RETURNING *
            "#,
        )
        .bind(event_id)
        .bind(user_id)
        .bind(role)
        .fetch_one(executor)
        .await
        .map_err(Into::into)
    }

    /// Update the RSVP status of an existing membership.
    ///
    /// Returns `None` when the user is not a member of the event.
    pub async fn update_status(
        event_id: EventId,
        user_id: UserId,
        status: RsvpStatus,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "UPDATE event_attendees
             SET status = $3
             WHERE event_id = $1 AND user_id = $2
             RETURNING *",
        )
        .bind(event_id)
        .bind(user_id)
        .bind(status)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// All members of an event, newest first
    pub async fn find_by_event(event_id: EventId, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM event_attendees
             WHERE event_id = $1
             ORDER BY created_at DESC, id DESC",
        )
        .bind(event_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing_is_closed() {
        for role in AttendeeRole::ALL {
            assert_eq!(role.as_str().parse::<AttendeeRole>().unwrap(), role);
        }
        assert!("manager".parse::<AttendeeRole>().is_err());
        assert!("Organizer".parse::<AttendeeRole>().is_err());
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("not_going".parse::<RsvpStatus>().unwrap(), RsvpStatus::NotGoing);
        assert!("not going".parse::<RsvpStatus>().is_err());
        assert_eq!(RsvpStatus::default(), RsvpStatus::Going);
    }

    #[test]
    fn test_serde_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&RsvpStatus::NotGoing).unwrap(),
            "\"not_going\""
        );
        assert_eq!(
            serde_json::to_string(&AttendeeRole::Collaborator).unwrap(),
            "\"collaborator\""
        );
    }
}
