use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{EventId, InvitationId, UserId};
use crate::domains::attendees::models::AttendeeRole;

// ============================================================================
// Enums
// ============================================================================

/// Invitation lifecycle
///
/// `Pending` transitions exactly once, to `Accepted` or `Declined`. Both are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "invitation_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum InvitationStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
}

impl InvitationStatus {
    pub fn is_terminal(&self) -> bool {
        match self {
            InvitationStatus::Pending => false,
            InvitationStatus::Accepted | InvitationStatus::Declined => true,
        }
    }
}

impl std::fmt::Display for InvitationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvitationStatus::Pending => write!(f, "pending"),
            InvitationStatus::Accepted => write!(f, "accepted"),
            InvitationStatus::Declined => write!(f, "declined"),
        }
    }
}

/// What an invitee may answer. Only these two values are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationDecision {
    Accepted,
    Declined,
}

impl InvitationDecision {
    pub fn resulting_status(&self) -> InvitationStatus {
        match self {
            InvitationDecision::Accepted => InvitationStatus::Accepted,
            InvitationDecision::Declined => InvitationStatus::Declined,
        }
    }
}

impl std::str::FromStr for InvitationDecision {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "accepted" => Ok(InvitationDecision::Accepted),
            "declined" => Ok(InvitationDecision::Declined),
            _ => Err(anyhow::anyhow!(
                "must be 'accepted' or 'declined' (got '{}')",
                s
            )),
        }
    }
}

// ============================================================================
// Models
// ============================================================================

/// Email-addressed offer of event membership
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Invitation {
    pub id: InvitationId,
    pub event_id: EventId,
    pub inviter_id: UserId,
    pub invitee_email: String,
    /// Set when the email belonged to a registered user at send time, or
    /// filled in with the responder's id on acceptance
    pub invitee_id: Option<UserId>,
    pub role: AttendeeRole,
    pub status: InvitationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
    /// `None` iff `status == Pending`
    pub responded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewInvitation {
    pub event_id: EventId,
    pub inviter_id: UserId,
    pub invitee_email: String,
    pub invitee_id: Option<UserId>,
    pub role: AttendeeRole,
    pub message: Option<String>,
}

/// Invitation joined with its event and inviter, for display
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct InvitationDetails {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub invitation: Invitation,
    pub event_title: String,
    pub event_date: String,
    pub event_time: String,
    pub event_location: String,
    pub inviter_email: String,
}

const DETAILS_SELECT: &str = r#"
    SELECT
        i.*,
        e.title AS event_title,
        to_char(e.date, 'YYYY-MM-DD') AS event_date,
        to_char(e.time, 'HH24:MI:SS') AS event_time,
        e.location AS event_location,
        u.email AS inviter_email
    FROM invitations i
    JOIN events e ON i.event_id = e.id
    JOIN users u ON i.inviter_id = u.id
"#;

// =============================================================================
// SQL Queries
// =============================================================================

impl Invitation {
    pub async fn create(new: NewInvitation, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO invitations (event_id, inviter_id, invitee_email, invitee_id, role, message)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(new.event_id)
        .bind(new.inviter_id)
        .bind(&new.invitee_email)
        .bind(new.invitee_id)
        .bind(new.role)
        .bind(&new.message)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_by_id(id: InvitationId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM invitations WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Move a pending invitation to a terminal status.
    ///
    /// Compare-and-swap on `status = 'pending'`: of two concurrent calls at
    /// most one gets a row back, the other gets `None`. `invitee_id` is only
    /// filled in if it was unset.
    pub async fn mark_responded(
        id: InvitationId,
        status: InvitationStatus,
        invitee_id: Option<UserId>,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE invitations
            SET status = $2,
                responded_at = NOW(),
                invitee_id = COALESCE(invitee_id, $3)
            WHERE id = $1 AND status = 'pending'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(invitee_id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_details_by_email(email: &str, pool: &PgPool) -> Result<Vec<InvitationDetails>> {
        let query = format!(
            "{} WHERE i.invitee_email = $1 ORDER BY i.created_at DESC, i.id DESC",
            DETAILS_SELECT
        );
        sqlx::query_as::<_, InvitationDetails>(&query)
            .bind(email)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_details_by_event(
        event_id: EventId,
        pool: &PgPool,
    ) -> Result<Vec<InvitationDetails>> {
        let query = format!(
            "{} WHERE i.event_id = $1 ORDER BY i.created_at DESC, i.id DESC",
            DETAILS_SELECT
        );
        sqlx::query_as::<_, InvitationDetails>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }
}
