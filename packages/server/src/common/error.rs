//! Error taxonomy shared by every core operation.

use thiserror::Error;

use super::auth::AuthError;
use super::entity_ids::{EventId, InvitationId, UserId};

pub type CoreResult<T> = Result<T, CoreError>;

/// Outcome of a failed core operation.
///
/// Every variant is terminal for the triggering call. The HTTP layer maps
/// them to distinct status codes, so callers can tell a bad actor from bad
/// input from a stale state transition.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("authentication required")]
    Unauthorized,

    #[error("{0}")]
    Forbidden(String),

    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    /// The invitation reached `accepted` but the membership upsert that
    /// follows it failed. Replaying `respond` hits the conflict guard, so the
    /// caller has to reconcile (for example by joining the event directly).
    #[error(
        "invitation {invitation_id} was accepted but user {user_id} could not be added to event {event_id}: {source}"
    )]
    MembershipGrantFailed {
        invitation_id: InvitationId,
        event_id: EventId,
        user_id: UserId,
        #[source]
        source: anyhow::Error,
    },

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl CoreError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        CoreError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Whether the error belongs to the internal (store failure) class.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            CoreError::Internal(_) | CoreError::MembershipGrantFailed { .. }
        )
    }
}

impl From<AuthError> for CoreError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationRequired => CoreError::Unauthorized,
            AuthError::NotOrganizer(_) => CoreError::Forbidden(err.to_string()),
        }
    }
}
