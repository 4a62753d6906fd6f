use serde::Deserialize;

use crate::common::validation::{optional_message, validate_email};
use crate::common::{CoreError, CoreResult, EventId, UserId};
use crate::domains::attendees::data::parse_role;

use super::models::{InvitationDecision, NewInvitation};

#[derive(Debug, Clone, Deserialize)]
pub struct SendInvitationInput {
    pub event_id: i64,
    #[serde(default)]
    pub invitee_email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl SendInvitationInput {
    /// Checks every field and returns a `NewInvitation` without a resolved
    /// invitee.
    pub fn validate(self, inviter_id: UserId) -> CoreResult<NewInvitation> {
        let event_id = EventId::new(self.event_id);
        if !event_id.is_valid() {
            return Err(CoreError::validation("event_id", "must be a positive integer"));
        }
        let invitee_email = validate_email("invitee_email", &self.invitee_email)?;
        let role = parse_role(&self.role)?;
        let message = optional_message(self.message.as_deref())?;

        Ok(NewInvitation {
            event_id,
            inviter_id,
            invitee_email,
            invitee_id: None,
            role,
            message,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RespondToInvitationInput {
    #[serde(default)]
    pub status: String,
}

impl RespondToInvitationInput {
    pub fn decision(&self) -> CoreResult<InvitationDecision> {
        self.status
            .parse()
            .map_err(|e: anyhow::Error| CoreError::validation("status", e.to_string()))
    }
}
