//! Send an invitation.
//!
//! Order of checks:
//! 1. Field validation (event id, email, role, message)
//! 2. Event exists
//! 3. Actor is the organizer
//! 4. Resolve the invitee through the user directory (absence is fine)
//! 5. Insert as `pending`
//!
//! Nothing is written unless every check passes.

use tracing::info;

use crate::common::{Actor, CoreResult, EventCapability};
use crate::domains::events::activities::get_event;
use crate::domains::invitations::data::SendInvitationInput;
use crate::domains::invitations::models::Invitation;
use crate::kernel::ServerDeps;

pub async fn send_invitation(
    actor: &Actor,
    input: SendInvitationInput,
    deps: &ServerDeps,
) -> CoreResult<Invitation> {
    let mut new_invitation = input.validate(actor.user_id)?;

    let event = get_event(new_invitation.event_id, deps).await?;
    actor.can(EventCapability::InviteUsers).on(&event).check()?;

    new_invitation.invitee_id = deps
        .users
        .resolve_user_id_by_email(&new_invitation.invitee_email)
        .await?;

    let invitation = deps.invitations.insert_invitation(new_invitation).await?;
    info!(
        invitation_id = %invitation.id,
        event_id = %invitation.event_id,
        inviter_id = %invitation.inviter_id,
        invitee_resolved = invitation.invitee_id.is_some(),
        role = %invitation.role,
        "Invitation sent"
    );
    Ok(invitation)
}
