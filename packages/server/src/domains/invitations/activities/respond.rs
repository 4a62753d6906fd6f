//! Accept or decline an invitation.
//!
//! The terminal transition is a compare-and-swap on `status = 'pending'`, so
//! of two concurrent responses exactly one wins and the other sees a
//! conflict. Acceptance then upserts the membership as a second, separately
//! committed step; if that step fails the caller gets
//! `MembershipGrantFailed` with the ids needed to reconcile.

use tracing::{error, info, warn};

use crate::common::{Actor, CoreError, CoreResult, InvitationId};
use crate::domains::invitations::data::RespondToInvitationInput;
use crate::domains::invitations::models::{Invitation, InvitationDecision};
use crate::kernel::ServerDeps;

const ALREADY_RESPONDED: &str = "invitation has already been responded to";

pub async fn respond_to_invitation(
    actor: &Actor,
    invitation_id: InvitationId,
    input: RespondToInvitationInput,
    deps: &ServerDeps,
) -> CoreResult<Invitation> {
    let decision = input.decision()?;

    let invitation = deps
        .invitations
        .find_invitation(invitation_id)
        .await?
        .ok_or(CoreError::NotFound("invitation"))?;

    if invitation.invitee_email != actor.email {
        warn!(
            invitation_id = %invitation_id,
            user_id = %actor.user_id,
            "Respond attempted by someone other than the invitee"
        );
        return Err(CoreError::Forbidden(
            "you are not authorized to respond to this invitation".to_string(),
        ));
    }

    if invitation.status.is_terminal() {
        warn!(invitation_id = %invitation_id, status = %invitation.status, "Invitation already responded to");
        return Err(CoreError::Conflict(ALREADY_RESPONDED.to_string()));
    }

    // The actor's email matched, so an unresolved invitee is the actor.
    let invitee_id = invitation.invitee_id.unwrap_or(actor.user_id);

    let Some(responded) = deps
        .invitations
        .mark_invitation_responded(invitation_id, decision.resulting_status(), Some(invitee_id))
        .await?
    else {
        warn!(invitation_id = %invitation_id, "Lost race responding to invitation");
        return Err(CoreError::Conflict(ALREADY_RESPONDED.to_string()));
    };

    info!(
        invitation_id = %invitation_id,
        event_id = %responded.event_id,
        user_id = %invitee_id,
        status = %responded.status,
        "Invitation responded"
    );

    if decision == InvitationDecision::Accepted {
        let record = deps
            .attendees
            .upsert_membership(responded.event_id, invitee_id, responded.role)
            .await
            .map_err(|source| {
                error!(
                    invitation_id = %invitation_id,
                    event_id = %responded.event_id,
                    user_id = %invitee_id,
                    error = %source,
                    "Invitation accepted but membership grant failed"
                );
                CoreError::MembershipGrantFailed {
                    invitation_id,
                    event_id: responded.event_id,
                    user_id: invitee_id,
                    source,
                }
            })?;

        info!(
            event_id = %record.event_id,
            user_id = %record.user_id,
            role = %record.role,
            "Membership granted from invitation"
        );
    }

    Ok(responded)
}
