use crate::common::{Actor, CoreResult, EventId};
use crate::domains::invitations::models::InvitationDetails;
use crate::kernel::ServerDeps;

/// Invitations addressed to `email`, newest first
pub async fn list_invitations_for_email(
    email: &str,
    deps: &ServerDeps,
) -> CoreResult<Vec<InvitationDetails>> {
    Ok(deps.invitations.list_invitations_for_email(email).await?)
}

/// Invitations addressed to the actor's email
pub async fn list_my_invitations(
    actor: &Actor,
    deps: &ServerDeps,
) -> CoreResult<Vec<InvitationDetails>> {
    list_invitations_for_email(&actor.email, deps).await
}

/// Every invitation sent for an event, newest first
pub async fn list_event_invitations(
    event_id: EventId,
    deps: &ServerDeps,
) -> CoreResult<Vec<InvitationDetails>> {
    Ok(deps.invitations.list_invitations_for_event(event_id).await?)
}
