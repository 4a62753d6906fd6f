use tracing::debug;

use crate::common::{Actor, CoreError, CoreResult, EventId, UserId};
use crate::domains::events::models::{Event, EventMembership};
use crate::kernel::ServerDeps;

pub async fn get_event(event_id: EventId, deps: &ServerDeps) -> CoreResult<Event> {
    deps.events
        .find_event(event_id)
        .await?
        .ok_or(CoreError::NotFound("event"))
}

pub async fn list_events(deps: &ServerDeps) -> CoreResult<Vec<Event>> {
    Ok(deps.events.list_events().await?)
}

pub async fn list_events_by_organizer(
    organizer_id: UserId,
    deps: &ServerDeps,
) -> CoreResult<Vec<Event>> {
    Ok(deps.events.list_events_by_organizer(organizer_id).await?)
}

/// Events the actor created
pub async fn list_my_organized_events(actor: &Actor, deps: &ServerDeps) -> CoreResult<Vec<Event>> {
    list_events_by_organizer(actor.user_id, deps).await
}

/// Events the actor is a member of, with the actor's role and RSVP status.
/// Ordered by date then time, newest first.
pub async fn list_my_attending_events(
    actor: &Actor,
    deps: &ServerDeps,
) -> CoreResult<Vec<EventMembership>> {
    let memberships = deps.events.list_events_attended_by(actor.user_id).await?;
    debug!(user_id = %actor.user_id, count = memberships.len(), "Loaded attended events");
    Ok(memberships)
}
