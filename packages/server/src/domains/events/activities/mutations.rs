use tracing::{info, warn};

use crate::common::{Actor, CoreError, CoreResult, EventCapability, EventId};
use crate::domains::events::data::{CreateEventInput, UpdateEventInput};
use crate::domains::events::models::Event;
use crate::kernel::ServerDeps;

use super::queries::get_event;

/// Create an event owned by `actor`.
///
/// The organizer membership is written in the same store transaction, so the
/// event is never visible without it.
pub async fn create_event(
    actor: &Actor,
    input: CreateEventInput,
    deps: &ServerDeps,
) -> CoreResult<Event> {
    let new_event = input.into_new_event(actor.user_id)?;

    let event = deps.events.create_event_with_organizer(new_event).await?;
    info!(
        event_id = %event.id,
        organizer_id = %event.organizer_id,
        date = %event.date,
        "Event created"
    );
    Ok(event)
}

/// Apply a partial update. Only the organizer may update.
pub async fn update_event(
    actor: &Actor,
    event_id: EventId,
    input: UpdateEventInput,
    deps: &ServerDeps,
) -> CoreResult<Event> {
    let changes = input.into_changes()?;
    let event = get_event(event_id, deps).await?;

    actor.can(EventCapability::UpdateEvent).on(&event).check()?;

    if changes.is_empty() {
        return Ok(event);
    }

    let updated = deps
        .events
        .update_event(event_id, changes)
        .await?
        .ok_or(CoreError::NotFound("event"))?;

    info!(event_id = %event_id, user_id = %actor.user_id, "Event updated");
    Ok(updated)
}

/// Delete an event with its memberships and invitations. Only the organizer
/// may delete.
pub async fn delete_event(actor: &Actor, event_id: EventId, deps: &ServerDeps) -> CoreResult<()> {
    let event = get_event(event_id, deps).await?;

    actor.can(EventCapability::DeleteEvent).on(&event).check()?;

    if !deps.events.delete_event(event_id).await? {
        warn!(event_id = %event_id, "Event disappeared before delete");
        return Err(CoreError::NotFound("event"));
    }

    info!(event_id = %event_id, user_id = %actor.user_id, "Event deleted");
    Ok(())
}
