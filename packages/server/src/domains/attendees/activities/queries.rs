use crate::common::{CoreResult, EventId};
use crate::domains::attendees::models::AttendeeRecord;
use crate::kernel::ServerDeps;

/// All membership records of an event, newest first. Public.
pub async fn list_attendees(event_id: EventId, deps: &ServerDeps) -> CoreResult<Vec<AttendeeRecord>> {
    Ok(deps.attendees.list_attendees(event_id).await?)
}
