use tracing::{info, warn};

use crate::common::{Actor, CoreError, CoreResult, EventCapability, EventId, UserId};
use crate::domains::attendees::data::{AddAttendeeInput, UpdateAttendanceInput};
use crate::domains::attendees::models::{AttendeeRecord, AttendeeRole};
use crate::domains::events::activities::get_event;
use crate::kernel::ServerDeps;

/// Grant or change a membership.
///
/// Exactly one record exists afterwards. A new record starts as `going`; an
/// existing one gets `role` and keeps its status. Last writer wins on role.
pub async fn upsert_membership(
    event_id: EventId,
    user_id: UserId,
    role: AttendeeRole,
    deps: &ServerDeps,
) -> CoreResult<AttendeeRecord> {
    let record = deps
        .attendees
        .upsert_membership(event_id, user_id, role)
        .await?;

    info!(
        event_id = %event_id,
        user_id = %user_id,
        role = %record.role,
        status = %record.status,
        "Membership upserted"
    );
    Ok(record)
}

/// Self-service join as an attendee.
pub async fn join_event(
    actor: &Actor,
    event_id: EventId,
    deps: &ServerDeps,
) -> CoreResult<AttendeeRecord> {
    get_event(event_id, deps).await?;
    upsert_membership(event_id, actor.user_id, AttendeeRole::Attendee, deps).await
}

/// Organizer grants membership to a known user directly.
pub async fn add_attendee(
    actor: &Actor,
    event_id: EventId,
    input: AddAttendeeInput,
    deps: &ServerDeps,
) -> CoreResult<AttendeeRecord> {
    let (user_id, role) = input.validate()?;
    let event = get_event(event_id, deps).await?;

    actor.can(EventCapability::AddAttendees).on(&event).check()?;

    if !deps.users.user_exists(user_id).await? {
        warn!(event_id = %event_id, user_id = %user_id, "Direct add for unknown user");
        return Err(CoreError::NotFound("user"));
    }

    upsert_membership(event_id, user_id, role, deps).await
}

/// Set the actor's RSVP status. The actor must already be a member.
pub async fn update_attendance_status(
    actor: &Actor,
    event_id: EventId,
    input: UpdateAttendanceInput,
    deps: &ServerDeps,
) -> CoreResult<AttendeeRecord> {
    let status = input.validate()?;

    let Some(record) = deps
        .attendees
        .set_attendance_status(event_id, actor.user_id, status)
        .await?
    else {
        warn!(event_id = %event_id, user_id = %actor.user_id, "No membership to update");
        return Err(CoreError::NotFound("attendee record"));
    };

    info!(event_id = %event_id, user_id = %actor.user_id, status = %status, "Attendance updated");
    Ok(record)
}
