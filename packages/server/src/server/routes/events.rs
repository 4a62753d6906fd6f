//! `/events` routes: catalog, membership and per-event invitations.

use axum::{extract::Extension, http::StatusCode, Json};

use crate::common::{EventId, UserId};
use crate::domains::attendees::activities as attendees;
use crate::domains::attendees::{AddAttendeeInput, AttendeeRecord, UpdateAttendanceInput};
use crate::domains::events::activities as events;
use crate::domains::events::{CreateEventInput, Event, EventMembership, UpdateEventInput};
use crate::domains::invitations::activities as invitations;
use crate::domains::invitations::InvitationDetails;
use crate::server::app::AppState;
use crate::server::error::{ApiJson, ApiPath, ApiResult};
use crate::server::middleware::AuthUser;
use crate::server::response::ApiResponse;

type Envelope<T> = Json<ApiResponse<T>>;

pub async fn list_events_handler(
    Extension(state): Extension<AppState>,
) -> ApiResult<Envelope<Vec<Event>>> {
    let events = events::list_events(&state.deps).await?;
    Ok(ApiResponse::data(events))
}

pub async fn create_event_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    ApiJson(input): ApiJson<CreateEventInput>,
) -> ApiResult<(StatusCode, Envelope<Event>)> {
    let event = events::create_event(&user.actor(), input, &state.deps).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::with_message("event created successfully", event),
    ))
}

pub async fn get_event_handler(
    Extension(state): Extension<AppState>,
    ApiPath(event_id): ApiPath<EventId>,
) -> ApiResult<Envelope<Event>> {
    let event = events::get_event(event_id, &state.deps).await?;
    Ok(ApiResponse::data(event))
}

pub async fn events_by_organizer_handler(
    Extension(state): Extension<AppState>,
    ApiPath(organizer_id): ApiPath<UserId>,
) -> ApiResult<Envelope<Vec<Event>>> {
    let events = events::list_events_by_organizer(organizer_id, &state.deps).await?;
    Ok(ApiResponse::data(events))
}

pub async fn my_attending_events_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
) -> ApiResult<Envelope<Vec<EventMembership>>> {
    let memberships = events::list_my_attending_events(&user.actor(), &state.deps).await?;
    Ok(ApiResponse::data(memberships))
}

pub async fn my_organized_events_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
) -> ApiResult<Envelope<Vec<Event>>> {
    let events = events::list_my_organized_events(&user.actor(), &state.deps).await?;
    Ok(ApiResponse::data(events))
}

pub async fn update_event_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    ApiPath(event_id): ApiPath<EventId>,
    ApiJson(input): ApiJson<UpdateEventInput>,
) -> ApiResult<Envelope<Event>> {
    let event = events::update_event(&user.actor(), event_id, input, &state.deps).await?;
    Ok(ApiResponse::with_message("event updated successfully", event))
}

pub async fn delete_event_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    ApiPath(event_id): ApiPath<EventId>,
) -> ApiResult<Envelope<()>> {
    events::delete_event(&user.actor(), event_id, &state.deps).await?;
    Ok(ApiResponse::message("event deleted successfully"))
}

pub async fn list_attendees_handler(
    Extension(state): Extension<AppState>,
    ApiPath(event_id): ApiPath<EventId>,
) -> ApiResult<Envelope<Vec<AttendeeRecord>>> {
    let records = attendees::list_attendees(event_id, &state.deps).await?;
    Ok(ApiResponse::data(records))
}

pub async fn join_event_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    ApiPath(event_id): ApiPath<EventId>,
) -> ApiResult<Envelope<AttendeeRecord>> {
    let record = attendees::join_event(&user.actor(), event_id, &state.deps).await?;
    Ok(ApiResponse::with_message("successfully joined event", record))
}

pub async fn add_attendee_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    ApiPath(event_id): ApiPath<EventId>,
    ApiJson(input): ApiJson<AddAttendeeInput>,
) -> ApiResult<Envelope<AttendeeRecord>> {
    let record = attendees::add_attendee(&user.actor(), event_id, input, &state.deps).await?;
    Ok(ApiResponse::with_message("user added to event successfully", record))
}

pub async fn update_attendance_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    ApiPath(event_id): ApiPath<EventId>,
    ApiJson(input): ApiJson<UpdateAttendanceInput>,
) -> ApiResult<Envelope<AttendeeRecord>> {
    let record =
        attendees::update_attendance_status(&user.actor(), event_id, input, &state.deps).await?;
    Ok(ApiResponse::with_message("attendance status updated", record))
}

pub async fn event_invitations_handler(
    Extension(state): Extension<AppState>,
    _user: AuthUser,
    ApiPath(event_id): ApiPath<EventId>,
) -> ApiResult<Envelope<Vec<InvitationDetails>>> {
    let details = invitations::list_event_invitations(event_id, &state.deps).await?;
    Ok(ApiResponse::data(details))
}
