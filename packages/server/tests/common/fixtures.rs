//! Test fixtures for creating test data.
//!
//! These fixtures go through the activities, so every row they create
//! satisfies the same rules as production data.

use server_core::common::{Actor, EventId};
use server_core::domains::events::activities::create_event;
use server_core::domains::events::{CreateEventInput, Event};
use server_core::domains::invitations::activities::send_invitation;
use server_core::domains::invitations::{Invitation, SendInvitationInput};
use server_core::kernel::ServerDeps;

pub fn event_input(title: &str, date: &str) -> CreateEventInput {
    CreateEventInput {
        title: title.to_string(),
        description: format!("{} description", title),
        date: date.to_string(),
        time: "18:00:00".to_string(),
        location: "Community Hall".to_string(),
    }
}

/// Create an event organized by `organizer`
pub async fn create_test_event(deps: &ServerDeps, organizer: &Actor, title: &str) -> Event {
    create_event(organizer, event_input(title, "2025-06-01"), deps)
        .await
        .expect("Failed to create test event")
}

pub fn invitation_input(event_id: EventId, email: &str, role: &str) -> SendInvitationInput {
    SendInvitationInput {
        event_id: event_id.as_i64(),
        invitee_email: email.to_string(),
        role: role.to_string(),
        message: Some("Hope you can make it".to_string()),
    }
}

/// Send an invitation from the event's organizer
pub async fn create_test_invitation(
    deps: &ServerDeps,
    organizer: &Actor,
    event_id: EventId,
    email: &str,
    role: &str,
) -> Invitation {
    send_invitation(organizer, invitation_input(event_id, email, role), deps)
        .await
        .expect("Failed to send test invitation")
}

/// Unique email for tests sharing one database
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.com", prefix, uuid::Uuid::new_v4().simple())
}
