// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Authorization, validation and state-machine rules live in the domain
// activities that call these traits.
//
// Naming convention: Base* for trait names (e.g., BaseEventStore)

use anyhow::Result;
use async_trait::async_trait;

use crate::common::{EventId, InvitationId, UserId};
use crate::domains::attendees::models::{AttendeeRecord, AttendeeRole, RsvpStatus};
use crate::domains::events::models::{Event, EventChanges, EventMembership, NewEvent};
use crate::domains::invitations::models::{
    Invitation, InvitationDetails, InvitationStatus, NewInvitation,
};

// =============================================================================
// Event Catalog storage
// =============================================================================

#[async_trait]
pub trait BaseEventStore: Send + Sync {
    /// Persist the event and its organizer's membership (role organizer,
    /// status going) atomically.
    async fn create_event_with_organizer(&self, new: NewEvent) -> Result<Event>;

    async fn find_event(&self, id: EventId) -> Result<Option<Event>>;

    /// All events, latest date first
    async fn list_events(&self) -> Result<Vec<Event>>;

    async fn list_events_by_organizer(&self, organizer_id: UserId) -> Result<Vec<Event>>;

    async fn list_events_attended_by(&self, user_id: UserId) -> Result<Vec<EventMembership>>;

    /// `None` if the event does not exist
    async fn update_event(&self, id: EventId, changes: EventChanges) -> Result<Option<Event>>;

    /// Returns whether anything was deleted
    async fn delete_event(&self, id: EventId) -> Result<bool>;

    /// Liveness probe for the health endpoint
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

// =============================================================================
// Attendee Registry storage
// =============================================================================

#[async_trait]
pub trait BaseAttendeeStore: Send + Sync {
    /// Atomic insert-or-overwrite-role keyed on (event_id, user_id).
    /// New records start as `going`; existing status is preserved.
    async fn upsert_membership(
        &self,
        event_id: EventId,
        user_id: UserId,
        role: AttendeeRole,
    ) -> Result<AttendeeRecord>;

    /// `None` if the user has no membership in the event
    async fn set_attendance_status(
        &self,
        event_id: EventId,
        user_id: UserId,
        status: RsvpStatus,
    ) -> Result<Option<AttendeeRecord>>;

    /// Newest first
    async fn list_attendees(&self, event_id: EventId) -> Result<Vec<AttendeeRecord>>;
}

// =============================================================================
// Invitation Workflow storage
// =============================================================================

#[async_trait]
pub trait BaseInvitationStore: Send + Sync {
    async fn insert_invitation(&self, new: NewInvitation) -> Result<Invitation>;

    async fn find_invitation(&self, id: InvitationId) -> Result<Option<Invitation>>;

    /// Compare-and-swap from `pending` to `status`, stamping `responded_at`.
    /// Returns `None` when the invitation is missing or no longer pending.
    async fn mark_invitation_responded(
        &self,
        id: InvitationId,
        status: InvitationStatus,
        invitee_id: Option<UserId>,
    ) -> Result<Option<Invitation>>;

    /// Newest first
    async fn list_invitations_for_email(&self, email: &str) -> Result<Vec<InvitationDetails>>;

    /// Newest first
    async fn list_invitations_for_event(&self, event_id: EventId)
        -> Result<Vec<InvitationDetails>>;
}

// =============================================================================
// User Directory
// =============================================================================

#[async_trait]
pub trait BaseUserDirectory: Send + Sync {
    async fn resolve_user_id_by_email(&self, email: &str) -> Result<Option<UserId>>;

    async fn user_exists(&self, user_id: UserId) -> Result<bool>;
}
