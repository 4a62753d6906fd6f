//! PostgreSQL implementation of the storage traits.
//!
//! Thin adapter: every method delegates to a model query so all SQL stays in
//! `domains/*/models`.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use super::traits::{BaseAttendeeStore, BaseEventStore, BaseInvitationStore, BaseUserDirectory};
use crate::common::{EventId, InvitationId, UserId};
use crate::domains::attendees::models::{AttendeeRecord, AttendeeRole, RsvpStatus};
use crate::domains::events::models::{Event, EventChanges, EventMembership, NewEvent};
use crate::domains::invitations::models::{
    Invitation, InvitationDetails, InvitationStatus, NewInvitation,
};
use crate::domains::users::User;

#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseEventStore for PostgresStore {
    async fn create_event_with_organizer(&self, new: NewEvent) -> Result<Event> {
        Event::create_with_organizer(new, &self.pool).await
    }

    async fn find_event(&self, id: EventId) -> Result<Option<Event>> {
        Event::find_by_id(id, &self.pool).await
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        Event::find_all(&self.pool).await
    }

    async fn list_events_by_organizer(&self, organizer_id: UserId) -> Result<Vec<Event>> {
        Event::find_by_organizer(organizer_id, &self.pool).await
    }

    async fn list_events_attended_by(&self, user_id: UserId) -> Result<Vec<EventMembership>> {
        Event::find_attended_by(user_id, &self.pool).await
    }

    async fn update_event(&self, id: EventId, changes: EventChanges) -> Result<Option<Event>> {
        Event::update(id, changes, &self.pool).await
    }

    async fn delete_event(&self, id: EventId) -> Result<bool> {
        Event::delete(id, &self.pool).await
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl BaseAttendeeStore for PostgresStore {
    async fn upsert_membership(
        &self,
        event_id: EventId,
        user_id: UserId,
        role: AttendeeRole,
    ) -> Result<AttendeeRecord> {
        AttendeeRecord::upsert(event_id, user_id, role, &self.pool).await
    }

    async fn set_attendance_status(
        &self,
        event_id: EventId,
        user_id: UserId,
        status: RsvpStatus,
    ) -> Result<Option<AttendeeRecord>> {
        AttendeeRecord::update_status(event_id, user_id, status, &self.pool).await
    }

    async fn list_attendees(&self, event_id: EventId) -> Result<Vec<AttendeeRecord>> {
        AttendeeRecord::find_by_event(event_id, &self.pool).await
    }
}

#[async_trait]
impl BaseInvitationStore for PostgresStore {
    async fn insert_invitation(&self, new: NewInvitation) -> Result<Invitation> {
        Invitation::create(new, &self.pool).await
    }

    async fn find_invitation(&self, id: InvitationId) -> Result<Option<Invitation>> {
        Invitation::find_by_id(id, &self.pool).await
    }

    async fn mark_invitation_responded(
        &self,
        id: InvitationId,
        status: InvitationStatus,
        invitee_id: Option<UserId>,
    ) -> Result<Option<Invitation>> {
        Invitation::mark_responded(id, status, invitee_id, &self.pool).await
    }

    async fn list_invitations_for_email(&self, email: &str) -> Result<Vec<InvitationDetails>> {
        Invitation::find_details_by_email(email, &self.pool).await
    }

    async fn list_invitations_for_event(
        &self,
        event_id: EventId,
    ) -> Result<Vec<InvitationDetails>> {
        Invitation::find_details_by_event(event_id, &self.pool).await
    }
}

#[async_trait]
impl BaseUserDirectory for PostgresStore {
    async fn resolve_user_id_by_email(&self, email: &str) -> Result<Option<UserId>> {
        User::resolve_id_by_email(email, &self.pool).await
    }

    async fn user_exists(&self, user_id: UserId) -> Result<bool> {
        User::exists(user_id, &self.pool).await
    }
}
