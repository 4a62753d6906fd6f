// TestDependencies - in-memory implementations for testing
//
// One `InMemoryStore` implements every storage trait, so it can answer join
// queries (invitation details, attended events) the way PostgreSQL does.
// Each trait method runs inside a single lock acquisition, which gives the
// same atomicity as the conditional writes used against PostgreSQL.

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::deps::ServerDeps;
use super::traits::{BaseAttendeeStore, BaseEventStore, BaseInvitationStore, BaseUserDirectory};
use crate::common::{AttendeeId, EventId, InvitationId, UserId};
use crate::domains::attendees::models::{AttendeeRecord, AttendeeRole, RsvpStatus};
use crate::domains::events::models::{Event, EventChanges, EventMembership, NewEvent};
use crate::domains::invitations::models::{
    Invitation, InvitationDetails, InvitationStatus, NewInvitation,
};

#[derive(Default)]
struct StoreState {
    next_id: i64,
    users: BTreeMap<UserId, String>,
    events: BTreeMap<EventId, Event>,
    attendees: Vec<AttendeeRecord>,
    invitations: BTreeMap<InvitationId, Invitation>,
}

impl StoreState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn upsert(&mut self, event_id: EventId, user_id: UserId, role: AttendeeRole) -> AttendeeRecord {
        if let Some(existing) = self
            .attendees
            .iter_mut()
            .find(|a| a.event_id == event_id && a.user_id == user_id)
        {
            existing.role = role;
            return existing.clone();
        }

        let record = AttendeeRecord {
            id: AttendeeId::new(self.next_id()),
            event_id,
            user_id,
            role,
            status: RsvpStatus::Going,
            created_at: Utc::now(),
        };
        self.attendees.push(record.clone());
        record
    }

    fn details(&self, invitation: &Invitation) -> Option<InvitationDetails> {
        let event = self.events.get(&invitation.event_id)?;
        let inviter_email = self.users.get(&invitation.inviter_id)?;
        Some(InvitationDetails {
            invitation: invitation.clone(),
            event_title: event.title.clone(),
            event_date: event.date.format("%Y-%m-%d").to_string(),
            event_time: event.time.format("%H:%M:%S").to_string(),
            event_location: event.location.clone(),
            inviter_email: inviter_email.clone(),
        })
    }

    fn details_where(&self, predicate: impl Fn(&Invitation) -> bool) -> Vec<InvitationDetails> {
        let mut rows: Vec<InvitationDetails> = self
            .invitations
            .values()
            .filter(|i| predicate(*i))
            .filter_map(|i| self.details(i))
            .collect();
        rows.sort_by(|a, b| {
            (b.invitation.created_at, b.invitation.id).cmp(&(a.invitation.created_at, a.invitation.id))
        });
        rows
    }
}

/// In-memory replacement for `PostgresStore`
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
    fail_membership_writes: AtomicBool,
    membership_writes: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// `ServerDeps` with every store pointing at this instance
    pub fn deps(self: &Arc<Self>) -> ServerDeps {
        ServerDeps::new(self.clone(), self.clone(), self.clone(), self.clone())
    }

    /// Add a user to the directory (what registration would do)
    pub fn register_user(&self, email: &str) -> UserId {
        let mut state = self.state.lock().unwrap();
        if let Some((id, _)) = state.users.iter().find(|(_, e)| e.as_str() == email) {
            return *id;
        }
        let id = UserId::new(state.next_id());
        state.users.insert(id, email.to_string());
        id
    }

    /// Make every subsequent `upsert_membership` call fail
    pub fn fail_membership_writes(&self, fail: bool) {
        self.fail_membership_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of `upsert_membership` calls seen (including failed ones)
    pub fn membership_write_count(&self) -> usize {
        self.membership_writes.load(Ordering::SeqCst)
    }

    pub fn event_count(&self) -> usize {
        self.state.lock().unwrap().events.len()
    }

    pub fn invitation_count(&self) -> usize {
        self.state.lock().unwrap().invitations.len()
    }

    /// Records for one (event, user) pair. Anything above one is a bug.
    pub fn membership_count(&self, event_id: EventId, user_id: UserId) -> usize {
        self.state
            .lock()
            .unwrap()
            .attendees
            .iter()
            .filter(|a| a.event_id == event_id && a.user_id == user_id)
            .count()
    }
}

#[async_trait]
impl BaseEventStore for InMemoryStore {
    async fn create_event_with_organizer(&self, new: NewEvent) -> Result<Event> {
        let mut state = self.state.lock().unwrap();
        let event = Event {
            id: EventId::new(state.next_id()),
            title: new.title,
            description: new.description,
            date: new.date,
            time: new.time,
            location: new.location,
            organizer_id: new.organizer_id,
            created_at: Utc::now(),
        };
        state.events.insert(event.id, event.clone());
        state.upsert(event.id, event.organizer_id, AttendeeRole::Organizer);
        Ok(event)
    }

    async fn find_event(&self, id: EventId) -> Result<Option<Event>> {
        Ok(self.state.lock().unwrap().events.get(&id).cloned())
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        let mut events: Vec<Event> = self.state.lock().unwrap().events.values().cloned().collect();
        events.sort_by(|a, b| (b.date, b.id).cmp(&(a.date, a.id)));
        Ok(events)
    }

    async fn list_events_by_organizer(&self, organizer_id: UserId) -> Result<Vec<Event>> {
        let mut events = self.list_events().await?;
        events.retain(|e| e.organizer_id == organizer_id);
        Ok(events)
    }

    async fn list_events_attended_by(&self, user_id: UserId) -> Result<Vec<EventMembership>> {
        let state = self.state.lock().unwrap();
        let mut rows: Vec<EventMembership> = state
            .attendees
            .iter()
            .filter(|a| a.user_id == user_id)
            .filter_map(|a| {
                state.events.get(&a.event_id).map(|event| EventMembership {
                    event: event.clone(),
                    role: a.role,
                    status: a.status,
                })
            })
            .collect();
        rows.sort_by(|a, b| (b.event.date, b.event.time).cmp(&(a.event.date, a.event.time)));
        Ok(rows)
    }

    async fn update_event(&self, id: EventId, changes: EventChanges) -> Result<Option<Event>> {
        let mut state = self.state.lock().unwrap();
        Ok(state.events.get_mut(&id).map(|event| {
            changes.apply_to(event);
            event.clone()
        }))
    }

    async fn delete_event(&self, id: EventId) -> Result<bool> {
        let mut state = self.state.lock().unwrap();
        let removed = state.events.remove(&id).is_some();
        if removed {
            state.attendees.retain(|a| a.event_id != id);
            state.invitations.retain(|_, i| i.event_id != id);
        }
        Ok(removed)
    }
}

#[async_trait]
impl BaseAttendeeStore for InMemoryStore {
    async fn upsert_membership(
        &self,
        event_id: EventId,
        user_id: UserId,
        role: AttendeeRole,
    ) -> Result<AttendeeRecord> {
        self.membership_writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_membership_writes.load(Ordering::SeqCst) {
            bail!("simulated store failure writing event_attendees");
        }
        let mut state = self.state.lock().unwrap();
        if !state.events.contains_key(&event_id) || !state.users.contains_key(&user_id) {
            bail!("insert or update on table \"event_attendees\" violates foreign key constraint");
        }
        Ok(state.upsert(event_id, user_id, role))
    }

    async fn set_attendance_status(
        &self,
        event_id: EventId,
        user_id: UserId,
        status: RsvpStatus,
    ) -> Result<Option<AttendeeRecord>> {
        let mut state = self.state.lock().unwrap();
        Ok(state
            .attendees
            .iter_mut()
            .find(|a| a.event_id == event_id && a.user_id == user_id)
            .map(|record| {
                record.status = status;
                record.clone()
            }))
    }

    async fn list_attendees(&self, event_id: EventId) -> Result<Vec<AttendeeRecord>> {
        let mut records: Vec<AttendeeRecord> = self
            .state
            .lock()
            .unwrap()
            .attendees
            .iter()
            .filter(|a| a.event_id == event_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(records)
    }
}

#[async_trait]
impl BaseInvitationStore for InMemoryStore {
    async fn insert_invitation(&self, new: NewInvitation) -> Result<Invitation> {
        let mut state = self.state.lock().unwrap();
        if !state.events.contains_key(&new.event_id) {
            bail!("insert or update on table \"invitations\" violates foreign key constraint");
        }
        let invitation = Invitation {
            id: InvitationId::new(state.next_id()),
            event_id: new.event_id,
            inviter_id: new.inviter_id,
            invitee_email: new.invitee_email,
            invitee_id: new.invitee_id,
            role: new.role,
            status: InvitationStatus::Pending,
            message: new.message,
            created_at: Utc::now(),
            responded_at: None,
        };
        state.invitations.insert(invitation.id, invitation.clone());
        Ok(invitation)
    }

    async fn find_invitation(&self, id: InvitationId) -> Result<Option<Invitation>> {
        Ok(self.state.lock().unwrap().invitations.get(&id).cloned())
    }

    async fn mark_invitation_responded(
        &self,
        id: InvitationId,
        status: InvitationStatus,
        invitee_id: Option<UserId>,
    ) -> Result<Option<Invitation>> {
        let mut state = self.state.lock().unwrap();
        Ok(state
            .invitations
            .get_mut(&id)
            .filter(|i| i.status == InvitationStatus::Pending)
            .map(|invitation| {
                invitation.status = status;
                invitation.responded_at = Some(Utc::now());
                invitation.invitee_id = invitation.invitee_id.or(invitee_id);
                invitation.clone()
            }))
    }

    async fn list_invitations_for_email(&self, email: &str) -> Result<Vec<InvitationDetails>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .details_where(|i| i.invitee_email == email))
    }

    async fn list_invitations_for_event(
        &self,
        event_id: EventId,
    ) -> Result<Vec<InvitationDetails>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .details_where(|i| i.event_id == event_id))
    }
}

#[async_trait]
impl BaseUserDirectory for InMemoryStore {
    async fn resolve_user_id_by_email(&self, email: &str) -> Result<Option<UserId>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|(_, e)| e.as_str() == email)
            .map(|(id, _)| *id))
    }

    async fn user_exists(&self, user_id: UserId) -> Result<bool> {
        Ok(self.state.lock().unwrap().users.contains_key(&user_id))
    }
}
