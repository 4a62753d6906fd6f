//! Server dependencies for activities (using traits for testability)
//!
//! This module provides the central dependency container used by all domain
//! activities. Storage is reached only through the `Base*` traits so tests can
//! swap PostgreSQL for in-memory doubles.

use sqlx::PgPool;
use std::sync::Arc;

use super::postgres_store::PostgresStore;
use super::traits::{BaseAttendeeStore, BaseEventStore, BaseInvitationStore, BaseUserDirectory};

/// Server dependencies accessible to activities
#[derive(Clone)]
pub struct ServerDeps {
    pub events: Arc<dyn BaseEventStore>,
    pub attendees: Arc<dyn BaseAttendeeStore>,
    pub invitations: Arc<dyn BaseInvitationStore>,
    pub users: Arc<dyn BaseUserDirectory>,
}

impl ServerDeps {
    pub fn new(
        events: Arc<dyn BaseEventStore>,
        attendees: Arc<dyn BaseAttendeeStore>,
        invitations: Arc<dyn BaseInvitationStore>,
        users: Arc<dyn BaseUserDirectory>,
    ) -> Self {
        Self {
            events,
            attendees,
            invitations,
            users,
        }
    }

    /// All stores backed by one PostgreSQL pool
    pub fn postgres(pool: PgPool) -> Self {
        let store = Arc::new(PostgresStore::new(pool));
        Self::new(store.clone(), store.clone(), store.clone(), store)
    }
}
