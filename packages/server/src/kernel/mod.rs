//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod postgres_store;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use postgres_store::PostgresStore;
pub use test_dependencies::InMemoryStore;
pub use traits::{BaseAttendeeStore, BaseEventStore, BaseInvitationStore, BaseUserDirectory};
