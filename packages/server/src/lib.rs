// Event Planner - API Core
//
// Backend for event membership and invitations: an event catalog, an
// attendee registry with one record per (event, user), and an invitation
// workflow whose acceptance grants membership.
//
// Domain logic lives in domains/*/activities and reaches storage only
// through the kernel's Base* traits.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
