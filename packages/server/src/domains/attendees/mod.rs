// Attendees domain - the attendee registry
//
// One membership record per (event, user). Every write goes through the
// atomic upsert, whether it comes from the organizer auto-membership, a
// self-join, a direct grant or an accepted invitation.

pub mod activities;
pub mod data;
pub mod models;

pub use data::*;
pub use models::*;
