// Invitations domain - the invitation workflow
//
// Organizer sends an email-addressed invitation; the addressee accepts or
// declines exactly once. Acceptance grants membership with the invited role.
//
// State machine:
//   pending --accept--> accepted
//   pending --decline--> declined

pub mod activities;
pub mod data;
pub mod models;

pub use data::*;
pub use models::*;
