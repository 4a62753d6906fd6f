// Events domain - the event catalog
//
// Responsibilities:
// - Creating events together with the organizer's membership
// - Listing events (all, by organizer, organized by or attended by the caller)
// - Partial updates and deletion, restricted to the organizer

pub mod activities;
pub mod data;
pub mod models;

pub use data::*;
pub use models::*;
