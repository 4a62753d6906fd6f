//! Attendee registry activities.

pub mod mutations;
pub mod queries;

pub use mutations::{add_attendee, join_event, update_attendance_status, upsert_membership};
pub use queries::list_attendees;
