pub mod attendee;

pub use attendee::{AttendeeRecord, AttendeeRole, RsvpStatus};
