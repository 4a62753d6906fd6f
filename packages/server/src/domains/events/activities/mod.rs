//! Event catalog activities.

pub mod mutations;
pub mod queries;

pub use mutations::{create_event, delete_event, update_event};
pub use queries::{
    get_event, list_events, list_events_by_organizer, list_my_attending_events,
    list_my_organized_events,
};
