pub mod event;

pub use event::{Event, EventChanges, EventMembership, NewEvent};
