//! Invitation workflow activities.

pub mod queries;
pub mod respond;
pub mod send;

pub use queries::{list_event_invitations, list_invitations_for_email, list_my_invitations};
pub use respond::respond_to_invitation;
pub use send::send_invitation;
