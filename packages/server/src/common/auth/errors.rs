use thiserror::Error;

use super::EventCapability;

/// Authorization errors for event operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("{}", .0.denial_message())]
    NotOrganizer(EventCapability),
}
