// Business domains
pub mod attendees;
pub mod auth;
pub mod events;
pub mod invitations;
pub mod users;
