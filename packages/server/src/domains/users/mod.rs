//! User directory - read-only lookups against registered users
//!
//! Registration and credentials belong to the identity provider. The core only
//! resolves invitee emails to ids and displays inviter emails.

pub mod models;

pub use models::user::User;
