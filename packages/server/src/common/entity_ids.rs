//! Typed ID definitions for all domain entities.
//!
//! ```rust
//! use server_core::common::{EventId, UserId};
//!
//! let user_id = UserId::new(1);
//! let event_id = EventId::new(1);
//!
//! // This would be a compile error:
//! // let wrong: EventId = user_id;
//! # let _ = (user_id, event_id);
//! ```

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for User entities (directory entries).
pub struct User;

/// Marker type for Event entities.
pub struct Event;

/// Marker type for AttendeeRecord entities (event memberships).
pub struct Attendee;

/// Marker type for Invitation entities.
pub struct Invitation;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for User entities.
pub type UserId = Id<User>;

/// Typed ID for Event entities.
pub type EventId = Id<Event>;

/// Typed ID for AttendeeRecord entities.
pub type AttendeeId = Id<Attendee>;

/// Typed ID for Invitation entities.
pub type InvitationId = Id<Invitation>;
