/// Authorization module for event operations
///
/// Provides a fluent API for organizer-only checks in activity code:
///
/// ```rust,ignore
/// use crate::common::auth::{Actor, EventCapability};
///
/// actor
///     .can(EventCapability::UpdateEvent)
///     .on(&event)
///     .check()?;
/// ```
///
/// The decision itself is the pure [`is_organizer`] function; the builder only
/// turns a negative decision into a capability-specific `AuthError`.

mod builder;
mod capability;
mod errors;

pub use builder::{is_organizer, Actor, CapabilityBuilder, OrganizedResource, ResourceCheck};
pub use capability::EventCapability;
pub use errors::AuthError;
