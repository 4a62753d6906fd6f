use serde::{Deserialize, Serialize};

use super::{AuthError, EventCapability};
use crate::common::entity_ids::UserId;

/// Anything owned by a single organizer.
pub trait OrganizedResource {
    fn organizer_id(&self) -> UserId;
}

/// The authorization decision: does `acting_user_id` organize `resource`?
pub fn is_organizer<R: OrganizedResource + ?Sized>(acting_user_id: UserId, resource: &R) -> bool {
    resource.organizer_id() == acting_user_id
}

/// Verified identity of the caller.
///
/// Built by the HTTP layer from a validated token and passed explicitly into
/// every guarded operation.
///
/// Usage:
/// ```rust,ignore
/// Actor::new(user_id, email)
///     .can(EventCapability::DeleteEvent)
///     .on(&event)
///     .check()?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub user_id: UserId,
    pub email: String,
}

impl Actor {
    pub fn new(user_id: UserId, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
        }
    }

    /// Specify what capability the actor needs
    pub fn can(&self, capability: EventCapability) -> CapabilityBuilder<'_> {
        CapabilityBuilder {
            actor: self,
            capability,
        }
    }
}

/// Builder after specifying capability
pub struct CapabilityBuilder<'a> {
    actor: &'a Actor,
    capability: EventCapability,
}

impl<'a> CapabilityBuilder<'a> {
    /// Specify the resource the capability applies to
    pub fn on<R: OrganizedResource + ?Sized>(self, resource: &'a R) -> ResourceCheck<'a, R> {
        ResourceCheck {
            actor: self.actor,
            capability: self.capability,
            resource,
        }
    }
}

/// Builder after specifying the resource
pub struct ResourceCheck<'a, R: ?Sized> {
    actor: &'a Actor,
    capability: EventCapability,
    resource: &'a R,
}

impl<R: OrganizedResource + ?Sized> ResourceCheck<'_, R> {
    /// Perform the authorization check
    pub fn check(self) -> Result<(), AuthError> {
        if is_organizer(self.actor.user_id, self.resource) {
            Ok(())
        } else {
            tracing::warn!(
                user_id = %self.actor.user_id,
                organizer_id = %self.resource.organizer_id(),
                capability = ?self.capability,
                "Organizer check failed"
            );
            Err(AuthError::NotOrganizer(self.capability))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OwnedThing(UserId);

    impl OrganizedResource for OwnedThing {
        fn organizer_id(&self) -> UserId {
            self.0
        }
    }

    #[test]
    fn test_is_organizer() {
        let thing = OwnedThing(UserId::new(7));
        assert!(is_organizer(UserId::new(7), &thing));
        assert!(!is_organizer(UserId::new(8), &thing));
    }

    #[test]
    fn test_organizer_passes_check() {
        let actor = Actor::new(UserId::new(1), "owner@example.com");
        let thing = OwnedThing(UserId::new(1));

        let result = actor.can(EventCapability::UpdateEvent).on(&thing).check();

        assert!(result.is_ok());
    }

    #[test]
    fn test_non_organizer_rejected_with_capability() {
        let actor = Actor::new(UserId::new(2), "guest@example.com");
        let thing = OwnedThing(UserId::new(1));

        let result = actor.can(EventCapability::InviteUsers).on(&thing).check();

        assert_eq!(
            result,
            Err(AuthError::NotOrganizer(EventCapability::InviteUsers))
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "only the event creator can invite users to this event"
        );
    }
}
