/// Organizer-only capabilities on an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCapability {
    /// Change title, description, schedule or location
    UpdateEvent,

    /// Remove the event (cascades memberships and invitations)
    DeleteEvent,

    /// Send email invitations
    InviteUsers,

    /// Grant membership to a known user directly
    AddAttendees,
}

impl EventCapability {
    /// Message returned to a caller who lacks this capability.
    ///
    /// Clients match on these strings, so they are kept stable.
    pub fn denial_message(&self) -> &'static str {
        match self {
            EventCapability::UpdateEvent => "you are not authorized to update this event",
            EventCapability::DeleteEvent => "you are not authorized to delete this event",
            EventCapability::InviteUsers | EventCapability::AddAttendees => {
                "only the event creator can invite users to this event"
            }
        }
    }
}
