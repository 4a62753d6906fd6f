pub mod invitation;

pub use invitation::{
    Invitation, InvitationDecision, InvitationDetails, InvitationStatus, NewInvitation,
};
