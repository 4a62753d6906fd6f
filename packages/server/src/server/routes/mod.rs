// HTTP routes
pub mod events;
pub mod health;
pub mod invitations;

pub use events::*;
pub use health::*;
pub use invitations::*;
