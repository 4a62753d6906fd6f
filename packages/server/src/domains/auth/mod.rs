// Auth domain - bearer token verification
//
// Identity is issued elsewhere; this service only verifies HS256 tokens and
// turns their claims into an `Actor`.

pub mod jwt;

pub use jwt::{Claims, JwtService};
