pub mod claims;
pub mod gate;
pub mod identity;
pub mod jwt;
pub mod password;

pub use gate::{decode_and_authorize, issue_token, require_role, verify_credentials};
pub use identity::{Identity, ADMIN_ROLE};
