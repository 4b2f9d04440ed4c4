//! `restockr-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it defines
//! the closed role set, the bearer-session model with deterministic expiry
//! validation, and the role check. Session persistence lives in
//! `restockr-store`; token transport lives in the API middleware.

pub mod authorize;
pub mod roles;
pub mod session;

pub use authorize::{AuthzError, require_role};
pub use roles::Role;
pub use session::{Session, SessionToken, SessionValidationError, validate_session};
