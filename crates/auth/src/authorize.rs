use thiserror::Error;

use crate::Role;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: requires one of {0:?}")]
    Forbidden(Vec<Role>),
}

/// Check a portal role against a route's allowed set.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn require_role(role: Role, allowed: &[Role]) -> Result<(), AuthzError> {
    if allowed.contains(&role) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden(allowed.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_role_passes() {
        assert!(require_role(Role::Buyer, &[Role::Buyer, Role::Founder]).is_ok());
    }

    #[test]
    fn disallowed_role_is_forbidden() {
        let err = require_role(Role::Distributor, &[Role::Founder]).unwrap_err();
        assert_eq!(err, AuthzError::Forbidden(vec![Role::Founder]));
    }
}
