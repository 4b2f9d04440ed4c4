use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use restockr_core::{TenantId, UserId};

use crate::Role;

/// Opaque bearer token identifying a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Mint a fresh opaque token (32 hex chars).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn from_string(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A demo login session.
///
/// This is the minimal state Restockr keeps per authenticated portal user
/// once the email-only login has succeeded. Validation of the time window is
/// deterministic and transport-agnostic; looking the token up is the
/// store's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: SessionToken,
    pub user_id: UserId,
    pub tenant_id: TenantId,
    pub role: Role,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionValidationError {
    #[error("session has expired")]
    Expired,

    #[error("session not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid session time window (expires_at <= issued_at)")]
    InvalidTimeWindow,
}

/// Deterministically validate a session's time window.
pub fn validate_session(session: &Session, now: DateTime<Utc>) -> Result<(), SessionValidationError> {
    if session.expires_at <= session.issued_at {
        return Err(SessionValidationError::InvalidTimeWindow);
    }
    if now < session.issued_at {
        return Err(SessionValidationError::NotYetValid);
    }
    if now >= session.expires_at {
        return Err(SessionValidationError::Expired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session(issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Session {
        Session {
            token: SessionToken::generate(),
            user_id: UserId::new(),
            tenant_id: TenantId::new(),
            role: Role::Buyer,
            issued_at,
            expires_at,
        }
    }

    #[test]
    fn valid_window_passes() {
        let now = Utc::now();
        let s = session(now - Duration::minutes(1), now + Duration::hours(8));
        assert_eq!(validate_session(&s, now), Ok(()));
    }

    #[test]
    fn expired_session_is_rejected() {
        let now = Utc::now();
        let s = session(now - Duration::hours(9), now - Duration::hours(1));
        assert_eq!(validate_session(&s, now), Err(SessionValidationError::Expired));
    }

    #[test]
    fn future_session_is_rejected() {
        let now = Utc::now();
        let s = session(now + Duration::minutes(5), now + Duration::hours(8));
        assert_eq!(validate_session(&s, now), Err(SessionValidationError::NotYetValid));
    }

    #[test]
    fn inverted_window_is_rejected() {
        let now = Utc::now();
        let s = session(now, now - Duration::seconds(1));
        assert_eq!(
            validate_session(&s, now),
            Err(SessionValidationError::InvalidTimeWindow)
        );
    }

    #[test]
    fn tokens_are_opaque_hex_and_unique() {
        let a = SessionToken::generate();
        let b = SessionToken::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 32);
    }
}
