//! Stored record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use restockr_auth::Role;
use restockr_core::{DistributorId, LocationId, TenantId, UserId};

/// A portal login identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub tenant_id: TenantId,
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// A restaurant location.
///
/// `slug` is the stable external identifier used in query params
/// (`loc-demo-1` style); `id` is the internal uuid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub tenant_id: TenantId,
    pub slug: String,
    pub name: String,
    pub city: Option<String>,
    pub region: Option<String>,
}

/// Link between a buyer user and a location they order for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerLocation {
    pub user_id: UserId,
    pub location_id: LocationId,
}

/// A supply distributor serving the tenant's locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distributor {
    pub id: DistributorId,
    pub tenant_id: TenantId,
    pub name: String,
    pub email: String,
    pub region: String,
    pub user_id: Option<UserId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InviteStatus {
    Pending,
    Accepted,
}

/// An outstanding (or accepted) distributor invite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invite {
    pub token: String,
    pub tenant_id: TenantId,
    pub name: String,
    pub email: String,
    pub status: InviteStatus,
    pub created_at: DateTime<Utc>,
    pub accepted_at: Option<DateTime<Utc>>,
}
