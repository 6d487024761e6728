//! Authentication — session state machine, user profile, roles, guards.
//!
//! ## Security model
//!
//! - The backend authenticates with an HTTP-only session cookie. The SDK
//!   never reads, stores, or exposes it; the cookie jar carries it on every
//!   request automatically.
//! - Mutating requests additionally require the anti-forgery token obtained
//!   by the CSRF bootstrap (`/sanctum/csrf-cookie`).
//! - Logout always clears local session state, whether or not the network
//!   call to `/api/auth/logout` succeeds — the user's intent to leave the
//!   authenticated state does not depend on transport outcome.
//!
//! ## Session hydration
//!
//! Call `client.auth().initialize()` at application start. It runs the CSRF
//! bootstrap (best-effort) and `GET /api/me`; the outcome decides whether the
//! session lands in `Authenticated` or `Unauthenticated`.

pub mod client;
pub mod guard;
pub mod session;

use serde::{Deserialize, Serialize};

use crate::domain::tenant::Tenant;
use chrono::{DateTime, Utc};

// ============================================================================
// User profile types
// ============================================================================

/// A back-office user account.
///
/// Returned by `client.auth().initialize()`, `login()` and `check_session()`.
/// Immutable from the client's perspective between identity fetches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verified_at: Option<DateTime<Utc>>,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

/// Account status of a back-office user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Suspended,
}

// ============================================================================
// Roles
// ============================================================================

/// Back-office role. Ownership is a strict superset of admin rights,
/// encoded as a one-directional override rather than a set hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Admin => "admin",
        }
    }

    /// Whether a holder of `self` may act with the rights of `required`.
    pub fn permits(self, required: Role) -> bool {
        self == Role::Owner || self == required
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Permission check over an optional role. An absent role never passes.
pub fn has_permission(role: Option<Role>, required: Role) -> bool {
    role.map(|r| r.permits(required)).unwrap_or(false)
}

// ============================================================================
// Wire types
// ============================================================================

/// Body for POST `/api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Envelope from POST `/api/auth/login`.
///
/// The backend returns the full profile in the login response, so no separate
/// identity round-trip is needed after a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginEnvelope {
    pub user: User,
    pub tenant: Tenant,
}

/// Envelope from GET `/api/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeEnvelope {
    pub user: User,
    pub tenant: Tenant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_permits_admin_rights() {
        assert!(Role::Owner.permits(Role::Admin));
        assert!(Role::Owner.permits(Role::Owner));
    }

    #[test]
    fn test_admin_does_not_permit_owner_rights() {
        assert!(!Role::Admin.permits(Role::Owner));
        assert!(Role::Admin.permits(Role::Admin));
    }

    #[test]
    fn test_has_permission_matrix() {
        assert!(has_permission(Some(Role::Owner), Role::Admin));
        assert!(!has_permission(Some(Role::Admin), Role::Owner));
        assert!(!has_permission(None, Role::Admin));
        assert!(!has_permission(None, Role::Owner));
    }

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Owner).unwrap(), "\"owner\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }
}
