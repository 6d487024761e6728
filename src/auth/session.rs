//! Session state — an explicitly owned store created once per client.
//!
//! The store is single-writer: only the auth sub-client transitions it.
//! Everything else reads through [`SessionSnapshot`].

use super::User;
use crate::domain::tenant::Tenant;

use async_lock::RwLock;
use std::sync::Arc;

/// Payload of an authenticated session: the user and their organization.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionData {
    pub user: User,
    pub tenant: Tenant,
}

/// Session lifecycle states.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Application start: the initial identity round-trip has not resolved.
    #[default]
    Initializing,
    Authenticated(SessionData),
    Unauthenticated,
}

/// Read-only view of the session, cheap to hand around.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub user: Option<User>,
    pub tenant: Option<Tenant>,
    pub is_loading: bool,
    pub is_authenticated: bool,
}

impl SessionSnapshot {
    pub(crate) fn from_state(state: &SessionState) -> Self {
        match state {
            SessionState::Initializing => Self {
                user: None,
                tenant: None,
                is_loading: true,
                is_authenticated: false,
            },
            SessionState::Authenticated(data) => Self {
                user: Some(data.user.clone()),
                tenant: Some(data.tenant.clone()),
                is_loading: false,
                is_authenticated: true,
            },
            SessionState::Unauthenticated => Self {
                user: None,
                tenant: None,
                is_loading: false,
                is_authenticated: false,
            },
        }
    }
}

/// Shared session store, created once at client construction and replaced
/// wholesale on transitions. Mutation is confined to `auth::client::Auth`.
pub(crate) struct SessionStore {
    state: Arc<RwLock<SessionState>>,
}

impl SessionStore {
    pub(crate) fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::Initializing)),
        }
    }

    pub(crate) async fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from_state(&*self.state.read().await)
    }

    pub(crate) async fn set_authenticated(&self, user: User, tenant: Tenant) {
        *self.state.write().await = SessionState::Authenticated(SessionData { user, tenant });
    }

    pub(crate) async fn set_unauthenticated(&self) {
        *self.state.write().await = SessionState::Unauthenticated;
    }
}

impl Clone for SessionStore {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Role, UserStatus};
    use crate::shared::TenantId;
    use chrono::Utc;

    fn make_user() -> User {
        User {
            id: 1,
            name: "Ada Obi".to_string(),
            email: "ada@example.test".to_string(),
            role: Role::Admin,
            email_verified_at: None,
            status: UserStatus::Active,
            created_at: Utc::now(),
        }
    }

    fn make_tenant() -> Tenant {
        Tenant {
            id: TenantId::new(1),
            name: "Unity Cooperative".to_string(),
            slug: "unity-coop".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_default_state_is_initializing() {
        assert_eq!(SessionState::default(), SessionState::Initializing);
    }

    #[test]
    fn test_snapshot_initializing() {
        let snap = SessionSnapshot::from_state(&SessionState::Initializing);
        assert!(snap.is_loading);
        assert!(!snap.is_authenticated);
        assert!(snap.user.is_none());
    }

    #[test]
    fn test_snapshot_authenticated_derives_flag() {
        let state = SessionState::Authenticated(SessionData {
            user: make_user(),
            tenant: make_tenant(),
        });
        let snap = SessionSnapshot::from_state(&state);
        assert!(!snap.is_loading);
        assert!(snap.is_authenticated);
        assert_eq!(snap.user.unwrap().email, "ada@example.test");
        assert_eq!(snap.tenant.unwrap().slug, "unity-coop");
    }

    #[test]
    fn test_snapshot_unauthenticated() {
        let snap = SessionSnapshot::from_state(&SessionState::Unauthenticated);
        assert!(!snap.is_loading);
        assert!(!snap.is_authenticated);
        assert!(snap.user.is_none());
        assert!(snap.tenant.is_none());
    }

    #[tokio::test]
    async fn test_store_transitions() {
        let store = SessionStore::new();
        assert!(store.snapshot().await.is_loading);

        store.set_authenticated(make_user(), make_tenant()).await;
        assert!(store.snapshot().await.is_authenticated);

        store.set_unauthenticated().await;
        let snap = store.snapshot().await;
        assert!(!snap.is_authenticated);
        assert!(snap.user.is_none());
    }
}
