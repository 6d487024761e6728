//! Navigation guards — pure decisions over a session snapshot.
//!
//! Two complementary checks share one session read: `protected` keeps
//! unauthenticated visitors out of back-office views, `guest` keeps
//! authenticated users off the login/signup views.

use super::session::SessionSnapshot;

/// Client-side destinations a guard can redirect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
}

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving: render nothing and decide later.
    Pending,
    /// Render the guarded view.
    Allow,
    /// Navigate elsewhere instead. The attempted destination is not carried
    /// through the redirect.
    Redirect(Route),
}

/// Guard for authenticated-only views.
pub fn protected(session: &SessionSnapshot) -> GuardDecision {
    if session.is_loading {
        return GuardDecision::Pending;
    }
    if session.is_authenticated {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(Route::Login)
    }
}

/// Guard for guest-only views (login/signup).
pub fn guest(session: &SessionSnapshot) -> GuardDecision {
    if session.is_loading {
        return GuardDecision::Pending;
    }
    if session.is_authenticated {
        GuardDecision::Redirect(Route::Dashboard)
    } else {
        GuardDecision::Allow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::SessionState;

    fn snapshot(state: &SessionState) -> SessionSnapshot {
        SessionSnapshot::from_state(state)
    }

    #[test]
    fn test_protected_suspends_while_loading() {
        let snap = snapshot(&SessionState::Initializing);
        assert_eq!(protected(&snap), GuardDecision::Pending);
    }

    #[test]
    fn test_protected_redirects_unauthenticated_to_login() {
        let snap = snapshot(&SessionState::Unauthenticated);
        assert_eq!(protected(&snap), GuardDecision::Redirect(Route::Login));
    }

    #[test]
    fn test_guest_redirects_authenticated_to_dashboard() {
        let snap = SessionSnapshot {
            user: None,
            tenant: None,
            is_loading: false,
            is_authenticated: true,
        };
        assert_eq!(guest(&snap), GuardDecision::Redirect(Route::Dashboard));
        assert_eq!(protected(&snap), GuardDecision::Allow);
    }

    #[test]
    fn test_guest_allows_unauthenticated() {
        let snap = snapshot(&SessionState::Unauthenticated);
        assert_eq!(guest(&snap), GuardDecision::Allow);
    }

    #[test]
    fn test_guest_suspends_while_loading() {
        let snap = snapshot(&SessionState::Initializing);
        assert_eq!(guest(&snap), GuardDecision::Pending);
    }
}
