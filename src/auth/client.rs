//! Auth sub-client — session bootstrap, login, logout, revalidation.

use crate::auth::session::SessionSnapshot;
use crate::auth::{LoginRequest, User};
use crate::client::CoopvaultClient;
use crate::error::{AuthError, HttpError, SdkError};

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a CoopvaultClient,
}

impl<'a> Auth<'a> {
    /// Bootstrap the session at application start.
    ///
    /// Runs the CSRF bootstrap best-effort (a failure here is logged and
    /// swallowed; login will retry it), then resolves identity via
    /// `GET /api/me`. Any failure of the identity call — transport included —
    /// lands the session in `Unauthenticated` rather than surfacing an error.
    pub async fn initialize(&self) -> SessionSnapshot {
        if let Err(e) = self.client.http.ensure_csrf_cookie().await {
            tracing::debug!(error = %e, "csrf bootstrap failed during session init");
        }

        match self.client.http.me().await {
            Ok(me) => {
                self.client
                    .session
                    .set_authenticated(me.user, me.tenant)
                    .await;
            }
            Err(e) => {
                tracing::debug!(error = %e, "identity check failed, starting unauthenticated");
                self.client.session.set_unauthenticated().await;
            }
        }

        self.snapshot().await
    }

    /// Login with email and password.
    ///
    /// The CSRF bootstrap must succeed first; its failure propagates and the
    /// login request is not sent. On success the profile from the login
    /// response is stored directly — no second identity round-trip. On a
    /// rejected login the session stays unauthenticated and the server's
    /// message is surfaced.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionSnapshot, SdkError> {
        self.client.http.ensure_csrf_cookie().await?;

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        match self.client.http.login(&request).await {
            Ok(resp) => {
                self.client
                    .session
                    .set_authenticated(resp.user, resp.tenant)
                    .await;
                Ok(self.snapshot().await)
            }
            Err(e) => {
                self.client.session.set_unauthenticated().await;
                Err(match e {
                    HttpError::Unauthorized(message) => {
                        AuthError::LoginFailed(message).into()
                    }
                    HttpError::Validation { message, .. } => {
                        AuthError::LoginFailed(message).into()
                    }
                    other => other.into(),
                })
            }
        }
    }

    /// Logout.
    ///
    /// The network call is best-effort: local session state clears and the
    /// query cache empties unconditionally, even when the request fails.
    pub async fn logout(&self) -> SessionSnapshot {
        if let Err(e) = self.client.http.logout().await {
            tracing::debug!(error = %e, "logout request failed, clearing local session anyway");
        }

        self.client.session.set_unauthenticated().await;
        self.client.cache.clear().await;
        self.snapshot().await
    }

    /// Revalidate the session cookie against the backend.
    ///
    /// On success the session is refreshed with the returned profile; on any
    /// failure the session clears and the error propagates.
    pub async fn check_session(&self) -> Result<User, SdkError> {
        match self.client.http.me().await {
            Ok(me) => {
                let user = me.user.clone();
                self.client
                    .session
                    .set_authenticated(me.user, me.tenant)
                    .await;
                Ok(user)
            }
            Err(e) => {
                self.client.session.set_unauthenticated().await;
                Err(e.into())
            }
        }
    }

    /// Current session snapshot.
    pub async fn snapshot(&self) -> SessionSnapshot {
        self.client.session.snapshot().await
    }

    /// Whether the session is currently authenticated.
    pub async fn is_authenticated(&self) -> bool {
        self.snapshot().await.is_authenticated
    }
}

#[cfg(test)]
mod tests {
    use crate::client::CoopvaultClient;

    /// Nothing listens on this port; every request fails at the transport
    /// layer, which is exactly what these tests need.
    fn offline_client() -> CoopvaultClient {
        CoopvaultClient::builder()
            .base_url("http://127.0.0.1:9")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_initialize_lands_unauthenticated_on_transport_failure() {
        let client = offline_client();
        assert!(client.auth().snapshot().await.is_loading);

        let snap = client.auth().initialize().await;
        assert!(!snap.is_loading);
        assert!(!snap.is_authenticated);
        assert!(snap.user.is_none());
    }

    #[tokio::test]
    async fn test_login_propagates_csrf_bootstrap_failure() {
        let client = offline_client();
        client.auth().initialize().await;

        let result = client.auth().login("ada@example.test", "secret").await;
        assert!(result.is_err());
        assert!(!client.auth().is_authenticated().await);
    }

    #[tokio::test]
    async fn test_logout_clears_local_state_even_when_request_fails() {
        let client = offline_client();
        client.auth().initialize().await;

        let snap = client.auth().logout().await;
        assert!(!snap.is_authenticated);
        assert!(!snap.is_loading);
        assert!(snap.user.is_none());
        assert!(client.cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_check_session_clears_session_on_failure() {
        let client = offline_client();
        let result = client.auth().check_session().await;
        assert!(result.is_err());

        let snap = client.auth().snapshot().await;
        assert!(!snap.is_authenticated);
        assert!(!snap.is_loading);
    }
}
