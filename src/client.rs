//! High-level client — `CoopvaultClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`. This
//! module keeps the builder, the shared query cache, the session store, and
//! the accessor methods.

use crate::auth::client::Auth;
use crate::auth::session::SessionStore;
use crate::cache::{
    FetchFuture, Fetcher, QueryCache, QueryKey, Resource, DEFAULT_RETENTION, DEFAULT_STALENESS,
};
use crate::domain::member::client::Members;
use crate::domain::report::client::Reports;
use crate::domain::tenant::client::Tenants;
use crate::domain::transaction::client::Transactions;
use crate::domain::verification::client::Verification;
use crate::error::SdkError;
use crate::http::CoopvaultHttp;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::member::client::Members as MembersClient;
pub use crate::domain::report::client::Reports as ReportsClient;
pub use crate::domain::tenant::client::Tenants as TenantsClient;
pub use crate::domain::transaction::client::Transactions as TransactionsClient;
pub use crate::domain::verification::client::Verification as VerificationClient;

/// The primary entry point for the Coopvault SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.members()`, `client.transactions()`, etc. The query cache and the
/// session store are created once here and shared by every sub-client.
pub struct CoopvaultClient {
    pub(crate) http: CoopvaultHttp,
    pub(crate) cache: QueryCache,
    pub(crate) session: SessionStore,
}

impl CoopvaultClient {
    pub fn builder() -> CoopvaultClientBuilder {
        CoopvaultClientBuilder::default()
    }

    /// Build a client against the base URL from the environment
    /// (`COOPVAULT_API_URL`), falling back to the production default.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::builder().build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn members(&self) -> Members<'_> {
        Members { client: self }
    }

    pub fn transactions(&self) -> Transactions<'_> {
        Transactions { client: self }
    }

    pub fn verification(&self) -> Verification<'_> {
        Verification { client: self }
    }

    pub fn reports(&self) -> Reports<'_> {
        Reports { client: self }
    }

    pub fn tenants(&self) -> Tenants<'_> {
        Tenants { client: self }
    }

    /// Shared query cache (exposed for subscription wiring in view layers).
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    // ── Internal plumbing ────────────────────────────────────────────────

    /// Run a cached GET through the query cache and deserialize the stored
    /// value into the caller's envelope type.
    pub(crate) async fn cached_get<T: DeserializeOwned>(
        &self,
        key: QueryKey,
        path: &str,
        params: Vec<(String, String)>,
    ) -> Result<T, SdkError> {
        let http = self.http.clone();
        let path = path.to_string();
        let fetcher: Fetcher = Arc::new(move || {
            let http = http.clone();
            let path = path.clone();
            let params = params.clone();
            Box::pin(async move { http.get_value(&path, &params).await }) as FetchFuture
        });

        let value = self.cache.query(key, fetcher).await?;
        T::deserialize(value.as_ref()).map_err(SdkError::Serde)
    }

    /// Mutations touch balances on both sides of the ledger; member and
    /// transaction entries refresh together.
    pub(crate) async fn invalidate_after_mutation(&self) {
        self.cache.invalidate(Resource::Members).await;
        self.cache.invalidate(Resource::Transactions).await;
    }
}

impl Clone for CoopvaultClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            cache: self.cache.clone(),
            session: self.session.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoopvaultClientBuilder {
    base_url: String,
    staleness: Duration,
    retention: Duration,
}

impl Default for CoopvaultClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::api_url_from_env(),
            staleness: DEFAULT_STALENESS,
            retention: DEFAULT_RETENTION,
        }
    }
}

impl CoopvaultClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// How long a cache entry stays fresh before a background refresh.
    pub fn staleness(mut self, window: Duration) -> Self {
        self.staleness = window;
        self
    }

    /// How long an unused cache entry is retained before eviction.
    pub fn retention(mut self, window: Duration) -> Self {
        self.retention = window;
        self
    }

    pub fn build(self) -> Result<CoopvaultClient, SdkError> {
        Ok(CoopvaultClient {
            http: CoopvaultHttp::new(&self.base_url),
            cache: QueryCache::new(self.staleness, self.retention),
            session: SessionStore::new(),
        })
    }
}
