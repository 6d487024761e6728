//! Tenant sub-client.

use crate::auth::MeEnvelope;
use crate::cache::{QueryKey, Resource};
use crate::client::CoopvaultClient;
use crate::domain::tenant::Tenant;
use crate::error::SdkError;

/// Sub-client for tenant operations.
pub struct Tenants<'a> {
    pub(crate) client: &'a CoopvaultClient,
}

impl<'a> Tenants<'a> {
    /// The current session's organization.
    ///
    /// The backend exposes the tenant on the identity envelope; this reads it
    /// through the query cache rather than re-fetching per call.
    pub async fn current(&self) -> Result<Tenant, SdkError> {
        let key = QueryKey::bare(Resource::Tenant);
        let envelope: MeEnvelope = self.client.cached_get(key, "/api/me", Vec::new()).await?;
        Ok(envelope.tenant)
    }
}
