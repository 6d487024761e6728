//! Members sub-client — list, fetch, create, update, delete.

use crate::cache::{QueryKey, Resource};
use crate::client::CoopvaultClient;
use crate::domain::member::wire::{
    CreateMemberRequest, MemberEnvelope, MemberFilter, MembersEnvelope, UpdateMemberRequest,
};
use crate::domain::member::Member;
use crate::error::SdkError;
use crate::shared::MemberId;

/// Sub-client for member operations.
pub struct Members<'a> {
    pub(crate) client: &'a CoopvaultClient,
}

impl<'a> Members<'a> {
    /// List members matching `filter`. Served through the query cache.
    pub async fn list(&self, filter: &MemberFilter) -> Result<Vec<Member>, SdkError> {
        let params = filter.to_params();
        let key = QueryKey::new(
            Resource::Members,
            params.iter().map(|(k, v)| (k.clone(), v.clone())),
        );
        let envelope: MembersEnvelope = self
            .client
            .cached_get(key, "/api/members", params)
            .await?;

        envelope
            .members
            .into_iter()
            .map(|m| Member::try_from(m).map_err(|e| SdkError::Validation(e.to_string())))
            .collect()
    }

    /// Fetch one member by id. Served through the query cache.
    pub async fn get(&self, id: MemberId) -> Result<Member, SdkError> {
        let key = QueryKey::new(Resource::Members, [("id", id.to_string())]);
        let envelope: MemberEnvelope = self
            .client
            .cached_get(key, &format!("/api/members/{}", id), Vec::new())
            .await?;
        Member::try_from(envelope.member).map_err(|e| SdkError::Validation(e.to_string()))
    }

    /// Create a member. Invalidates member and transaction caches on success.
    pub async fn create(&self, request: &CreateMemberRequest) -> Result<Member, SdkError> {
        let envelope = self.client.http.create_member(request).await?;
        self.client.invalidate_after_mutation().await;
        Member::try_from(envelope.member).map_err(|e| SdkError::Validation(e.to_string()))
    }

    /// Update a member. Invalidates member and transaction caches on success.
    pub async fn update(
        &self,
        id: MemberId,
        request: &UpdateMemberRequest,
    ) -> Result<Member, SdkError> {
        let envelope = self.client.http.update_member(id, request).await?;
        self.client.invalidate_after_mutation().await;
        Member::try_from(envelope.member).map_err(|e| SdkError::Validation(e.to_string()))
    }

    /// Delete a member. Invalidates member and transaction caches on success.
    pub async fn delete(&self, id: MemberId) -> Result<(), SdkError> {
        self.client.http.delete_member(id).await?;
        self.client.invalidate_after_mutation().await;
        Ok(())
    }
}
