//! Verification sub-client — BVN/NIN identity checks.

use crate::client::CoopvaultClient;
use crate::domain::verification::wire::{VerifyBvnRequest, VerifyNinRequest};
use crate::domain::verification::VerificationOutcome;
use crate::error::SdkError;

/// Sub-client for KYC verification operations.
pub struct Verification<'a> {
    pub(crate) client: &'a CoopvaultClient,
}

impl<'a> Verification<'a> {
    /// Verify a member's Bank Verification Number against the registry.
    pub async fn verify_bvn(
        &self,
        request: &VerifyBvnRequest,
    ) -> Result<VerificationOutcome, SdkError> {
        let envelope = self.client.http.verify_bvn(request).await?;
        Ok(envelope.verification.into())
    }

    /// Verify a member's National Identification Number against the registry.
    pub async fn verify_nin(
        &self,
        request: &VerifyNinRequest,
    ) -> Result<VerificationOutcome, SdkError> {
        let envelope = self.client.http.verify_nin(request).await?;
        Ok(envelope.verification.into())
    }
}
