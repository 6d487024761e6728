//! Reports sub-client — cached chart queries.

use crate::cache::{QueryKey, Resource};
use crate::client::CoopvaultClient;
use crate::domain::report::wire::{
    FinancialSummary, KycVerificationStats, LoanDistributionSlice, ReportEnvelope,
    RevenueBreakdownSlice, SavingsTrendPoint, UserGrowthPoint,
};
use crate::domain::report::ReportKind;
use crate::error::SdkError;
use serde::de::DeserializeOwned;

/// Sub-client for report operations.
pub struct Reports<'a> {
    pub(crate) client: &'a CoopvaultClient,
}

impl<'a> Reports<'a> {
    pub async fn financial_summary(&self) -> Result<FinancialSummary, SdkError> {
        self.fetch(ReportKind::FinancialSummary).await
    }

    pub async fn user_growth(&self) -> Result<Vec<UserGrowthPoint>, SdkError> {
        self.fetch(ReportKind::UserGrowth).await
    }

    pub async fn loan_distribution(&self) -> Result<Vec<LoanDistributionSlice>, SdkError> {
        self.fetch(ReportKind::LoanDistribution).await
    }

    pub async fn revenue_breakdown(&self) -> Result<Vec<RevenueBreakdownSlice>, SdkError> {
        self.fetch(ReportKind::RevenueBreakdown).await
    }

    pub async fn kyc_verification(&self) -> Result<KycVerificationStats, SdkError> {
        self.fetch(ReportKind::KycVerification).await
    }

    pub async fn savings_trend(&self) -> Result<Vec<SavingsTrendPoint>, SdkError> {
        self.fetch(ReportKind::SavingsTrend).await
    }

    /// All reports share one cache resource, keyed by kind.
    async fn fetch<T: DeserializeOwned>(&self, kind: ReportKind) -> Result<T, SdkError> {
        let key = QueryKey::new(Resource::Reports, [("kind", kind.as_str())]);
        let envelope: ReportEnvelope<T> = self
            .client
            .cached_get(key, &format!("/api/reports/{}", kind), Vec::new())
            .await?;
        Ok(envelope.data)
    }
}
