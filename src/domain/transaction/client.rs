//! Transactions sub-client — listing plus the fund/withdraw payment surface.

use crate::cache::{QueryKey, Resource};
use crate::client::CoopvaultClient;
use crate::domain::transaction::wire::{
    FundRequest, TransactionFilter, TransactionsEnvelope, WithdrawRequest,
};
use crate::domain::transaction::Transaction;
use crate::error::SdkError;

/// Sub-client for transaction operations.
pub struct Transactions<'a> {
    pub(crate) client: &'a CoopvaultClient,
}

impl<'a> Transactions<'a> {
    /// List transactions matching `filter`. Served through the query cache.
    pub async fn list(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>, SdkError> {
        let params = filter.to_params();
        let key = QueryKey::new(
            Resource::Transactions,
            params.iter().map(|(k, v)| (k.clone(), v.clone())),
        );
        let envelope: TransactionsEnvelope = self
            .client
            .cached_get(key, "/api/transactions", params)
            .await?;

        envelope
            .transactions
            .into_iter()
            .map(|t| Transaction::try_from(t).map_err(|e| SdkError::Validation(e.to_string())))
            .collect()
    }

    /// Fund a member's account.
    ///
    /// Never auto-retried (funding is not idempotent-safe). Invalidates
    /// member and transaction caches on success.
    pub async fn fund(&self, request: &FundRequest) -> Result<Transaction, SdkError> {
        let envelope = self.client.http.fund(request).await?;
        self.client.invalidate_after_mutation().await;
        Transaction::try_from(envelope.transaction)
            .map_err(|e| SdkError::Validation(e.to_string()))
    }

    /// Withdraw from a member's account.
    ///
    /// Never auto-retried. Invalidates member and transaction caches on
    /// success.
    pub async fn withdraw(&self, request: &WithdrawRequest) -> Result<Transaction, SdkError> {
        let envelope = self.client.http.withdraw(request).await?;
        self.client.invalidate_after_mutation().await;
        Transaction::try_from(envelope.transaction)
            .map_err(|e| SdkError::Validation(e.to_string()))
    }
}
