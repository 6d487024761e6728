//! Wire types for transaction endpoints (REST envelopes).

use super::TransactionKind;
use crate::shared::MemberId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw transaction record from the REST API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionResponse {
    pub id: i64,
    pub member_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: Decimal,
    pub status: String,
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Envelope for GET `/api/transactions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionsEnvelope {
    pub transactions: Vec<TransactionResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

/// Envelope for single-transaction responses (fund/withdraw).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionEnvelope {
    pub transaction: TransactionResponse,
}

/// Body for POST `/api/transactions/fund`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundRequest {
    pub member_id: MemberId,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Body for POST `/api/transactions/withdraw`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawRequest {
    pub member_id: MemberId,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Filter for GET `/api/transactions`.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub member_id: Option<MemberId>,
    pub kind: Option<TransactionKind>,
    pub page: Option<u32>,
}

impl TransactionFilter {
    pub(crate) fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(member_id) = self.member_id {
            params.push(("member_id".to_string(), member_id.to_string()));
        }
        if let Some(kind) = self.kind {
            params.push(("type".to_string(), kind.as_str().to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page".to_string(), page.to_string()));
        }
        params
    }
}
