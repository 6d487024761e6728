//! Transaction domain — funding and withdrawal records.

pub mod client;
pub mod convert;
pub mod wire;

use crate::shared::{MemberId, TransactionId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A funding or withdrawal against a member's account.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub member_id: MemberId,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub status: TransactionStatus,
    /// Backend-assigned reference, unique per transaction.
    pub reference: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Signed effect of this transaction on the member's balance.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Fund => self.amount,
            TransactionKind::Withdraw => -self.amount,
        }
    }
}

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Fund,
    Withdraw,
}

impl TransactionKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "fund" => Some(Self::Fund),
            "withdraw" => Some(Self::Withdraw),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fund => "fund",
            Self::Withdraw => "withdraw",
        }
    }
}

/// Settlement status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

impl TransactionStatus {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }
}

/// Validation failures when converting wire transactions.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("transaction {0}: unknown kind `{1}`")]
    InvalidKind(i64, String),

    #[error("transaction {0}: unknown status `{1}`")]
    InvalidStatus(i64, String),

    #[error("transaction {0}: missing reference")]
    MissingReference(i64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_signed_amount_by_kind() {
        let base = Transaction {
            id: TransactionId::new(1),
            member_id: MemberId::new(2),
            kind: TransactionKind::Fund,
            amount: Decimal::new(5000, 0),
            status: TransactionStatus::Completed,
            reference: "TX-0001".to_string(),
            note: None,
            created_at: Utc::now(),
        };
        assert_eq!(base.signed_amount(), Decimal::new(5000, 0));

        let withdrawal = Transaction {
            kind: TransactionKind::Withdraw,
            ..base
        };
        assert_eq!(withdrawal.signed_amount(), Decimal::new(-5000, 0));
    }
}
