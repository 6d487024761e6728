//! Conversion: TransactionResponse → Transaction (TryFrom + validation).

use super::wire;
use super::{Transaction, TransactionKind, TransactionStatus, ValidationError};
use crate::shared::{MemberId, TransactionId};

impl TryFrom<wire::TransactionResponse> for Transaction {
    type Error = ValidationError;

    fn try_from(source: wire::TransactionResponse) -> Result<Self, Self::Error> {
        let id = source.id;

        let kind = TransactionKind::from_str(&source.kind)
            .ok_or_else(|| ValidationError::InvalidKind(id, source.kind.clone()))?;
        let status = TransactionStatus::from_str(&source.status)
            .ok_or_else(|| ValidationError::InvalidStatus(id, source.status.clone()))?;
        let reference = source
            .reference
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::MissingReference(id))?;

        Ok(Transaction {
            id: TransactionId::new(id),
            member_id: MemberId::new(source.member_id),
            kind,
            amount: source.amount,
            status,
            reference,
            note: source.note,
            created_at: source.created_at,
        })
    }
}
