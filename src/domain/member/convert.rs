//! Conversion: MemberResponse → Member (TryFrom + validation).

use super::wire;
use super::{KycStatus, Member, MemberStatus, SavingsAccount, SavingsProduct, SharesPlan, ValidationError};
use crate::shared::MemberId;

impl TryFrom<wire::MemberResponse> for Member {
    type Error = ValidationError;

    fn try_from(source: wire::MemberResponse) -> Result<Self, Self::Error> {
        let id = source.id;

        let first_name = source
            .first_name
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::MissingFirstName(id))?;
        let last_name = source
            .last_name
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::MissingLastName(id))?;
        let email = source
            .email
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::MissingEmail(id))?;

        let status = MemberStatus::from_str(&source.status)
            .ok_or_else(|| ValidationError::InvalidStatus(id, source.status.clone()))?;
        let kyc_status = KycStatus::from_str(&source.kyc_status)
            .ok_or_else(|| ValidationError::InvalidKycStatus(id, source.kyc_status.clone()))?;

        let savings_accounts = source
            .savings_accounts
            .into_iter()
            .map(SavingsAccount::from)
            .collect();

        Ok(Member {
            id: MemberId::new(id),
            first_name,
            last_name,
            email,
            phone: source.phone,
            status,
            kyc_status,
            balance: source.balance,
            savings_accounts,
            shares_plan: source.shares_plan.map(SharesPlan::from),
            joined_at: source.created_at,
        })
    }
}

impl From<wire::SavingsAccountResponse> for SavingsAccount {
    fn from(source: wire::SavingsAccountResponse) -> Self {
        Self {
            id: source.id,
            product: source.product.into(),
            balance: source.balance,
            opened_at: source.opened_at,
        }
    }
}

impl From<wire::SavingsProductResponse> for SavingsProduct {
    fn from(source: wire::SavingsProductResponse) -> Self {
        Self {
            id: source.id,
            name: source.name,
            interest_rate: source.interest_rate,
        }
    }
}

impl From<wire::SharesPlanResponse> for SharesPlan {
    fn from(source: wire::SharesPlanResponse) -> Self {
        Self {
            id: source.id,
            name: source.name,
            unit_price: source.unit_price,
            units: source.units,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn make_response() -> wire::MemberResponse {
        serde_json::from_str(
            r#"{
                "id": 7,
                "first_name": "Chidi",
                "last_name": "Okafor",
                "email": "chidi@example.test",
                "phone": "+2348012345678",
                "status": "active",
                "kyc_status": "pending",
                "balance": "2500.50",
                "savings_accounts": [{
                    "id": 1,
                    "product": {"id": 2, "name": "Target Savings", "interest_rate": "0.05"},
                    "balance": "2500.50",
                    "opened_at": "2024-01-15T08:00:00Z"
                }],
                "shares_plan": {"id": 3, "name": "Growth Shares", "unit_price": "100", "units": 25},
                "created_at": "2023-11-02T10:00:00Z"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_valid_member_converts() {
        let member = Member::try_from(make_response()).unwrap();
        assert_eq!(member.id.get(), 7);
        assert_eq!(member.full_name(), "Chidi Okafor");
        assert_eq!(member.status, MemberStatus::Active);
        assert_eq!(member.kyc_status, KycStatus::Pending);
        assert_eq!(member.balance, Decimal::new(250050, 2));
        assert_eq!(member.savings_accounts.len(), 1);
        assert_eq!(member.savings_accounts[0].product.name, "Target Savings");
        assert_eq!(member.shares_plan.as_ref().unwrap().units, 25);
    }

    #[test]
    fn test_missing_email_is_rejected() {
        let mut response = make_response();
        response.email = None;
        assert_eq!(
            Member::try_from(response),
            Err(ValidationError::MissingEmail(7))
        );
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let mut response = make_response();
        response.status = "archived".to_string();
        assert_eq!(
            Member::try_from(response),
            Err(ValidationError::InvalidStatus(7, "archived".to_string()))
        );
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut response = make_response();
        response.first_name = Some(String::new());
        assert_eq!(
            Member::try_from(response),
            Err(ValidationError::MissingFirstName(7))
        );
    }
}
