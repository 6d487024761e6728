//! Wire types for member endpoints (REST envelopes).

use super::MemberStatus;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw member record from the REST API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemberResponse {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub status: String,
    pub kyc_status: String,
    #[serde(default)]
    pub balance: Decimal,
    #[serde(default)]
    pub savings_accounts: Vec<SavingsAccountResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shares_plan: Option<SharesPlanResponse>,
    pub created_at: DateTime<Utc>,
}

/// Raw savings account nested on a member record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingsAccountResponse {
    pub id: i64,
    pub product: SavingsProductResponse,
    pub balance: Decimal,
    pub opened_at: DateTime<Utc>,
}

/// Raw savings product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingsProductResponse {
    pub id: i64,
    pub name: String,
    pub interest_rate: Decimal,
}

/// Raw shares plan nested on a member record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SharesPlanResponse {
    pub id: i64,
    pub name: String,
    pub unit_price: Decimal,
    pub units: u32,
}

/// Envelope for GET `/api/members`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembersEnvelope {
    pub members: Vec<MemberResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

/// Envelope for single-member responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberEnvelope {
    pub member: MemberResponse,
}

/// Body for POST `/api/members`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMemberRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Body for PUT `/api/members/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMemberRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MemberStatus>,
}

/// Filter for GET `/api/members`.
#[derive(Debug, Clone, Default)]
pub struct MemberFilter {
    pub page: Option<u32>,
    pub search: Option<String>,
    pub status: Option<MemberStatus>,
}

impl MemberFilter {
    pub(crate) fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page".to_string(), page.to_string()));
        }
        if let Some(search) = &self.search {
            params.push(("search".to_string(), search.clone()));
        }
        if let Some(status) = self.status {
            params.push(("status".to_string(), status.as_str().to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_members_envelope_unwraps_named_field() {
        let json = r#"{
            "members": [{
                "id": 11,
                "first_name": "Ngozi",
                "last_name": "Eze",
                "email": "ngozi@example.test",
                "status": "active",
                "kyc_status": "verified",
                "balance": "15000.00",
                "created_at": "2024-03-01T09:30:00Z"
            }],
            "total": 1
        }"#;
        let envelope: MembersEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.members.len(), 1);
        assert_eq!(envelope.total, Some(1));
        assert_eq!(envelope.members[0].id, 11);
        assert_eq!(envelope.members[0].status, "active");
    }

    #[test]
    fn test_update_request_skips_absent_fields() {
        let request = UpdateMemberRequest {
            status: Some(MemberStatus::Suspended),
            ..Default::default()
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"status":"suspended"}"#);
    }

    #[test]
    fn test_filter_to_params() {
        let filter = MemberFilter {
            page: Some(2),
            search: Some("eze".to_string()),
            status: Some(MemberStatus::Active),
        };
        assert_eq!(
            filter.to_params(),
            vec![
                ("page".to_string(), "2".to_string()),
                ("search".to_string(), "eze".to_string()),
                ("status".to_string(), "active".to_string()),
            ]
        );
        assert!(MemberFilter::default().to_params().is_empty());
    }
}
