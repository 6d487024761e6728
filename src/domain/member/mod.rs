//! Member domain — cooperative members and their savings/shares records.

pub mod client;
pub mod convert;
pub mod wire;

use crate::shared::MemberId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A cooperative member, validated from the wire representation.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: MemberId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: MemberStatus,
    pub kyc_status: KycStatus,
    /// Aggregate balance across the member's savings accounts.
    pub balance: Decimal,
    pub savings_accounts: Vec<SavingsAccount>,
    pub shares_plan: Option<SharesPlan>,
    pub joined_at: DateTime<Utc>,
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Membership status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Inactive,
    Suspended,
}

impl MemberStatus {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            "suspended" => Some(Self::Suspended),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Suspended => "suspended",
        }
    }
}

/// KYC state of a member's identity records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
    Unverified,
    Pending,
    Verified,
    Failed,
}

impl KycStatus {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "unverified" => Some(Self::Unverified),
            "pending" => Some(Self::Pending),
            "verified" => Some(Self::Verified),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unverified => "unverified",
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Failed => "failed",
        }
    }
}

/// A member's savings account under a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsAccount {
    pub id: i64,
    pub product: SavingsProduct,
    pub balance: Decimal,
    pub opened_at: DateTime<Utc>,
}

/// A savings product offered by the tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsProduct {
    pub id: i64,
    pub name: String,
    /// Annual rate as a fraction (0.05 = 5%).
    pub interest_rate: Decimal,
}

/// A member's shares subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharesPlan {
    pub id: i64,
    pub name: String,
    pub unit_price: Decimal,
    pub units: u32,
}

/// Validation failures when converting wire members.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("member {0}: missing first name")]
    MissingFirstName(i64),

    #[error("member {0}: missing last name")]
    MissingLastName(i64),

    #[error("member {0}: missing email")]
    MissingEmail(i64),

    #[error("member {0}: unknown status `{1}`")]
    InvalidStatus(i64, String),

    #[error("member {0}: unknown kyc status `{1}`")]
    InvalidKycStatus(i64, String),
}
