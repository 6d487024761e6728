//! Verification domain — KYC identity checks (BVN/NIN).

pub mod client;
pub mod wire;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outcome of a BVN or NIN verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationOutcome {
    pub verified: bool,
    /// Identity fields the registry matched, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<IdentityMatch>,
}

/// Identity details returned by the verification registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityMatch {
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
