//! Wire types for verification endpoints (REST envelopes).

use super::{IdentityMatch, VerificationOutcome};
use crate::error::SdkError;
use crate::shared::MemberId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body for POST `/api/verify/bvn`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyBvnRequest {
    pub member_id: MemberId,
    pub bvn: String,
}

impl VerifyBvnRequest {
    /// Build a request, rejecting numbers that are not exactly 11 digits
    /// before any network traffic happens.
    pub fn new(member_id: MemberId, bvn: &str) -> Result<Self, SdkError> {
        validate_identity_number(bvn, "bvn")?;
        Ok(Self {
            member_id,
            bvn: bvn.to_string(),
        })
    }
}

/// Body for POST `/api/verify/nin`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyNinRequest {
    pub member_id: MemberId,
    pub nin: String,
}

impl VerifyNinRequest {
    /// Build a request, rejecting numbers that are not exactly 11 digits.
    pub fn new(member_id: MemberId, nin: &str) -> Result<Self, SdkError> {
        validate_identity_number(nin, "nin")?;
        Ok(Self {
            member_id,
            nin: nin.to_string(),
        })
    }
}

/// BVN and NIN are both 11-digit numeric identifiers.
fn validate_identity_number(value: &str, field: &str) -> Result<(), SdkError> {
    if value.len() == 11 && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(SdkError::Validation(format!(
            "{} must be exactly 11 digits",
            field
        )))
    }
}

/// Raw verification result from the REST API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerificationResponse {
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Envelope for verification responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationEnvelope {
    pub verification: VerificationResponse,
}

impl From<VerificationResponse> for VerificationOutcome {
    fn from(source: VerificationResponse) -> Self {
        let identity = source.full_name.map(|full_name| IdentityMatch {
            full_name,
            date_of_birth: source.date_of_birth,
            phone: source.phone,
        });
        Self {
            verified: source.verified,
            identity,
        }
    }
}
