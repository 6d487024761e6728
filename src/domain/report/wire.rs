//! Wire types for report endpoints (REST envelopes).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Envelope for GET `/api/reports/{kind}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEnvelope<T> {
    pub data: T,
}

/// GET `/api/reports/financial-summary`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialSummary {
    pub total_savings: Decimal,
    pub total_shares: Decimal,
    pub total_loans: Decimal,
    pub net_revenue: Decimal,
}

/// A point in the member growth series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserGrowthPoint {
    #[serde(with = "crate::shared::serde_util::timestamp_ms")]
    pub period: DateTime<Utc>,
    pub total_users: u64,
    pub new_users: u64,
}

/// A slice of the loan distribution chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoanDistributionSlice {
    pub category: String,
    pub amount: Decimal,
    /// Fraction of the total loan book (0.25 = 25%).
    pub share: Decimal,
}

/// A slice of the revenue breakdown chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenueBreakdownSlice {
    pub source: String,
    pub amount: Decimal,
}

/// GET `/api/reports/kyc-verification`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KycVerificationStats {
    pub verified: u64,
    pub pending: u64,
    pub failed: u64,
    pub unverified: u64,
}

/// A point in the savings trend series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingsTrendPoint {
    #[serde(with = "crate::shared::serde_util::timestamp_ms")]
    pub period: DateTime<Utc>,
    pub balance: Decimal,
    pub deposits: Decimal,
    pub withdrawals: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_financial_summary_envelope() {
        let json = r#"{
            "data": {
                "total_savings": "120000.00",
                "total_shares": "45000.00",
                "total_loans": "30000.00",
                "net_revenue": "8200.50"
            }
        }"#;
        let envelope: ReportEnvelope<FinancialSummary> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.total_savings, Decimal::new(12000000, 2));
        assert_eq!(envelope.data.net_revenue, Decimal::new(820050, 2));
    }

    #[test]
    fn test_user_growth_points_use_epoch_millis() {
        let json = r#"{
            "data": [
                {"period": 1717200000000, "total_users": 120, "new_users": 8}
            ]
        }"#;
        let envelope: ReportEnvelope<Vec<UserGrowthPoint>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].total_users, 120);
        assert_eq!(envelope.data[0].period.timestamp_millis(), 1_717_200_000_000);
    }

    #[test]
    fn test_kyc_stats_deserialize() {
        let json = r#"{"data": {"verified": 80, "pending": 12, "failed": 3, "unverified": 25}}"#;
        let envelope: ReportEnvelope<KycVerificationStats> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.verified, 80);
        assert_eq!(envelope.data.unverified, 25);
    }
}
