//! Report domain — dashboard chart data.

pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

/// The report endpoints exposed by the backend. `as_str` doubles as the
/// path segment under `/api/reports/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    FinancialSummary,
    UserGrowth,
    LoanDistribution,
    RevenueBreakdown,
    KycVerification,
    SavingsTrend,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FinancialSummary => "financial-summary",
            Self::UserGrowth => "user-growth",
            Self::LoanDistribution => "loan-distribution",
            Self::RevenueBreakdown => "revenue-breakdown",
            Self::KycVerification => "kyc-verification",
            Self::SavingsTrend => "savings-trend",
        }
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_kind_path_segments() {
        assert_eq!(ReportKind::FinancialSummary.as_str(), "financial-summary");
        assert_eq!(ReportKind::SavingsTrend.as_str(), "savings-trend");
    }

    #[test]
    fn test_report_kind_serde_kebab_case() {
        assert_eq!(
            serde_json::to_string(&ReportKind::KycVerification).unwrap(),
            "\"kyc-verification\""
        );
        let kind: ReportKind = serde_json::from_str("\"user-growth\"").unwrap();
        assert_eq!(kind, ReportKind::UserGrowth);
    }
}
