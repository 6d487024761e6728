//! # Coopvault SDK
//!
//! A Rust client for the Coopvault cooperative back-office API: member
//! management, transaction funding/withdrawal, KYC verification (BVN/NIN),
//! reporting data, and authentication against a session-cookie backend.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, errors
//! 2. **HTTP** — `CoopvaultHttp` with the CSRF bootstrap and per-endpoint
//!    retry policies (reads retry once; mutations never)
//! 3. **Query cache** — process-wide stale-while-revalidate cache with
//!    structured invalidation and in-flight de-duplication
//! 4. **Auth** — session state machine, roles, navigation guards
//! 5. **High-Level Client** — `CoopvaultClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coopvault_sdk::prelude::*;
//!
//! let client = CoopvaultClient::builder()
//!     .base_url("https://api.coopvault.app")
//!     .build()?;
//!
//! client.auth().initialize().await;
//! client.auth().login("ada@example.test", "secret").await?;
//!
//! let members = client.members().list(&MemberFilter::default()).await?;
//! let summary = client.reports().financial_summary().await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and formatting utilities.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// HTTP client with the CSRF bootstrap and retry policies.
pub mod http;

// ── Layer 3: Query cache ─────────────────────────────────────────────────────

/// Process-wide query cache with staleness, retention, and invalidation.
pub mod cache;

// ── Layer 4: Auth ────────────────────────────────────────────────────────────

/// Authentication: session state machine, roles, navigation guards.
pub mod auth;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `CoopvaultClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{MemberId, TenantId, TransactionId};

    // Domain types — member
    pub use crate::domain::member::{
        KycStatus, Member, MemberStatus, SavingsAccount, SavingsProduct, SharesPlan,
    };
    pub use crate::domain::member::wire::{
        CreateMemberRequest, MemberFilter, UpdateMemberRequest,
    };

    // Domain types — transaction
    pub use crate::domain::transaction::{Transaction, TransactionKind, TransactionStatus};
    pub use crate::domain::transaction::wire::{
        FundRequest, TransactionFilter, WithdrawRequest,
    };

    // Domain types — verification
    pub use crate::domain::verification::wire::{VerifyBvnRequest, VerifyNinRequest};
    pub use crate::domain::verification::{IdentityMatch, VerificationOutcome};

    // Domain types — report
    pub use crate::domain::report::wire::{
        FinancialSummary, KycVerificationStats, LoanDistributionSlice, RevenueBreakdownSlice,
        SavingsTrendPoint, UserGrowthPoint,
    };
    pub use crate::domain::report::ReportKind;

    // Domain types — tenant
    pub use crate::domain::tenant::Tenant;

    // Errors
    pub use crate::error::{AuthError, HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Auth + session types
    pub use crate::auth::guard::{guest, protected, GuardDecision, Route};
    pub use crate::auth::session::{SessionSnapshot, SessionState};
    pub use crate::auth::{has_permission, Role, User, UserStatus};

    // Cache types
    pub use crate::cache::{QueryCache, QueryKey, Resource};

    // HTTP client + sub-clients
    pub use crate::client::{
        AuthClient, CoopvaultClient, CoopvaultClientBuilder, MembersClient, ReportsClient,
        TenantsClient, TransactionsClient, VerificationClient,
    };
    pub use crate::http::{RetryConfig, RetryPolicy};
}
