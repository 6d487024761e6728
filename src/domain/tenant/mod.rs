//! Tenant domain — the organization owning members and accounts.

pub mod client;

use crate::shared::TenantId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The organization a user belongs to. 1:1 with an authenticated session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: TenantId,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}
