//! HTTP client layer — `CoopvaultHttp` with per-endpoint retry policies and
//! the CSRF cookie bootstrap.

pub mod client;
pub mod retry;

pub use client::CoopvaultHttp;
pub use retry::{RetryConfig, RetryPolicy};
