//! Network URL constants for the Coopvault SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.coopvault.app";

/// Environment variable that overrides the API base URL.
pub const API_URL_ENV: &str = "COOPVAULT_API_URL";

/// Resolve the API base URL from the environment, falling back to
/// [`DEFAULT_API_URL`].
pub fn api_url_from_env() -> String {
    std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}
