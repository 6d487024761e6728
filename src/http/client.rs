//! Low-level HTTP client — `CoopvaultHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens at the sub-client boundary); reads that feed the query cache return
//! raw `serde_json::Value` so the cache can hold them untyped.
//!
//! Every request carries credentials: the cookie jar is shared with the
//! backend's session cookie, and mutating verbs inject the `X-XSRF-TOKEN`
//! header once [`CoopvaultHttp::ensure_csrf_cookie`] has run.

use crate::auth::{LoginEnvelope, LoginRequest, MeEnvelope};
use crate::domain::member::wire::{CreateMemberRequest, MemberEnvelope, UpdateMemberRequest};
use crate::domain::transaction::wire::{FundRequest, TransactionEnvelope, WithdrawRequest};
use crate::domain::verification::wire::{
    VerificationEnvelope, VerifyBvnRequest, VerifyNinRequest,
};
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::shared::MemberId;

use async_lock::RwLock;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Low-level HTTP client for the Coopvault REST API.
pub struct CoopvaultHttp {
    base_url: String,
    client: Client,
    jar: Arc<Jar>,
    /// Decoded XSRF-TOKEN cookie value, injected on mutating requests.
    csrf_token: Arc<RwLock<Option<String>>>,
}

impl CoopvaultHttp {
    pub fn new(base_url: &str) -> Self {
        let jar = Arc::new(Jar::default());

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            "X-Requested-With",
            HeaderValue::from_static("XMLHttpRequest"),
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .default_headers(headers)
            .cookie_provider(jar.clone())
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            jar,
            csrf_token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── CSRF bootstrap ───────────────────────────────────────────────────

    /// Obtain the anti-forgery cookie required before the backend accepts
    /// mutating requests from a not-yet-authenticated session.
    ///
    /// Idempotent: returns immediately once a token is held. On failure the
    /// error propagates — a dependent mutating request must not proceed.
    pub async fn ensure_csrf_cookie(&self) -> Result<(), HttpError> {
        if self.csrf_token.read().await.is_some() {
            return Ok(());
        }

        let url = format!("{}/sanctum/csrf-cookie", self.base_url);
        let resp = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!(error = %e, "csrf cookie request failed");
            wrap_transport(e)
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(decode_error(status.as_u16(), &body));
        }

        let token = self.read_xsrf_cookie()?;
        *self.csrf_token.write().await = Some(token);
        Ok(())
    }

    /// Read the XSRF-TOKEN cookie back out of the jar, URL-decoded.
    fn read_xsrf_cookie(&self) -> Result<String, HttpError> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| HttpError::BadRequest(format!("invalid base URL: {}", e)))?;
        let header = self
            .jar
            .cookies(&url)
            .ok_or_else(|| HttpError::BadRequest("csrf cookie not set by server".to_string()))?;
        let raw = header.to_str().unwrap_or_default().to_string();
        extract_xsrf_token(&raw)
            .ok_or_else(|| HttpError::BadRequest("csrf cookie not set by server".to_string()))
    }

    // ── Auth ─────────────────────────────────────────────────────────────

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginEnvelope, HttpError> {
        let url = format!("{}/api/auth/login", self.base_url);
        self.post(&url, request, RetryPolicy::None).await
    }

    pub async fn logout(&self) -> Result<Value, HttpError> {
        let url = format!("{}/api/auth/logout", self.base_url);
        self.post(&url, &serde_json::json!({}), RetryPolicy::None)
            .await
    }

    pub async fn me(&self) -> Result<MeEnvelope, HttpError> {
        let url = format!("{}/api/me", self.base_url);
        self.get(&url, RetryPolicy::Read).await
    }

    // ── Members ──────────────────────────────────────────────────────────

    pub async fn create_member(
        &self,
        request: &CreateMemberRequest,
    ) -> Result<MemberEnvelope, HttpError> {
        let url = format!("{}/api/members", self.base_url);
        self.post(&url, request, RetryPolicy::None).await
    }

    pub async fn update_member(
        &self,
        id: MemberId,
        request: &UpdateMemberRequest,
    ) -> Result<MemberEnvelope, HttpError> {
        let url = format!("{}/api/members/{}", self.base_url, id);
        self.put(&url, request, RetryPolicy::None).await
    }

    pub async fn delete_member(&self, id: MemberId) -> Result<Value, HttpError> {
        let url = format!("{}/api/members/{}", self.base_url, id);
        self.delete(&url, RetryPolicy::None).await
    }

    // ── Transactions ─────────────────────────────────────────────────────

    pub async fn fund(&self, request: &FundRequest) -> Result<TransactionEnvelope, HttpError> {
        let url = format!("{}/api/transactions/fund", self.base_url);
        self.post(&url, request, RetryPolicy::None).await
    }

    pub async fn withdraw(
        &self,
        request: &WithdrawRequest,
    ) -> Result<TransactionEnvelope, HttpError> {
        let url = format!("{}/api/transactions/withdraw", self.base_url);
        self.post(&url, request, RetryPolicy::None).await
    }

    // ── Verification ─────────────────────────────────────────────────────

    pub async fn verify_bvn(
        &self,
        request: &VerifyBvnRequest,
    ) -> Result<VerificationEnvelope, HttpError> {
        let url = format!("{}/api/verify/bvn", self.base_url);
        self.post(&url, request, RetryPolicy::None).await
    }

    pub async fn verify_nin(
        &self,
        request: &VerifyNinRequest,
    ) -> Result<VerificationEnvelope, HttpError> {
        let url = format!("{}/api/verify/nin", self.base_url);
        self.post(&url, request, RetryPolicy::None).await
    }

    // ── Cached reads ─────────────────────────────────────────────────────

    /// GET an arbitrary API path as raw JSON. This is what every query-cache
    /// fetcher runs: the read retry policy applies, the cache stores the
    /// untyped value, and the sub-client deserializes the envelope.
    pub async fn get_value(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<Value, HttpError> {
        let url = self.build_url(path, params);
        self.get(&url, RetryPolicy::Read).await
    }

    fn build_url(&self, path: &str, params: &[(String, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if !params.is_empty() {
            let query = params
                .iter()
                .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            url = format!("{}?{}", url, query);
        }
        url
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(Method::GET, url, None::<&()>, retry)
            .await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.ensure_csrf_cookie().await?;
        self.request_with_retry(Method::POST, url, Some(body), retry)
            .await
    }

    async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.ensure_csrf_cookie().await?;
        self.request_with_retry(Method::PUT, url, Some(body), retry)
            .await
    }

    async fn delete<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.ensure_csrf_cookie().await?;
        self.request_with_retry(Method::DELETE, url, None::<&()>, retry)
            .await
    }

    async fn request_with_retry<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match &retry {
            RetryPolicy::None => {
                return self.do_request(&method, url, body).await;
            }
            RetryPolicy::Read => RetryConfig::read(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request::<T, B>(&method, url, body).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::Server { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::Timeout => true,
                        HttpError::Transport(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let mut req = self.client.request(method.clone(), url);

        // Mutating verbs carry the anti-forgery token.
        if *method != Method::GET {
            if let Some(token) = self.csrf_token.read().await.as_ref() {
                req = req.header("X-XSRF-TOKEN", token);
            }
        }

        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await.map_err(|e| {
            tracing::warn!(error = %e, "transport failure: {} {}", method, url);
            wrap_transport(e)
        })?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let body_text = resp.text().await.unwrap_or_default();
        // 401/419 become typed errors like any other status. No redirect and
        // no session transition happens down here.
        Err(decode_error(status.as_u16(), &body_text))
    }
}

impl Clone for CoopvaultHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            jar: self.jar.clone(),
            csrf_token: self.csrf_token.clone(),
        }
    }
}

fn wrap_transport(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Transport(e)
    }
}

/// Backend error envelope: `{"message": "...", "errors": {"field": ["..."]}}`.
#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    message: Option<String>,
    #[serde(default)]
    errors: HashMap<String, Vec<String>>,
}

/// Decode a non-2xx response into a typed error. Runs once, here — call sites
/// never inspect status codes or bodies themselves.
pub(crate) fn decode_error(status: u16, body: &str) -> HttpError {
    let envelope: ErrorEnvelope = serde_json::from_str(body).unwrap_or_default();
    let message = envelope
        .message
        .unwrap_or_else(|| body.trim().to_string());

    match status {
        401 => HttpError::Unauthorized(message),
        419 => HttpError::SessionExpired,
        404 => HttpError::NotFound(message),
        422 => HttpError::Validation {
            message,
            errors: envelope.errors,
        },
        400..=499 => {
            if envelope.errors.is_empty() {
                HttpError::BadRequest(message)
            } else {
                HttpError::Validation {
                    message,
                    errors: envelope.errors,
                }
            }
        }
        _ => HttpError::Server { status, message },
    }
}

/// Pull the XSRF-TOKEN value out of a `Cookie` header string, URL-decoded.
pub(crate) fn extract_xsrf_token(cookies: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix("XSRF-TOKEN="))
        .and_then(|raw| urlencoding::decode(raw).ok())
        .map(|decoded| decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_unauthorized() {
        let err = decode_error(401, r#"{"message":"Unauthenticated."}"#);
        assert!(matches!(err, HttpError::Unauthorized(m) if m == "Unauthenticated."));
    }

    #[test]
    fn test_decode_error_session_expired() {
        assert!(matches!(decode_error(419, ""), HttpError::SessionExpired));
    }

    #[test]
    fn test_decode_error_validation_with_field_errors() {
        let body = r#"{"message":"The given data was invalid.","errors":{"email":["The email field is required."]}}"#;
        match decode_error(422, body) {
            HttpError::Validation { message, errors } => {
                assert_eq!(message, "The given data was invalid.");
                assert_eq!(
                    errors["email"],
                    vec!["The email field is required.".to_string()]
                );
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_error_4xx_with_errors_is_validation() {
        let body = r#"{"message":"Bad data","errors":{"amount":["Must be positive"]}}"#;
        assert!(matches!(
            decode_error(400, body),
            HttpError::Validation { .. }
        ));
    }

    #[test]
    fn test_decode_error_server() {
        match decode_error(500, r#"{"message":"Server Error"}"#) {
            HttpError::Server { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Server Error");
            }
            other => panic!("expected Server, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_error_non_json_body_falls_back() {
        let err = decode_error(503, "Service Unavailable");
        assert!(matches!(err, HttpError::Server { status: 503, message } if message == "Service Unavailable"));
    }

    #[test]
    fn test_extract_xsrf_token_url_decoded() {
        let cookies = "laravel_session=abc123; XSRF-TOKEN=eyJpdiI6%3D%3D; other=x";
        assert_eq!(extract_xsrf_token(cookies).unwrap(), "eyJpdiI6==");
    }

    #[test]
    fn test_extract_xsrf_token_missing() {
        assert_eq!(extract_xsrf_token("laravel_session=abc123"), None);
        assert_eq!(extract_xsrf_token(""), None);
    }

    #[test]
    fn test_build_url_encodes_params() {
        let http = CoopvaultHttp::new("https://api.example.test/");
        let url = http.build_url(
            "/api/members",
            &[
                ("page".to_string(), "2".to_string()),
                ("search".to_string(), "ade ola".to_string()),
            ],
        );
        assert_eq!(
            url,
            "https://api.example.test/api/members?page=2&search=ade%20ola"
        );
    }
}
