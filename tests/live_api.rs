//! Integration tests against a live Coopvault backend.
//!
//! These exercise the full bootstrap → login → read → mutate → logout
//! lifecycle, so they need a staging server and a seeded test account.
//!
//! All tests are `#[ignore]` because they require network access and
//! credentials. Run with:
//! ```bash
//! COOPVAULT_API_URL=... COOPVAULT_TEST_EMAIL=... COOPVAULT_TEST_PASSWORD=... \
//!     cargo test --test live_api -- --ignored
//! ```

use coopvault_sdk::prelude::*;

fn test_client() -> CoopvaultClient {
    dotenvy::dotenv().ok();
    CoopvaultClient::from_env().expect("client should build")
}

fn credentials() -> (String, String) {
    (
        std::env::var("COOPVAULT_TEST_EMAIL").expect("COOPVAULT_TEST_EMAIL not set"),
        std::env::var("COOPVAULT_TEST_PASSWORD").expect("COOPVAULT_TEST_PASSWORD not set"),
    )
}

#[tokio::test]
#[ignore]
async fn session_lifecycle() {
    let client = test_client();

    // Cold start: no cookie yet, so the identity check must fail cleanly.
    let snap = client.auth().initialize().await;
    assert!(!snap.is_loading);
    assert!(!snap.is_authenticated);

    let (email, password) = credentials();
    let snap = client
        .auth()
        .login(&email, &password)
        .await
        .expect("login should succeed");
    assert!(snap.is_authenticated);
    assert!(snap.user.is_some());
    assert!(snap.tenant.is_some());

    // Session revalidation returns the same identity.
    let user = client.auth().check_session().await.expect("session valid");
    assert_eq!(Some(user), client.auth().snapshot().await.user);

    let snap = client.auth().logout().await;
    assert!(!snap.is_authenticated);

    // The cookie is gone server-side too.
    assert!(client.auth().check_session().await.is_err());
}

#[tokio::test]
#[ignore]
async fn member_reads_are_cached() {
    let client = test_client();
    let (email, password) = credentials();
    client.auth().login(&email, &password).await.unwrap();

    let filter = MemberFilter::default();
    let first = client.members().list(&filter).await.unwrap();
    // Second read must come from cache; equality is the observable proxy.
    let second = client.members().list(&filter).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
#[ignore]
async fn fund_then_withdraw_round_trip() {
    let client = test_client();
    let (email, password) = credentials();
    client.auth().login(&email, &password).await.unwrap();

    let members = client.members().list(&MemberFilter::default()).await.unwrap();
    let member = members.first().expect("seeded member required");

    let funded = client
        .transactions()
        .fund(&FundRequest {
            member_id: member.id,
            amount: rust_decimal::Decimal::new(100, 0),
            note: Some("integration test".to_string()),
        })
        .await
        .expect("fund should succeed");
    assert_eq!(funded.kind, TransactionKind::Fund);

    let withdrawn = client
        .transactions()
        .withdraw(&WithdrawRequest {
            member_id: member.id,
            amount: rust_decimal::Decimal::new(100, 0),
            note: Some("integration test".to_string()),
        })
        .await
        .expect("withdraw should succeed");
    assert_eq!(withdrawn.kind, TransactionKind::Withdraw);

    // Mutations invalidate the member cache; the next read is fresh.
    let refreshed = client.members().list(&MemberFilter::default()).await.unwrap();
    assert!(refreshed.iter().any(|m| m.id == member.id));
}

#[tokio::test]
#[ignore]
async fn reports_resolve() {
    let client = test_client();
    let (email, password) = credentials();
    client.auth().login(&email, &password).await.unwrap();

    client.reports().financial_summary().await.unwrap();
    client.reports().user_growth().await.unwrap();
    client.reports().kyc_verification().await.unwrap();
}
