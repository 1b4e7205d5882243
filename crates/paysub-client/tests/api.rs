//! Paystack client tests against a mocked API.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use paysub_client::{ClientError, PaystackClient, SubscribeOutcome};
use paysub_core::{CustomerCode, CustomerId, EmailToken, NewCustomer, PlanCode, SubscriptionCode};

const SECRET: &str = "sk_test_secret";

fn client_for(server: &MockServer) -> PaystackClient {
    PaystackClient::with_base_url(server.uri(), SECRET).expect("client should build")
}

fn valid_input() -> NewCustomer {
    NewCustomer::new("a@b.com", "A", "B", "08011112222").expect("valid input")
}

// ============================================================================
// Customer creation
// ============================================================================

#[tokio::test]
async fn create_customer_returns_the_issued_code_unchanged() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/customer"))
        .and(header("Authorization", format!("Bearer {SECRET}")))
        .and(body_json(json!({
            "email": "a@b.com",
            "first_name": "A",
            "last_name": "B",
            "phone": "08011112222",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Customer created",
            "data": {
                "email": "a@b.com",
                "integration": 100_032,
                "domain": "test",
                "customer_code": "CUS_1",
                "id": 1173,
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let code = client.create_customer(&valid_input()).await.unwrap();

    assert_eq!(code, CustomerCode::new("CUS_1"));
}

#[tokio::test]
async fn create_customer_without_code_in_response_is_rejected() {
    let server = MockServer::start().await;

    // Success envelope, but the payload is missing the customer code.
    Mock::given(method("POST"))
        .and(path("/customer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Customer created",
            "data": { "email": "a@b.com", "id": 1173 }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.create_customer(&valid_input()).await;

    assert!(matches!(result, Err(ClientError::Api { .. })));
}

#[tokio::test]
async fn create_customer_rejection_carries_the_processor_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/customer"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": false,
            "message": "email address is invalid",
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.create_customer(&valid_input()).await;

    match result {
        Err(ClientError::Api {
            status, message, ..
        }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "email address is invalid");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

// ============================================================================
// Customer listing
// ============================================================================

#[tokio::test]
async fn list_customers_returns_the_first_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customer"))
        .and(header("Authorization", format!("Bearer {SECRET}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Customers retrieved",
            "data": [
                {
                    "id": 1173,
                    "customer_code": "CUS_1",
                    "email": "a@b.com",
                    "first_name": "A",
                    "last_name": "B",
                    "phone": "08011112222",
                },
                {
                    "id": 1174,
                    "customer_code": "CUS_2",
                    "email": "c@d.com",
                    "first_name": null,
                    "last_name": null,
                    "phone": null,
                }
            ],
            "meta": { "total": 2, "perPage": 50, "page": 1, "pageCount": 1 }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let customers = client.list_customers().await.unwrap();

    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0].customer_code, CustomerCode::new("CUS_1"));
    assert_eq!(customers[0].id, CustomerId::new(1173));
    assert_eq!(customers[1].email, "c@d.com");
    assert_eq!(customers[1].first_name, None);
}

// ============================================================================
// Subscription creation
// ============================================================================

#[tokio::test]
async fn subscribe_with_stored_authorization_creates_directly() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/subscription"))
        .and(body_json(json!({
            "customer": "CUS_1",
            "plan": "PLN_plan",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Subscription successfully created",
            "data": {
                "customer": 1173,
                "plan": 28,
                "status": "active",
                "subscription_code": "SUB_1",
                "email_token": "tok_1",
                "amount": 50_000,
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    // The checkout fallback must not fire on the direct path.
    Mock::given(method("POST"))
        .and(path("/transaction/initialize"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let outcome = client
        .create_subscription(
            &CustomerCode::new("CUS_1"),
            &PlanCode::new("PLN_plan"),
            "a@b.com",
        )
        .await
        .unwrap();

    assert_eq!(
        outcome,
        SubscribeOutcome::Created(SubscriptionCode::new("SUB_1"))
    );
}

#[tokio::test]
async fn subscribe_without_authorization_falls_back_to_checkout() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/subscription"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": false,
            "message": "This customer has no saved authorizations",
            "code": "no_active_authorizations_for_customer",
            "meta": {
                "nextStep": "Initialize a transaction to charge the customer"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/transaction/initialize"))
        .and(body_json(json!({
            "email": "a@b.com",
            "plan": "PLN_plan",
            "amount": 0,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Authorization URL created",
            "data": {
                "authorization_url": "https://checkout.paystack.com/0peioxfhpn",
                "access_code": "0peioxfhpn",
                "reference": "7PVGX8MEk85tgeEpVDtD",
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    // Neither the disable nor a re-create path may be touched on the fallback.
    Mock::given(method("POST"))
        .and(path("/subscription/disable"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let outcome = client
        .create_subscription(
            &CustomerCode::new("CUS_1"),
            &PlanCode::new("PLN_plan"),
            "a@b.com",
        )
        .await
        .unwrap();

    assert_eq!(
        outcome,
        SubscribeOutcome::RedirectRequired {
            authorization_url: "https://checkout.paystack.com/0peioxfhpn".to_string(),
        }
    );
}

#[tokio::test]
async fn subscribe_rejection_without_next_step_is_an_error() {
    let server = MockServer::start().await;

    // Same code, but no continuation hint: no fallback, plain rejection.
    Mock::given(method("POST"))
        .and(path("/subscription"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": false,
            "message": "This customer has no saved authorizations",
            "code": "no_active_authorizations_for_customer",
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/transaction/initialize"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .create_subscription(
            &CustomerCode::new("CUS_1"),
            &PlanCode::new("PLN_plan"),
            "a@b.com",
        )
        .await;

    match result {
        Err(ClientError::Api { code, .. }) => {
            assert_eq!(code.as_deref(), Some("no_active_authorizations_for_customer"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn subscribe_unrelated_rejection_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/subscription"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": false,
            "message": "Plan not found",
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .create_subscription(
            &CustomerCode::new("CUS_1"),
            &PlanCode::new("PLN_missing"),
            "a@b.com",
        )
        .await;

    match result {
        Err(ClientError::Api { status, message, .. }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Plan not found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

// ============================================================================
// Subscription lookup
// ============================================================================

#[tokio::test]
async fn first_subscription_returns_the_first_listing_entry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/subscription"))
        .and(query_param("customer", "1173"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Subscriptions retrieved",
            "data": [
                {
                    "subscription_code": "SUB_1",
                    "email_token": "tok_1",
                    "status": "active",
                    "amount": 50_000,
                    "next_payment_date": "2026-09-01T00:00:00.000Z",
                    "plan": {
                        "plan_code": "PLN_plan",
                        "name": "Monthly",
                        "amount": 50_000,
                        "interval": "monthly",
                        "currency": "NGN",
                    }
                },
                {
                    "subscription_code": "SUB_2",
                    "email_token": "tok_2",
                    "status": "cancelled",
                }
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let subscription = client
        .first_subscription_for(CustomerId::new(1173))
        .await
        .unwrap()
        .expect("a subscription should be present");

    assert_eq!(subscription.subscription_code, SubscriptionCode::new("SUB_1"));
    assert_eq!(subscription.email_token, EmailToken::new("tok_1"));
    assert!(subscription.status.is_active());
    assert_eq!(
        subscription.plan.unwrap().plan_code,
        PlanCode::new("PLN_plan")
    );
}

#[tokio::test]
async fn first_subscription_is_absent_when_the_listing_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/subscription"))
        .and(query_param("customer", "9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Subscriptions retrieved",
            "data": []
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let subscription = client
        .first_subscription_for(CustomerId::new(9))
        .await
        .unwrap();

    assert!(subscription.is_none());
}

// ============================================================================
// Subscription disable
// ============================================================================

#[tokio::test]
async fn disable_reports_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/subscription/disable"))
        .and(body_json(json!({ "code": "SUB_1", "token": "tok_1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Subscription disabled successfully",
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let disabled = client
        .disable_subscription(&SubscriptionCode::new("SUB_1"), &EmailToken::new("tok_1"))
        .await
        .unwrap();

    assert!(disabled);
}

#[tokio::test]
async fn disable_returns_false_on_an_explicit_unsuccessful_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/subscription/disable"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": false,
            "message": "Subscription with code not found or already inactive",
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let disabled = client
        .disable_subscription(&SubscriptionCode::new("SUB_1"), &EmailToken::new("tok_1"))
        .await
        .unwrap();

    assert!(!disabled);
}

#[tokio::test]
async fn disable_surfaces_network_failure() {
    // Nothing is listening here; the connection itself fails.
    let client = PaystackClient::with_base_url("http://127.0.0.1:9", SECRET).unwrap();

    let result = client
        .disable_subscription(&SubscriptionCode::new("SUB_1"), &EmailToken::new("tok_1"))
        .await;

    assert!(matches!(result, Err(ClientError::Http(_))));
}
