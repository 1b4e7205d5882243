//! Common test utilities for paysub integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use tempfile::TempDir;
use wiremock::MockServer;

use paysub_core::PlanCode;
use paysub_service::{create_router, AppState, ServiceConfig};
use paysub_store::RocksStore;

/// The plan every test subscribes against.
pub const TEST_PLAN: &str = "PLN_test_plan";

/// The credential handed to the mocked processor.
pub const TEST_SECRET: &str = "sk_test_secret";

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// The mocked Paystack API.
    pub paystack: MockServer,
    /// The record store behind the service.
    pub store: Arc<RocksStore>,
    /// Temporary directory for the database (kept alive for test duration).
    pub _temp_dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness with a fresh database and a mocked processor.
    pub async fn new() -> Self {
        Self::build(true).await
    }

    /// Create a harness with no processor credential configured.
    pub async fn unconfigured() -> Self {
        Self::build(false).await
    }

    async fn build(with_credential: bool) -> Self {
        let paystack = MockServer::start().await;
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = Arc::new(RocksStore::open(temp_dir.path()).expect("Failed to open store"));

        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            data_dir: temp_dir.path().to_string_lossy().to_string(),
            paystack_secret_key: with_credential.then(|| TEST_SECRET.to_string()),
            paystack_api_url: paystack.uri(),
            plan_code: PlanCode::new(TEST_PLAN),
            cors_origins: vec!["*".into()],
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
        };

        let state = AppState::new(Arc::clone(&store), config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            paystack,
            store,
            _temp_dir: temp_dir,
        }
    }
}
