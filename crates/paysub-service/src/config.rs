//! Service configuration.

use paysub_core::PlanCode;

/// Paystack API base URL used when none is configured.
const DEFAULT_PAYSTACK_API_URL: &str = "https://api.paystack.co";

/// The pre-provisioned demo plan used when none is configured.
const DEFAULT_PLAN_CODE: &str = "PLN_hn7hh4a4480fmp6";

/// Service configuration loaded from environment variables.
///
/// Loaded once in `main` and injected; nothing reads the environment at call
/// sites.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:8080").
    pub listen_addr: String,

    /// Path to `RocksDB` data directory (default: "/data/paysub").
    pub data_dir: String,

    /// Paystack secret key. Absence disables every processor call.
    pub paystack_secret_key: Option<String>,

    /// Paystack API base URL (default: the public endpoint; overridable for tests).
    pub paystack_api_url: String,

    /// The fixed, pre-provisioned billing plan customers subscribe to.
    pub plan_code: PlanCode,

    /// CORS allowed origins.
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "/data/paysub".into()),
            paystack_secret_key: std::env::var("PAYSTACK_SECRET_KEY").ok(),
            paystack_api_url: std::env::var("PAYSTACK_API_URL")
                .unwrap_or_else(|_| DEFAULT_PAYSTACK_API_URL.into()),
            plan_code: PlanCode::new(
                std::env::var("PLAN_CODE").unwrap_or_else(|_| DEFAULT_PLAN_CODE.into()),
            ),
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            max_body_bytes: std::env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1024 * 1024), // 1MB
            request_timeout_seconds: std::env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".into(),
            data_dir: "/data/paysub".into(),
            paystack_secret_key: None,
            paystack_api_url: DEFAULT_PAYSTACK_API_URL.into(),
            plan_code: PlanCode::new(DEFAULT_PLAN_CODE),
            cors_origins: vec!["*".into()],
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
        }
    }
}
