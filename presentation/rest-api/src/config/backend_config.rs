use std::env;
use std::time::Duration;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Location of the shopping backend that owns the cart and the agent.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl BackendConfig {
    /// Load backend configuration from environment variables
    ///
    /// Environment variables:
    /// - BACKEND_URL: Base URL of the backend (default: "http://localhost:8000")
    /// - BACKEND_TIMEOUT_SECS: Request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let base_url = env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        let timeout = parse_timeout(env::var("BACKEND_TIMEOUT_SECS").ok().as_deref());

        Self { base_url, timeout }
    }
}

fn parse_timeout(raw: Option<&str>) -> Duration {
    let secs = raw
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_timeout_in_seconds() {
        assert_eq!(parse_timeout(Some("5")), Duration::from_secs(5));
    }

    #[test]
    fn should_fall_back_to_default_timeout_when_unset_or_invalid() {
        let default = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

        assert_eq!(parse_timeout(None), default);
        assert_eq!(parse_timeout(Some("soon")), default);
        assert_eq!(parse_timeout(Some("0")), default);
    }
}
