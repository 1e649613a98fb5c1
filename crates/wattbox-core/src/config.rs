use std::path::PathBuf;
use std::time::Duration;

use crate::cache::CacheMode;
use crate::ValidationError;

/// The one endpoint this crate talks to.
pub const TIBBER_API: &str = "https://api.tibber.com/v1-beta/gql";

/// History depth fetched when the caller does not override it.
pub const DEFAULT_LOOKBACK_WEEKS: u32 = 4;

/// Per-request transport deadline. The reference behavior hard-coded
/// 500 ms, which falls over on real-world links; 3 s is the default here
/// and callers can still tighten it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(3_000);

/// Freshness window of the response cache.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(90 * 60);

pub const DEFAULT_CACHE_DIR: &str = "http_cache";

/// Configuration for one fetch invocation.
///
/// Constructed at the call boundary and passed in; the fetch loop never
/// reads ambient process state.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// History depth in weeks; must be at least 1.
    pub lookback_weeks: u32,
    /// Per-request transport deadline.
    pub timeout: Duration,
    /// Response cache freshness window.
    pub cache_ttl: Duration,
    pub cache_mode: CacheMode,
    pub cache_dir: PathBuf,
    /// GraphQL endpoint; overridable for tests.
    pub endpoint: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            lookback_weeks: DEFAULT_LOOKBACK_WEEKS,
            timeout: DEFAULT_TIMEOUT,
            cache_ttl: DEFAULT_CACHE_TTL,
            cache_mode: CacheMode::default(),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            endpoint: String::from(TIBBER_API),
        }
    }
}

impl FetchConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.lookback_weeks == 0 {
            return Err(ValidationError::InvalidLookback);
        }
        Ok(())
    }

    pub fn with_lookback_weeks(mut self, weeks: u32) -> Self {
        self.lookback_weeks = weeks;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn with_cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = dir.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = FetchConfig::default();
        assert_eq!(config.lookback_weeks, 4);
        assert_eq!(config.timeout, Duration::from_millis(3_000));
        assert_eq!(config.cache_ttl, Duration::from_secs(5_400));
        assert_eq!(config.endpoint, TIBBER_API);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_lookback_is_rejected() {
        let err = FetchConfig::default()
            .with_lookback_weeks(0)
            .validate()
            .expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidLookback));
    }
}
