//! Configuration for portfolio analytics computation.

use serde::{Deserialize, Serialize};

/// Configuration for portfolio analytics computation.
///
/// Controls whether per-holding work is spread across threads. Results are
/// identical whichever path runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Enable parallel processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum holdings count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 100, // Use parallel if >=100 holdings
        }
    }
}

impl AnalyticsConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = AnalyticsConfig::default();
        assert!(config.parallel);
        assert_eq!(config.parallel_threshold, 100);
    }

    #[test]
    fn test_sequential() {
        let config = AnalyticsConfig::sequential();
        assert!(!config.parallel);
        assert!(!config.should_parallelize(10_000));
    }

    #[test]
    fn test_builder_pattern() {
        let config = AnalyticsConfig::new().with_parallel(true).with_threshold(50);

        assert!(config.parallel);
        assert_eq!(config.parallel_threshold, 50);
    }

    #[test]
    fn test_should_parallelize() {
        let config = AnalyticsConfig::new().with_threshold(100);

        #[cfg(feature = "parallel")]
        {
            assert!(!config.should_parallelize(50));
            assert!(config.should_parallelize(100));
            assert!(config.should_parallelize(500));
        }

        #[cfg(not(feature = "parallel"))]
        {
            assert!(!config.should_parallelize(50));
            assert!(!config.should_parallelize(100));
            assert!(!config.should_parallelize(500));
        }
    }

    #[test]
    fn test_serde() {
        let config = AnalyticsConfig::new().with_threshold(75);

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AnalyticsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);

        // Missing fields fall back to defaults
        let partial: AnalyticsConfig = serde_json::from_str(r#"{"parallel":false}"#).unwrap();
        assert!(!partial.parallel);
        assert_eq!(partial.parallel_threshold, 100);
    }
}
