//! Runtime configuration
//!
//! Only the log level is configurable. It never changes what is written to
//! standard output.

use tracing::Level;

use crate::error::{FundamentalsError, FundamentalsResult};

/// Environment variable holding the log level
pub const LOG_ENV: &str = "FUNDAMENTALS_LOG";

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundamentalsConfig {
    /// One of trace, debug, info, warn, error (case-insensitive)
    pub log_level: String,
}

impl FundamentalsConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Self {
        match std::env::var(LOG_ENV) {
            Ok(level) if !level.trim().is_empty() => Self {
                log_level: level.trim().to_string(),
            },
            _ => Self::default(),
        }
    }

    /// Parse the configured level
    pub fn level(&self) -> FundamentalsResult<Level> {
        self.log_level.parse::<Level>().map_err(|e| {
            FundamentalsError::Config(format!("{}: {:?}", e, self.log_level))
        })
    }
}

impl Default for FundamentalsConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_warn() {
        let config = FundamentalsConfig::default();
        assert_eq!(config.level().unwrap(), Level::WARN);
    }

    #[test]
    fn test_level_case_insensitive() {
        let config = FundamentalsConfig {
            log_level: "DEBUG".to_string(),
        };
        assert_eq!(config.level().unwrap(), Level::DEBUG);
    }

    #[test]
    fn test_unknown_level_rejected() {
        let config = FundamentalsConfig {
            log_level: "loud".to_string(),
        };
        let err = config.level().unwrap_err();
        assert!(matches!(err, FundamentalsError::Config(_)));
        assert!(err.to_string().contains("loud"));
    }
}
