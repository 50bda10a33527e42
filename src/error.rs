//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Reasons a cache lookup can fail.
///
/// Both variants mean the caller must fetch the value from its source of truth.
/// They only differ for diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Lookups are currently switched off
    #[error("cache is disabled")]
    Disabled,

    /// Key is not present in the mapping
    #[error("not found: {0}")]
    NotFound(String),
}

impl CacheError {
    /// Returns true if the lookup was suppressed by `disable`.
    pub fn is_disabled(&self) -> bool {
        matches!(self, CacheError::Disabled)
    }
}

// == Result Type Alias ==
/// Convenience Result type for cache lookups.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CacheError::Disabled.to_string(), "cache is disabled");
        assert_eq!(
            CacheError::NotFound("user:1".to_string()).to_string(),
            "not found: user:1"
        );
    }

    #[test]
    fn test_error_classification() {
        let disabled = CacheError::Disabled;
        let missing = CacheError::NotFound("k".to_string());

        assert!(disabled.is_disabled());
        assert!(!missing.is_disabled());
    }
}
