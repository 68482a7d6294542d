//! Error types for flag and environment resolution.

use thiserror::Error;

/// Result type for resolution operations.
pub type Result<T> = std::result::Result<T, CmdError>;

/// Errors returned while resolving a configuration value.
#[derive(Debug, Error)]
pub enum CmdError {
    /// Neither the flag nor the environment variable was supplied for a
    /// mandatory lookup.
    #[error("Neither {flag} (command line flag) nor {env} (environment variable) have been set.")]
    NotConfigured { flag: String, env: String },

    /// A flag or environment variable was supplied with an empty value.
    #[error("{0} value is empty")]
    EmptyValue(String),

    /// The resolved value could not be converted to the requested type.
    #[error("invalid value '{value}' for {flag}: {reason}")]
    InvalidFormat {
        flag: String,
        value: String,
        reason: String,
    },

    /// The flag source failed to return a value for a flag it reported as set.
    #[error("{flag} flag not found: {source}")]
    FlagAccess {
        flag: String,
        #[source]
        source: FlagError,
    },
}

impl CmdError {
    pub(crate) fn invalid_format(
        flag: &str,
        value: &str,
        reason: impl std::fmt::Display,
    ) -> Self {
        CmdError::InvalidFormat {
            flag: flag.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Errors reported by a [`FlagSource`](crate::flags::FlagSource).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlagError {
    /// The flag was never registered with the parser.
    #[error("unknown flag '{0}'")]
    Unknown(String),

    /// The flag is registered but carries no value.
    #[error("flag '{0}' has no value")]
    Missing(String),

    /// The stored value has a different type than requested.
    #[error("flag '{name}' could not be read: {reason}")]
    Mismatch { name: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_configured_names_both_sources() {
        let err = CmdError::NotConfigured {
            flag: "host-url".to_string(),
            env: "TEST_HOST_URL".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("host-url (command line flag)"));
        assert!(msg.contains("TEST_HOST_URL (environment variable) have been set."));
    }

    #[test]
    fn test_flag_access_wraps_source() {
        let err = CmdError::FlagAccess {
            flag: "tls-cacerts".to_string(),
            source: FlagError::Unknown("tls-cacerts".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "tls-cacerts flag not found: unknown flag 'tls-cacerts'"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_invalid_format_carries_value() {
        let err = CmdError::invalid_format("timeout", "soon", "unknown unit");
        match err {
            CmdError::InvalidFormat { flag, value, .. } => {
                assert_eq!(flag, "timeout");
                assert_eq!(value, "soon");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
