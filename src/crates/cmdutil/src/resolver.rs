//! Flag and environment variable resolution.
//!
//! Every getter checks sources in a fixed order:
//!
//! 1. the command-line flag, if it was explicitly given
//! 2. the environment variable
//! 3. the caller's default (typed getters only)
//!
//! # Example
//!
//! ```
//! use cmdutil::flags::MemoryFlags;
//! use cmdutil::Resolver;
//! use std::collections::HashMap;
//!
//! let flags = MemoryFlags::new().with_string("host-url", "localhost:8080");
//! let env = HashMap::from([("TIMEOUT".to_string(), "30s".to_string())]);
//! let resolver = Resolver::with_env(&flags, &env);
//!
//! let host = resolver.get_string("host-url", "HOST_URL", false)?;
//! let timeout = resolver.get_duration(
//!     "timeout",
//!     "TIMEOUT",
//!     std::time::Duration::from_secs(5),
//!     true,
//! )?;
//!
//! assert_eq!(host, "localhost:8080");
//! assert_eq!(timeout.as_secs(), 30);
//! # Ok::<(), cmdutil::CmdError>(())
//! ```

use crate::env::{EnvSource, ProcessEnv};
use crate::error::{CmdError, Result};
use crate::flags::FlagSource;
use crate::parse::{parse_bool, parse_duration};
use std::time::Duration;
use tracing::debug;

/// Outcome of looking up the environment variable after the flag was not set.
enum EnvValue {
    Value(String),
    Unset,
}

/// Resolves configuration values from a [`FlagSource`] and an [`EnvSource`].
///
/// The resolver only borrows its sources and holds no state of its own.
#[derive(Debug, Clone)]
pub struct Resolver<'a, F: ?Sized, E = ProcessEnv> {
    flags: &'a F,
    env: E,
}

impl<'a, F: FlagSource + ?Sized> Resolver<'a, F, ProcessEnv> {
    /// Resolve against `flags` and the process environment.
    pub fn new(flags: &'a F) -> Self {
        Self {
            flags,
            env: ProcessEnv,
        }
    }
}

impl<'a, F: FlagSource + ?Sized, E: EnvSource> Resolver<'a, F, E> {
    /// Resolve against `flags` and a custom environment.
    pub fn with_env(flags: &'a F, env: E) -> Self {
        Self { flags, env }
    }

    /// Like [`get_string`](Self::get_string) with `optional = true`, mapping
    /// any error to an empty string.
    pub fn get_optional_string(&self, flag: &str, env: &str) -> String {
        self.get_string(flag, env, true).unwrap_or_default()
    }

    /// Resolve a string value.
    ///
    /// An explicitly set flag with an empty value is an error even when
    /// `optional` is true.
    pub fn get_string(&self, flag: &str, env: &str, optional: bool) -> Result<String> {
        if self.flags.is_set(flag) {
            let value = self.read_flag(flag, |f| self.flags.get_string(f))?;
            if value.is_empty() {
                return Err(CmdError::EmptyValue(flag.to_string()));
            }
            debug!(flag, "resolved value from command line flag");
            return Ok(value);
        }

        match self.lookup_env(flag, env, optional)? {
            EnvValue::Value(value) => Ok(value),
            EnvValue::Unset => Ok(String::new()),
        }
    }

    /// Like [`get_string_array`](Self::get_string_array) with
    /// `optional = true`, mapping any error to an empty vector.
    pub fn get_optional_string_array(&self, flag: &str, env: &str) -> Vec<String> {
        self.get_string_array(flag, env, true).unwrap_or_default()
    }

    /// Resolve a list of strings.
    ///
    /// Flag values are returned as given. Environment values are split on
    /// commas. An explicitly set flag with no elements is an error even when
    /// `optional` is true.
    pub fn get_string_array(
        &self,
        flag: &str,
        env: &str,
        optional: bool,
    ) -> Result<Vec<String>> {
        if self.flags.is_set(flag) {
            let values = self.read_flag(flag, |f| self.flags.get_string_array(f))?;
            if values.is_empty() {
                return Err(CmdError::EmptyValue(flag.to_string()));
            }
            debug!(flag, count = values.len(), "resolved values from command line flag");
            return Ok(values);
        }

        match self.lookup_env(flag, env, optional)? {
            EnvValue::Value(value) => Ok(value.split(',').map(str::to_string).collect()),
            EnvValue::Unset => Ok(Vec::new()),
        }
    }

    /// Resolve a boolean. See [`parse_bool`] for accepted literals.
    pub fn get_bool(&self, flag: &str, env: &str, default: bool, optional: bool) -> Result<bool> {
        self.get_parsed(flag, env, default, optional, parse_bool)
    }

    /// Resolve a duration such as `30s` or `1h15m`.
    pub fn get_duration(
        &self,
        flag: &str,
        env: &str,
        default: Duration,
        optional: bool,
    ) -> Result<Duration> {
        self.get_parsed(flag, env, default, optional, parse_duration)
    }

    /// Resolve a signed integer.
    pub fn get_int(&self, flag: &str, env: &str, default: i64, optional: bool) -> Result<i64> {
        self.get_parsed(flag, env, default, optional, |s| s.parse::<i64>())
    }

    /// Resolve a floating-point number.
    pub fn get_float(&self, flag: &str, env: &str, default: f64, optional: bool) -> Result<f64> {
        self.get_parsed(flag, env, default, optional, |s| s.parse::<f64>())
    }

    fn get_parsed<T, P, PE>(
        &self,
        flag: &str,
        env: &str,
        default: T,
        optional: bool,
        parse: P,
    ) -> Result<T>
    where
        P: FnOnce(&str) -> std::result::Result<T, PE>,
        PE: std::fmt::Display,
    {
        let raw = self.get_string(flag, env, optional)?;
        if raw.is_empty() {
            debug!(flag, env, "using default value");
            return Ok(default);
        }
        parse(&raw).map_err(|e| CmdError::invalid_format(flag, &raw, e))
    }

    fn read_flag<T>(
        &self,
        flag: &str,
        read: impl FnOnce(&str) -> std::result::Result<T, crate::error::FlagError>,
    ) -> Result<T> {
        read(flag).map_err(|source| CmdError::FlagAccess {
            flag: flag.to_string(),
            source,
        })
    }

    fn lookup_env(&self, flag: &str, env: &str, optional: bool) -> Result<EnvValue> {
        let value = self.env.lookup(env);

        match (optional, value) {
            (_, Some(value)) if !value.is_empty() => {
                debug!(env, "resolved value from environment variable");
                Ok(EnvValue::Value(value))
            }
            (true, Some(_)) | (true, None) => Ok(EnvValue::Unset),
            (false, Some(_)) => Err(CmdError::EmptyValue(env.to_string())),
            (false, None) => Err(CmdError::NotConfigured {
                flag: flag.to_string(),
                env: env.to_string(),
            }),
        }
    }
}
