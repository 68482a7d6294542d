//! Command-line flag access.
//!
//! The resolver never talks to an argument parser directly. It reads flags
//! through [`FlagSource`], which is implemented for `clap::ArgMatches` (behind
//! the default `clap` feature) and for the in-memory [`MemoryFlags`].

use crate::error::FlagError;
use std::collections::HashMap;

/// Read-only view over parsed command-line flags.
pub trait FlagSource {
    /// Whether the flag was explicitly given on the command line.
    ///
    /// A flag that only carries its registered default is not set.
    fn is_set(&self, name: &str) -> bool;

    /// Read a single-valued flag.
    fn get_string(&self, name: &str) -> Result<String, FlagError>;

    /// Read a multi-valued flag, in the order the values were given.
    fn get_string_array(&self, name: &str) -> Result<Vec<String>, FlagError>;
}

impl<T: FlagSource + ?Sized> FlagSource for &T {
    fn is_set(&self, name: &str) -> bool {
        (**self).is_set(name)
    }

    fn get_string(&self, name: &str) -> Result<String, FlagError> {
        (**self).get_string(name)
    }

    fn get_string_array(&self, name: &str) -> Result<Vec<String>, FlagError> {
        (**self).get_string_array(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FlagValue {
    Single(String),
    Multi(Vec<String>),
}

/// In-memory flag set.
///
/// Every flag stored here counts as explicitly set. Useful for tests and for
/// callers that collect flags without clap.
///
/// # Example
///
/// ```
/// use cmdutil::flags::{FlagSource, MemoryFlags};
///
/// let flags = MemoryFlags::new()
///     .with_string("host-url", "localhost:8080")
///     .with_array("tls-cacerts", ["a.pem", "b.pem"]);
///
/// assert!(flags.is_set("host-url"));
/// assert!(!flags.is_set("tls-cert"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFlags {
    values: HashMap<String, FlagValue>,
}

impl MemoryFlags {
    /// Create an empty flag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single-valued flag.
    pub fn with_string(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_string(name, value);
        self
    }

    /// Set a multi-valued flag.
    pub fn with_array<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_array(name, values);
        self
    }

    /// Set a single-valued flag in place, replacing any previous value.
    pub fn set_string(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values
            .insert(name.into(), FlagValue::Single(value.into()));
    }

    /// Set a multi-valued flag in place, replacing any previous value.
    pub fn set_array<I, S>(&mut self, name: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.insert(
            name.into(),
            FlagValue::Multi(values.into_iter().map(Into::into).collect()),
        );
    }

    /// Number of flags stored.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no flags are stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FlagSource for MemoryFlags {
    fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    fn get_string(&self, name: &str) -> Result<String, FlagError> {
        match self.values.get(name) {
            Some(FlagValue::Single(value)) => Ok(value.clone()),
            Some(FlagValue::Multi(_)) => Err(FlagError::Mismatch {
                name: name.to_string(),
                reason: "flag holds multiple values".to_string(),
            }),
            None => Err(FlagError::Unknown(name.to_string())),
        }
    }

    fn get_string_array(&self, name: &str) -> Result<Vec<String>, FlagError> {
        match self.values.get(name) {
            Some(FlagValue::Multi(values)) => Ok(values.clone()),
            Some(FlagValue::Single(value)) => Ok(vec![value.clone()]),
            None => Err(FlagError::Unknown(name.to_string())),
        }
    }
}

#[cfg(feature = "clap")]
mod clap_source {
    use super::FlagSource;
    use crate::error::FlagError;
    use clap::parser::{MatchesError, ValueSource};
    use clap::ArgMatches;

    fn map_matches_error(name: &str, err: MatchesError) -> FlagError {
        match err {
            MatchesError::UnknownArgument { .. } => FlagError::Unknown(name.to_string()),
            other => FlagError::Mismatch {
                name: name.to_string(),
                reason: other.to_string(),
            },
        }
    }

    impl FlagSource for ArgMatches {
        fn is_set(&self, name: &str) -> bool {
            // Unknown ids would trip clap's debug assertions in `value_source`.
            if !matches!(self.try_contains_id(name), Ok(true)) {
                return false;
            }
            self.value_source(name) == Some(ValueSource::CommandLine)
        }

        fn get_string(&self, name: &str) -> Result<String, FlagError> {
            self.try_get_one::<String>(name)
                .map_err(|e| map_matches_error(name, e))?
                .cloned()
                .ok_or_else(|| FlagError::Missing(name.to_string()))
        }

        fn get_string_array(&self, name: &str) -> Result<Vec<String>, FlagError> {
            let values: Vec<String> = self
                .try_get_many::<String>(name)
                .map_err(|e| map_matches_error(name, e))?
                .map(|values| values.cloned().collect())
                .unwrap_or_default();

            // `--flag ""` carries no element.
            if values.len() == 1 && values[0].is_empty() {
                return Ok(Vec::new());
            }
            Ok(values)
        }
    }
}
