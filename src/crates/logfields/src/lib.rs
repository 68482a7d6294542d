//! Standard structured logging fields.
//!
//! Field names are shared across services so log pipelines can query them
//! uniformly. Use the name constants directly in `tracing` macros, or build a
//! [`LogField`] and record it on a span:
//!
//! ```
//! use logfields::{with_cert_pool_size, FIELD_CERT_POOL_SIZE};
//!
//! let field = with_cert_pool_size(10);
//! tracing::info!({ FIELD_CERT_POOL_SIZE } = field.value(), "Loaded CA certificates");
//!
//! let span = tracing::info_span!("tls", certPoolSize = tracing::field::Empty);
//! field.record(&span);
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use tracing::Span;

/// Number of certificates in a TLS certificate pool.
pub const FIELD_CERT_POOL_SIZE: &str = "certPoolSize";

/// A single named integer field attached to a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogField {
    key: &'static str,
    value: i64,
}

impl LogField {
    pub fn new(key: &'static str, value: i64) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Record the field on `span`.
    ///
    /// The span must have declared the field (for example with
    /// `tracing::field::Empty`); undeclared fields are ignored by `tracing`.
    pub fn record(&self, span: &Span) {
        span.record(self.key, self.value);
    }
}

impl fmt::Display for LogField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

impl Serialize for LogField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &self.value)?;
        map.end()
    }
}

/// Field carrying the size of a certificate pool.
pub fn with_cert_pool_size(value: i64) -> LogField {
    LogField::new(FIELD_CERT_POOL_SIZE, value)
}
