//! Flag and environment variable resolution for command-line tools.
//!
//! Values are read from an explicitly given command-line flag first, then
//! from an environment variable, then from a caller-supplied default. Each
//! getter takes an `optional` switch deciding whether a missing value is an
//! error.
//!
//! # Modules
//!
//! ## Resolver (`resolver`)
//!
//! Typed getters over any [`FlagSource`] and [`EnvSource`]:
//!
//! ```rust,ignore
//! use cmdutil::Resolver;
//! use std::time::Duration;
//!
//! let matches = command().get_matches();
//! let resolver = Resolver::new(&matches);
//!
//! let host = resolver.get_string("host-url", "VC_HOST_URL", false)?;
//! let timeout = resolver.get_duration("timeout", "VC_TIMEOUT", Duration::from_secs(30), true)?;
//! ```
//!
//! ## TLS (`tls`)
//!
//! Resolve the TLS settings bundle in one call:
//!
//! ```rust,ignore
//! use cmdutil::tls::TlsFieldNames;
//!
//! let params = resolver.get_tls_parameters(&TlsFieldNames::with_prefix("vc"))?;
//! ```
//!
//! # Features
//!
//! - `clap` - [`FlagSource`] implementation for `clap::ArgMatches` (enabled by default)

pub mod env;
pub mod error;
pub mod flags;
pub mod parse;
pub mod resolver;
pub mod tls;

// Re-export commonly used types
pub use env::{EnvSource, ProcessEnv};
pub use error::{CmdError, FlagError, Result};
pub use flags::{FlagSource, MemoryFlags};
pub use resolver::Resolver;
pub use tls::{get_tls_parameters, TlsFieldNames, TlsParameters};
