//! TLS settings resolved from flags and environment variables.

use crate::env::EnvSource;
use crate::error::{CmdError, Result};
use crate::flags::FlagSource;
use crate::parse::parse_bool;
use crate::resolver::Resolver;

/// TLS settings shared by servers and clients.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlsParameters {
    /// Trust the operating system's root certificates in addition to `ca_certs`.
    pub use_system_cert_pool: bool,
    /// Paths to additional CA certificates.
    pub ca_certs: Vec<String>,
    /// Certificate presented when serving TLS.
    pub serve_cert_path: String,
    /// Private key matching `serve_cert_path`.
    pub serve_key_path: String,
}

/// Flag names and environment keys for each TLS setting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlsFieldNames {
    pub system_cert_pool_flag: String,
    pub system_cert_pool_env: String,
    pub ca_certs_flag: String,
    pub ca_certs_env: String,
    pub serve_cert_flag: String,
    pub serve_cert_env: String,
    pub serve_key_flag: String,
    pub serve_key_env: String,
}

impl TlsFieldNames {
    /// Conventional names: `<prefix>-tls-cacerts` flags paired with
    /// `<PREFIX>_TLS_CACERTS` variables. An empty prefix drops the separator.
    ///
    /// ```
    /// use cmdutil::tls::TlsFieldNames;
    ///
    /// let names = TlsFieldNames::with_prefix("");
    /// assert_eq!(names.ca_certs_flag, "tls-cacerts");
    /// assert_eq!(names.ca_certs_env, "TLS_CACERTS");
    /// ```
    pub fn with_prefix(prefix: &str) -> Self {
        let (flag_prefix, env_prefix) = if prefix.is_empty() {
            (String::new(), String::new())
        } else {
            (
                format!("{}-", prefix.to_lowercase().replace('_', "-")),
                format!("{}_", prefix.to_uppercase().replace('-', "_")),
            )
        };
        let flag = |name: &str| format!("{flag_prefix}tls-{name}");
        let env = |name: &str| format!("{env_prefix}TLS_{}", name.to_uppercase());

        Self {
            system_cert_pool_flag: flag("systemcertpool"),
            system_cert_pool_env: env("systemcertpool"),
            ca_certs_flag: flag("cacerts"),
            ca_certs_env: env("cacerts"),
            serve_cert_flag: flag("serve-cert"),
            serve_cert_env: env("serve_cert"),
            serve_key_flag: flag("serve-key"),
            serve_key_env: env("serve_key"),
        }
    }
}

/// Resolve all TLS settings. Every setting is optional; the only failure is a
/// system cert pool value that is not a boolean literal.
pub fn get_tls_parameters<F, E>(
    resolver: &Resolver<'_, F, E>,
    names: &TlsFieldNames,
) -> Result<TlsParameters>
where
    F: FlagSource + ?Sized,
    E: EnvSource,
{
    let system_cert_pool =
        resolver.get_optional_string(&names.system_cert_pool_flag, &names.system_cert_pool_env);

    let use_system_cert_pool = if system_cert_pool.is_empty() {
        false
    } else {
        parse_bool(&system_cert_pool).map_err(|e| {
            CmdError::invalid_format(&names.system_cert_pool_flag, &system_cert_pool, e)
        })?
    };

    Ok(TlsParameters {
        use_system_cert_pool,
        ca_certs: resolver.get_optional_string_array(&names.ca_certs_flag, &names.ca_certs_env),
        serve_cert_path: resolver.get_optional_string(&names.serve_cert_flag, &names.serve_cert_env),
        serve_key_path: resolver.get_optional_string(&names.serve_key_flag, &names.serve_key_env),
    })
}

impl<'a, F: FlagSource + ?Sized, E: EnvSource> Resolver<'a, F, E> {
    /// See [`get_tls_parameters`].
    pub fn get_tls_parameters(&self, names: &TlsFieldNames) -> Result<TlsParameters> {
        get_tls_parameters(self, names)
    }
}
