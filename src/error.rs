//! Unified error handling for slirc-admin.
//!
//! Startup errors (`Config`, `Pattern`, `Io`, `Parse`) are fatal: they
//! occur once while configuration is compiled and must abort
//! initialization. `Verification` is a runtime failure of the identity
//! service collaborator and is surfaced to the caller of a resolution
//! rather than being silently mapped to a denial.

use thiserror::Error;

/// Errors that can occur while compiling admin configuration or
/// resolving an authorization decision.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The `admins` configuration value is not an array.
    #[error("'admins' property in configuration must be an array")]
    Config,

    /// A configured pattern string failed to compile.
    #[error("invalid admin pattern {pattern:?} for field '{field}': {source}")]
    Pattern {
        /// Which hostmask field the pattern was configured for.
        field: &'static str,
        /// The raw pattern string from configuration.
        pattern: String,
        /// The underlying regex compilation error.
        source: regex::Error,
    },

    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The identity verification service failed.
    ///
    /// This is distinct from a verified "no": a denial resolves to
    /// `false`, while a collaborator failure propagates as this error.
    #[error("identity verification failed: {0}")]
    Verification(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl AdminError {
    /// Wrap an identity-service failure.
    pub fn verification<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Verification(Box::new(err))
    }

    /// Get a static error code string for metrics/diagnostic labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config => "config_not_array",
            Self::Pattern { .. } => "pattern_invalid",
            Self::Io(_) => "config_io",
            Self::Parse(_) => "config_parse",
            Self::Verification(_) => "verification_failed",
        }
    }

    /// Whether this error is fatal to module initialization.
    ///
    /// Fatal errors must be fixed in configuration and the process
    /// restarted; they are never produced after startup.
    #[inline]
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Verification(_))
    }
}

/// Result type for admin resolution and configuration operations.
pub type AdminResult<T> = Result<T, AdminError>;
