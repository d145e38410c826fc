//! Admin configuration loading.
//!
//! The configuration surface is deliberately small: an `admins` array
//! of raw entries, an optional denial-response override, and an
//! optional list of command names that are always admin-gated. The
//! `admins` value is kept as a raw TOML value until
//! [`AdminConfig::admin_entries`] runs, so that a non-array value can
//! be rejected with a fatal [`AdminError::Config`] instead of a
//! generic parse error.

use crate::error::{AdminError, AdminResult};
use serde::Deserialize;
use std::path::Path;

/// Default denial text sent when a gated command is refused.
pub const DEFAULT_DENIED_RESPONSE: &str = "Permission denied.";

/// One raw admin entry as written in configuration.
///
/// Any of the three pattern fields may be absent, meaning "match
/// anything". `identifiedas`, when present, names an account that must
/// be confirmed through the identity service before the entry grants
/// admin. Unknown keys in the entry table are dropped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAdminEntry {
    /// Nickname pattern (regex syntax), or match-all if absent.
    #[serde(default)]
    pub nickname: Option<String>,
    /// Username pattern (regex syntax), or match-all if absent.
    #[serde(default)]
    pub username: Option<String>,
    /// Hostname pattern (regex syntax), or match-all if absent.
    #[serde(default)]
    pub hostname: Option<String>,
    /// Account name that must be verified for this entry to grant admin.
    #[serde(default)]
    pub identifiedas: Option<String>,
}

/// Admin module configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminConfig {
    /// Raw `admins` value; validated by [`AdminConfig::admin_entries`].
    #[serde(default)]
    pub admins: Option<toml::Value>,
    /// Override for the denial response text.
    #[serde(default)]
    pub denied_response: Option<String>,
    /// Command names that are admin-gated regardless of handler wrapping.
    #[serde(default)]
    pub admin_commands: Vec<String>,
}

impl AdminConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> AdminResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AdminConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Extract the admin entries from the raw `admins` value.
    ///
    /// Fails with [`AdminError::Config`] if `admins` is missing or not
    /// an array. Each element keeps only the recognized entry keys;
    /// anything else is silently dropped.
    pub fn admin_entries(&self) -> AdminResult<Vec<RawAdminEntry>> {
        let array = self
            .admins
            .as_ref()
            .and_then(toml::Value::as_array)
            .ok_or(AdminError::Config)?;

        array
            .iter()
            .map(|value| value.clone().try_into().map_err(AdminError::Parse))
            .collect()
    }

    /// The denial response text, configured or default.
    pub fn denied_response(&self) -> &str {
        self.denied_response
            .as_deref()
            .unwrap_or(DEFAULT_DENIED_RESPONSE)
    }
}
