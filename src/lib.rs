//! # slirc-admin
//!
//! Hostmask-based admin authorization and command gating for IRC
//! command dispatchers.
//!
//! Raw `admins` configuration compiles once into an immutable
//! [`RuleSet`] of case-insensitive hostmask patterns. An
//! [`AdminResolver`] decides whether a sender's [`Hostmask`] is
//! privileged, confirming account identification through an
//! [`IdentityVerifier`] only when no unconditional rule already
//! matches. A [`CommandGate`] turns that decision into handler
//! wrapping ([`CommandGate::require_admin`]) and dispatcher middleware
//! for always-gated command names.
//!
//! ## Quick Start
//!
//! ```
//! use slirc_admin::{
//!     AdminConfig, AdminResolver, AdminResult, Hostmask, IdentityVerifier, RuleSet,
//! };
//! use async_trait::async_trait;
//! use std::sync::Arc;
//!
//! /// Identity service stub; real implementations query services.
//! struct Services;
//!
//! #[async_trait]
//! impl IdentityVerifier for Services {
//!     async fn verify(&self, _nickname: &str, _account: &str) -> AdminResult<bool> {
//!         Ok(false)
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> AdminResult<()> {
//! let config: AdminConfig = toml::from_str(
//!     r#"
//!     admin_commands = ["quit"]
//!
//!     [[admins]]
//!     hostname = "trusted\\.example\\.org"
//!     "#,
//! )?;
//!
//! let rules = RuleSet::compile(&config.admin_entries()?)?;
//! let resolver = AdminResolver::new(rules, Arc::new(Services));
//!
//! let sender = Hostmask::new("alice", "~alice", "trusted.example.org");
//! assert!(resolver.is_admin(&sender).await?);
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod gate;
pub mod hostmask;
pub mod resolver;
pub mod rules;
pub mod verify;

pub use config::{AdminConfig, RawAdminEntry, DEFAULT_DENIED_RESPONSE};
pub use error::{AdminError, AdminResult};
pub use gate::{Command, CommandGate, CommandHandler, Gated, MiddlewareOutcome};
pub use hostmask::Hostmask;
pub use resolver::AdminResolver;
pub use rules::{AdminRule, RuleSet};
pub use verify::IdentityVerifier;
