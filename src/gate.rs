//! Command gating built on [`AdminResolver`].
//!
//! Two enforcement points, mirroring how a dispatcher consumes them:
//!
//! - [`CommandGate::require_admin`] wraps an individual handler so that
//!   non-admins get the denial response instead of the handler running.
//! - [`CommandGate::middleware`] is consulted once per incoming command
//!   before handler lookup, and enforces gating for the configured list
//!   of always-gated command names.
//!
//! Both are plain two-way decisions with no caching and no retry; a
//! resolver failure propagates to the dispatcher rather than being
//! converted into either outcome.

use crate::config::AdminConfig;
use crate::error::AdminResult;
use crate::hostmask::Hostmask;
use crate::resolver::AdminResolver;
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::info;

/// An incoming command as delivered by the dispatcher.
#[derive(Debug, Clone)]
pub struct Command {
    /// Command name, without dispatch prefix (e.g., "quit").
    pub name: String,
    /// Remaining arguments.
    pub args: Vec<String>,
    /// Hostmask of the sender.
    pub hostmask: Hostmask,
}

/// A command handler invoked by the dispatcher.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Handle the command, producing the response text.
    async fn handle(&self, command: &Command) -> AdminResult<String>;
}

/// Outcome of the gating middleware.
#[derive(Debug, Clone)]
pub enum MiddlewareOutcome {
    /// Command passes through unchanged; the dispatcher continues routing.
    Forward(Command),
    /// Command is refused with the denial response.
    Deny(String),
}

/// Admin gate over command execution.
#[derive(Debug, Clone)]
pub struct CommandGate {
    resolver: AdminResolver,
    denied_response: String,
    admin_commands: HashSet<String>,
}

impl CommandGate {
    /// Build a gate from configuration and a resolver.
    pub fn new(resolver: AdminResolver, config: &AdminConfig) -> Self {
        Self {
            resolver,
            denied_response: config.denied_response().to_string(),
            admin_commands: config.admin_commands.iter().cloned().collect(),
        }
    }

    /// The configured denial response text.
    pub fn denied_response(&self) -> &str {
        &self.denied_response
    }

    /// Wrap a handler so it only runs for admins.
    ///
    /// Non-admin callers receive the denial response and the inner
    /// handler is never invoked. A resolution failure propagates.
    pub fn require_admin<H: CommandHandler>(&self, handler: H) -> Gated<H> {
        Gated {
            inner: handler,
            resolver: self.resolver.clone(),
            denied_response: self.denied_response.clone(),
        }
    }

    /// Gate a command before handler lookup.
    ///
    /// Commands whose name is not in the configured `admin_commands`
    /// list pass through untouched, with no resolution performed.
    pub async fn middleware(&self, command: Command) -> AdminResult<MiddlewareOutcome> {
        if !self.admin_commands.contains(&command.name) {
            return Ok(MiddlewareOutcome::Forward(command));
        }

        if self.resolver.is_admin(&command.hostmask).await? {
            Ok(MiddlewareOutcome::Forward(command))
        } else {
            info!(
                nickname = %command.hostmask.nickname,
                command = %command.name,
                "Denied admin-only command"
            );
            Ok(MiddlewareOutcome::Deny(self.denied_response.clone()))
        }
    }
}

/// A handler wrapped by [`CommandGate::require_admin`].
pub struct Gated<H> {
    inner: H,
    resolver: AdminResolver,
    denied_response: String,
}

#[async_trait]
impl<H: CommandHandler> CommandHandler for Gated<H> {
    async fn handle(&self, command: &Command) -> AdminResult<String> {
        if self.resolver.is_admin(&command.hostmask).await? {
            self.inner.handle(command).await
        } else {
            Ok(self.denied_response.clone())
        }
    }
}
