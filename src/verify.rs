//! Identity verification collaborator interface.

use crate::error::AdminResult;
use async_trait::async_trait;

/// External identity verification service.
///
/// Implementations confirm that a nickname is currently authenticated
/// as a named account (e.g., by querying services). The protocol behind
/// the check is entirely the implementor's concern; the resolver only
/// needs this one call.
///
/// Errors propagate out of the resolution that triggered the call;
/// they are never treated as "not identified". Retry policy, if any,
/// also belongs to the implementor.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Whether `nickname` is currently identified as `account`.
    async fn verify(&self, nickname: &str, account: &str) -> AdminResult<bool>;
}
