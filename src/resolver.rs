//! Admin resolution: hostmask matching plus identification fallback.

use crate::error::AdminResult;
use crate::hostmask::Hostmask;
use crate::rules::{AdminRule, RuleSet};
use crate::verify::IdentityVerifier;
use std::sync::Arc;
use tracing::debug;

/// Resolves whether a hostmask belongs to an admin.
///
/// Holds the compiled default rule set and the identity service handle.
/// Both are immutable after construction, so a resolver can be shared
/// freely across concurrent command processing; nothing is cached
/// between resolutions.
#[derive(Clone)]
pub struct AdminResolver {
    rules: Arc<RuleSet>,
    verifier: Arc<dyn IdentityVerifier>,
}

impl AdminResolver {
    /// Create a resolver over a compiled rule set and identity service.
    pub fn new(rules: RuleSet, verifier: Arc<dyn IdentityVerifier>) -> Self {
        Self {
            rules: Arc::new(rules),
            verifier,
        }
    }

    /// The resolver's default rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Resolve `hostmask` against the default rule set.
    pub async fn is_admin(&self, hostmask: &Hostmask) -> AdminResult<bool> {
        self.is_admin_with(hostmask, &self.rules).await
    }

    /// Resolve `hostmask` against a caller-supplied rule set.
    ///
    /// The decision procedure:
    ///
    /// 1. Collect every rule whose three patterns all match (no await).
    /// 2. If any candidate is unconditional (no `identified_as`), the
    ///    answer is `true` with no identity-service call.
    /// 3. Otherwise try the remaining candidates one at a time, last
    ///    matched first, stopping at the first account the service
    ///    confirms. The reverse order and strict sequentiality are
    ///    observable contract: the service may have side effects, and
    ///    an early success must spare the remaining calls.
    /// 4. No candidates, or none confirmed: `false`.
    ///
    /// A service failure propagates; it is never folded into a denial.
    pub async fn is_admin_with(&self, hostmask: &Hostmask, rules: &RuleSet) -> AdminResult<bool> {
        let candidates: Vec<&AdminRule> =
            rules.iter().filter(|rule| rule.matches(hostmask)).collect();

        if candidates.iter().any(|rule| rule.identified_as.is_none()) {
            debug!(hostmask = %hostmask, "Unconditional admin rule matched");
            return Ok(true);
        }

        for rule in candidates.iter().rev() {
            // Step 2 filtered out unconditional rules, so the account
            // is always present here.
            let Some(account) = rule.identified_as.as_deref() else {
                continue;
            };

            debug!(nickname = %hostmask.nickname, account, "Checking identification");
            if self.verifier.verify(&hostmask.nickname, account).await? {
                debug!(nickname = %hostmask.nickname, account, "Identification confirmed");
                return Ok(true);
            }
        }

        debug!(hostmask = %hostmask, "No admin rule satisfied");
        Ok(false)
    }
}

impl std::fmt::Debug for AdminResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminResolver")
            .field("rules", &self.rules.len())
            .finish_non_exhaustive()
    }
}
