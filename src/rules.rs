//! Admin rule compilation and hostmask matching.
//!
//! Raw configuration entries compile into [`AdminRule`]s exactly once
//! at startup. Every rule carries all three patterns (absent config
//! fields become match-all) so the matching predicate never branches
//! on presence, and all matching is case-insensitive per IRC
//! convention.

use crate::config::RawAdminEntry;
use crate::error::{AdminError, AdminResult};
use crate::hostmask::Hostmask;
use regex::{Regex, RegexBuilder};
use tracing::{debug, info};

/// Compile one pattern field, or the match-all pattern if the raw
/// value is absent or empty.
fn compile_pattern(field: &'static str, raw: Option<&str>) -> AdminResult<Regex> {
    let pattern = match raw {
        Some(p) if !p.is_empty() => p,
        _ => ".*",
    };

    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| AdminError::Pattern {
            field,
            pattern: pattern.to_string(),
            source,
        })
}

/// One compiled admin rule.
///
/// A hostmask satisfies the rule when all three fields match their
/// patterns. A rule with an `identified_as` account additionally
/// requires one identity-service round trip before it grants admin.
#[derive(Debug, Clone)]
pub struct AdminRule {
    /// Compiled nickname pattern.
    pub nickname: Regex,
    /// Compiled username pattern.
    pub username: Regex,
    /// Compiled hostname pattern.
    pub hostname: Regex,
    /// Account that must be verified, or `None` for an unconditional rule.
    pub identified_as: Option<String>,
}

impl AdminRule {
    /// Compile a raw configuration entry into a rule.
    pub fn compile(entry: &RawAdminEntry) -> AdminResult<Self> {
        info!(?entry, "Adding admin");

        Ok(Self {
            nickname: compile_pattern("nickname", entry.nickname.as_deref())?,
            username: compile_pattern("username", entry.username.as_deref())?,
            hostname: compile_pattern("hostname", entry.hostname.as_deref())?,
            identified_as: entry.identifiedas.clone(),
        })
    }

    /// Whether the hostmask satisfies all three patterns of this rule.
    ///
    /// Pure predicate; emits per-field `debug` diagnostics for audit
    /// tooling. Partial matches do not count.
    pub fn matches(&self, hostmask: &Hostmask) -> bool {
        let fields = [
            ("nickname", &self.nickname, hostmask.nickname.as_str()),
            ("username", &self.username, hostmask.username.as_str()),
            ("hostname", &self.hostname, hostmask.hostname.as_str()),
        ];

        fields.iter().all(|(field, pattern, value)| {
            let result = pattern.is_match(value);
            debug!(field, value, pattern = pattern.as_str(), result, "Hostmask field check");
            result
        })
    }
}

/// An ordered, immutable set of compiled admin rules.
///
/// An empty set is legal and simply denies everyone.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<AdminRule>,
}

impl RuleSet {
    /// Compile a rule set from raw configuration entries.
    ///
    /// Fails with [`AdminError::Pattern`] on the first invalid pattern
    /// string; this happens once at startup and is fatal.
    pub fn compile(entries: &[RawAdminEntry]) -> AdminResult<Self> {
        let rules = entries.iter().map(AdminRule::compile).collect::<AdminResult<_>>()?;
        Ok(Self { rules })
    }

    /// Iterate the rules in configuration order.
    pub fn iter(&self) -> std::slice::Iter<'_, AdminRule> {
        self.rules.iter()
    }

    /// Number of rules in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set contains no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(
        nickname: Option<&str>,
        username: Option<&str>,
        hostname: Option<&str>,
        identifiedas: Option<&str>,
    ) -> RawAdminEntry {
        RawAdminEntry {
            nickname: nickname.map(String::from),
            username: username.map(String::from),
            hostname: hostname.map(String::from),
            identifiedas: identifiedas.map(String::from),
        }
    }

    #[test]
    fn test_absent_fields_match_anything() {
        let rule = AdminRule::compile(&entry(None, None, None, None)).unwrap();
        let mask = Hostmask::new("anyone", "anything", "anywhere.example");
        assert!(rule.matches(&mask));
    }

    #[test]
    fn test_empty_string_field_matches_anything() {
        let rule = AdminRule::compile(&entry(Some(""), None, None, None)).unwrap();
        assert!(rule.matches(&Hostmask::new("zed", "z", "h")));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let rule = AdminRule::compile(&entry(Some("Alice"), None, None, None)).unwrap();
        assert!(rule.matches(&Hostmask::new("aLiCe", "a", "h")));
    }

    #[test]
    fn test_all_three_fields_must_match() {
        let rule = AdminRule::compile(&entry(
            Some("alice.*"),
            Some("~alice"),
            Some("trusted\\.example\\.org"),
            None,
        ))
        .unwrap();

        assert!(rule.matches(&Hostmask::new("alice99", "~alice", "trusted.example.org")));
        // Two of three is not enough
        assert!(!rule.matches(&Hostmask::new("alice99", "~alice", "evil.example.org")));
        assert!(!rule.matches(&Hostmask::new("bob", "~alice", "trusted.example.org")));
    }

    #[test]
    fn test_pattern_is_regex_not_literal() {
        let rule = AdminRule::compile(&entry(Some("alice.*"), None, None, None)).unwrap();
        assert!(rule.matches(&Hostmask::new("alice99", "u", "h")));
        assert!(rule.matches(&Hostmask::new("aliceX", "u", "h")));
        assert!(!rule.matches(&Hostmask::new("bob", "u", "h")));
    }

    #[test]
    fn test_invalid_pattern_is_fatal() {
        let err = RuleSet::compile(&[entry(Some("("), None, None, None)]).unwrap_err();
        match err {
            AdminError::Pattern { field, pattern, .. } => {
                assert_eq!(field, "nickname");
                assert_eq!(pattern, "(");
            }
            other => panic!("expected pattern error, got {other:?}"),
        }
    }

    #[test]
    fn test_compile_preserves_order() {
        let set = RuleSet::compile(&[
            entry(Some("first"), None, None, None),
            entry(Some("second"), None, None, Some("acct")),
        ])
        .unwrap();

        assert_eq!(set.len(), 2);
        let patterns: Vec<_> = set.iter().map(|r| r.nickname.as_str()).collect();
        assert_eq!(patterns, vec!["first", "second"]);
        let accounts: Vec<_> = set.iter().map(|r| r.identified_as.as_deref()).collect();
        assert_eq!(accounts, vec![None, Some("acct")]);
    }
}
