//! Hostmask identity triple.

use std::fmt;

/// The network-level identity of a message sender at the moment of a
/// command: nickname, username (ident), and hostname.
///
/// Constructed by the transport layer from the message prefix and
/// consumed read-only by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hostmask {
    /// Sender's current nickname.
    pub nickname: String,
    /// Sender's username (ident).
    pub username: String,
    /// Sender's hostname (may be cloaked).
    pub hostname: String,
}

impl Hostmask {
    /// Create a hostmask from its three components.
    pub fn new(
        nickname: impl Into<String>,
        username: impl Into<String>,
        hostname: impl Into<String>,
    ) -> Self {
        Self {
            nickname: nickname.into(),
            username: username.into(),
            hostname: hostname.into(),
        }
    }

    /// Parse a `nick!user@host` prefix string.
    ///
    /// Returns `None` if either separator is missing or in the wrong
    /// order, or if the nickname portion is empty.
    pub fn parse(prefix: &str) -> Option<Self> {
        let (nick, rest) = prefix.split_once('!')?;
        let (user, host) = rest.split_once('@')?;
        if nick.is_empty() {
            return None;
        }
        Some(Self::new(nick, user, host))
    }
}

impl fmt::Display for Hostmask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}!{}@{}", self.nickname, self.username, self.hostname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        let mask = Hostmask::parse("alice!~alice@unaffiliated/alice").unwrap();
        assert_eq!(mask.nickname, "alice");
        assert_eq!(mask.username, "~alice");
        assert_eq!(mask.hostname, "unaffiliated/alice");
        assert_eq!(mask.to_string(), "alice!~alice@unaffiliated/alice");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(Hostmask::parse("alice").is_none());
        assert!(Hostmask::parse("alice@host").is_none());
        assert!(Hostmask::parse("!user@host").is_none());
        // '@' before '!' is not a valid prefix
        assert!(Hostmask::parse("alice@host!user").is_none());
    }
}
