//! Conversation name pattern.
//!
//! A `--filter` value is a comma-separated list of terms; `foo,bar` selects every
//! conversation whose name contains `foo` OR `bar`, ignoring case. Whitespace around
//! terms and empty terms are dropped, so `"foo,,"` is the same as `"foo"` and `","`
//! selects everything.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelPattern {
    terms: Vec<String>,
}

impl ChannelPattern {
    /// Pattern that selects every conversation
    pub fn any() -> Self {
        Self::default()
    }

    pub fn parse(pattern: &str) -> Self {
        let terms = pattern
            .split(',')
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
            .collect();
        Self { terms }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Case-insensitive substring match against any term
    pub fn matches(&self, name: &str) -> bool {
        if self.terms.is_empty() {
            return true;
        }
        let lower_name = name.to_lowercase();
        self.terms.iter().any(|term| lower_name.contains(term.as_str()))
    }
}

impl fmt::Display for ChannelPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.terms.join("|"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pattern_matches_everything() {
        let pattern = ChannelPattern::parse("");
        assert!(pattern.is_empty());
        assert!(pattern.matches("general"));
        assert!(pattern.matches(""));
    }

    #[test]
    fn test_alternation() {
        let pattern = ChannelPattern::parse("foo,bar");
        assert!(pattern.matches("team-foo"));
        assert!(pattern.matches("bar"));
        assert!(!pattern.matches("baz"));
    }

    #[test]
    fn test_case_insensitive() {
        let pattern = ChannelPattern::parse("Random");
        assert!(pattern.matches("random"));
        assert!(pattern.matches("RANDOM-chatter"));
    }

    #[test]
    fn test_blank_terms_ignored() {
        assert_eq!(ChannelPattern::parse(" foo , ,"), ChannelPattern::parse("foo"));
        assert!(ChannelPattern::parse(",").is_empty());
    }

    #[test]
    fn test_display_as_alternation() {
        assert_eq!(ChannelPattern::parse("foo,Bar").to_string(), "(foo|bar)");
    }
}
