//! Glossary replacement rules
//!
//! A rule is either matched as plain text or as a regular expression.
//! The kind is always explicit so that a literal containing `.` or `(`
//! is never silently read as regex syntax.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// How a rule's pattern is matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Plain substring, replacement inserted verbatim
    #[default]
    Literal,
    /// Regular expression, replacement may use `$1` / `${name}`
    Pattern,
}

/// A single find-and-replace correction
#[derive(Debug, Clone)]
pub struct ReplacementRule {
    pub kind: RuleKind,
    pub pattern: String,
    pub replacement: String,
    /// Compiled form, present iff `kind == RuleKind::Pattern`
    regex: Option<Regex>,
}

impl ReplacementRule {
    /// Create a plain-text rule
    pub fn literal(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::Literal,
            pattern: pattern.into(),
            replacement: replacement.into(),
            regex: None,
        }
    }

    /// Create a regex rule, compiling the pattern up front
    pub fn pattern(
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let pattern = pattern.into();
        let regex = Regex::new(&pattern).map_err(|source| ConfigError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;

        Ok(Self {
            kind: RuleKind::Pattern,
            pattern,
            replacement: replacement.into(),
            regex: Some(regex),
        })
    }

    /// Build a rule of the given kind
    pub fn new(
        kind: RuleKind,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(ConfigError::EmptyRulePattern);
        }

        match kind {
            RuleKind::Literal => Ok(Self::literal(pattern, replacement)),
            RuleKind::Pattern => Self::pattern(pattern, replacement),
        }
    }

    /// Replace every non-overlapping occurrence of this rule's pattern
    pub fn apply(&self, text: &str) -> String {
        match &self.regex {
            Some(regex) => regex.replace_all(text, self.replacement.as_str()).into_owned(),
            None => text.replace(&self.pattern, &self.replacement),
        }
    }
}

impl PartialEq for ReplacementRule {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.pattern == other.pattern
            && self.replacement == other.replacement
    }
}
