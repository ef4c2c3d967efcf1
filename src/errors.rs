//! Error types for configuration loading
//!
//! Normalizing and locating never fail; only building the rule table
//! and delimiter list from data can.

use thiserror::Error;

/// Errors raised while loading the glossary configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The YAML document could not be parsed
    #[error("Invalid glossary YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A pattern rule does not compile as a regular expression
    #[error("Invalid glossary pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A rule with nothing to search for
    #[error("Glossary rule has an empty pattern")]
    EmptyRulePattern,

    /// A delimiter pair with an empty start or end marker
    #[error("Delimiter pair has an empty marker: start='{start}', end='{end}'")]
    EmptyDelimiter { start: String, end: String },

    /// The trigger shortcut key is not a single key name
    #[error("Invalid trigger key: '{0}'")]
    InvalidTriggerKey(String),
}
