//! Glossary table loading
//!
//! The shipped table is parsed once, on first use, and kept for the
//! lifetime of the module.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::config::triggers::TriggerConfig;
use crate::errors::ConfigError;
use crate::models::{DelimiterPair, ReplacementRule, RuleKind};

/// The embedded French glossary
pub const SHIPPED_GLOSSARY_YAML: &str = include_str!("glossary_fr.yaml");

/// One rule as written in the data file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEntry {
    #[serde(default)]
    pub kind: RuleKind,
    pub find: String,
    pub replace: String,
}

impl RuleEntry {
    pub fn compile(&self) -> Result<ReplacementRule, ConfigError> {
        ReplacementRule::new(self.kind, self.find.as_str(), self.replace.as_str())
    }
}

/// Data file layout
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    rules: Vec<RuleEntry>,
    #[serde(default)]
    delimiters: Vec<DelimiterPair>,
    #[serde(default)]
    triggers: TriggerConfig,
}

/// Validated configuration: compiled rules, delimiter pairs and triggers
#[derive(Debug, Clone, Default)]
pub struct GlossaryConfig {
    pub rules: Vec<ReplacementRule>,
    pub delimiters: Vec<DelimiterPair>,
    pub triggers: TriggerConfig,
}

impl GlossaryConfig {
    /// Parse and validate a YAML table
    ///
    /// Every pattern rule is compiled here, so a bad regex is reported at
    /// load time and never while normalizing.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_yaml::from_str(yaml)?;

        let rules = raw
            .rules
            .iter()
            .map(RuleEntry::compile)
            .collect::<Result<Vec<_>, _>>()?;

        for pair in &raw.delimiters {
            pair.validate()?;
        }
        raw.triggers.validate()?;

        log::debug!(
            "Loaded glossary: {} rules, {} delimiter pairs",
            rules.len(),
            raw.delimiters.len()
        );

        Ok(Self {
            rules,
            delimiters: raw.delimiters,
            triggers: raw.triggers,
        })
    }
}

static SHIPPED: Lazy<GlossaryConfig> = Lazy::new(|| {
    GlossaryConfig::from_yaml(SHIPPED_GLOSSARY_YAML).unwrap_or_else(|e| {
        log::error!("Failed to load shipped glossary, continuing without rules: {}", e);
        GlossaryConfig::default()
    })
});

/// The embedded configuration
pub fn shipped_config() -> &'static GlossaryConfig {
    &SHIPPED
}
