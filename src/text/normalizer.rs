//! Translated text normalization
//!
//! Entity decoding followed by glossary substitution. Rules run one after
//! another, each on the previous rule's output, so a later rule can match
//! text an earlier rule produced.

use crate::config::shipped_config;
use crate::models::ReplacementRule;
use crate::text::entities::decode_entities;

/// Applies entity decoding and an ordered rule list
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    rules: &'a [ReplacementRule],
}

impl<'a> Normalizer<'a> {
    pub fn new(rules: &'a [ReplacementRule]) -> Self {
        Self { rules }
    }

    /// Normalizer over the shipped glossary
    pub fn shipped() -> Normalizer<'static> {
        Normalizer::new(&shipped_config().rules)
    }

    /// Decode entities, then apply every rule in order
    pub fn normalize(&self, text: &str) -> String {
        let decoded = decode_entities(text);
        self.apply_rules(decoded)
    }

    /// Apply the rules only, without entity decoding
    pub fn apply_rules(&self, text: String) -> String {
        self.rules.iter().fold(text, |current, rule| {
            let next = rule.apply(&current);
            if next != current {
                log::trace!("Rule '{}' -> '{}' applied", rule.pattern, rule.replacement);
            }
            next
        })
    }
}

/// Normalize with the shipped glossary
pub fn normalize(text: &str) -> String {
    Normalizer::shipped().normalize(text)
}
