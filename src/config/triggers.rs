//! Keyboard and mouse trigger settings

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// A modifier key that must be held for a trigger to fire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Ctrl,
    Alt,
    Shift,
    Meta,
}

impl Modifier {
    /// Check this modifier against an event's modifier state
    pub fn is_held(&self, ctrl: bool, alt: bool, shift: bool, meta: bool) -> bool {
        match self {
            Modifier::Ctrl => ctrl,
            Modifier::Alt => alt,
            Modifier::Shift => shift,
            Modifier::Meta => meta,
        }
    }
}

/// When the normalize and select actions run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerConfig {
    /// `KeyboardEvent.key` value of the normalize shortcut
    pub normalize_key: String,
    pub normalize_modifier: Modifier,
    /// Modifier held while clicking to select a delimited span
    pub select_modifier: Modifier,
    /// Element ids that listen for delimiter clicks
    pub regions: Vec<String>,
}

impl TriggerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.normalize_key.chars().count() != 1 {
            return Err(ConfigError::InvalidTriggerKey(self.normalize_key.clone()));
        }
        Ok(())
    }

    /// Whether a keydown matches the normalize shortcut
    pub fn is_normalize_shortcut(
        &self,
        key: &str,
        ctrl: bool,
        alt: bool,
        shift: bool,
        meta: bool,
    ) -> bool {
        self.normalize_modifier.is_held(ctrl, alt, shift, meta) && key == self.normalize_key
    }
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            normalize_key: "e".to_string(),
            normalize_modifier: Modifier::Ctrl,
            select_modifier: Modifier::Ctrl,
            regions: vec!["source-string".to_string(), "translated-string".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shortcut_is_ctrl_e() {
        let triggers = TriggerConfig::default();
        assert!(triggers.is_normalize_shortcut("e", true, false, false, false));
        assert!(!triggers.is_normalize_shortcut("e", false, false, false, false));
        assert!(!triggers.is_normalize_shortcut("E", true, false, true, false));
        assert!(!triggers.is_normalize_shortcut("r", true, false, false, false));
    }

    #[test]
    fn test_multi_character_key_rejected() {
        let triggers = TriggerConfig {
            normalize_key: "ctrl+e".to_string(),
            ..TriggerConfig::default()
        };
        assert!(matches!(triggers.validate(), Err(ConfigError::InvalidTriggerKey(_))));
    }
}
