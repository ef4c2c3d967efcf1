//! Configuration module
//!
//! The glossary rules, delimiter pairs and trigger settings live in a YAML
//! data table embedded at compile time. Edit `glossary_fr.yaml` to change
//! terminology; no code changes are needed.

pub mod glossary;
pub mod triggers;

pub use glossary::{shipped_config, GlossaryConfig, RuleEntry};
pub use triggers::{Modifier, TriggerConfig};
