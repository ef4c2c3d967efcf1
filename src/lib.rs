//! Translation Utils WASM Module
//!
//! Text cleaning and delimiter-aware selection for the Transifex web
//! editor. The `text` and `selection` modules are pure and work on plain
//! strings and offsets; `api` is the thin browser adapter around them.

pub mod errors;
pub mod models;
pub mod config;
pub mod text;
pub mod selection;
pub mod api;

// Re-export commonly used types
pub use errors::ConfigError;
pub use models::{DelimiterPair, EditableKind, ReplacementRule, RuleKind, Span};
pub use config::{shipped_config, GlossaryConfig, TriggerConfig};
pub use text::{normalize, Normalizer};
pub use selection::{locate, SpanLocator};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();
    log::info!("Translation utils WASM module initialized");

    if let Err(e) = api::install_triggers() {
        crate::wasm_error!("Failed to install triggers: {:?}", e);
    }
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        crate::wasm_warn!("Logger already initialized: {}", e);
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
