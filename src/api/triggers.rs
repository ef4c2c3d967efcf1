//! Event listener wiring
//!
//! One document-level keydown listener for the normalize shortcut and one
//! click listener per configured region. Listeners live for the page's
//! lifetime, so their closures are leaked with `forget`. Installation
//! happens at most once per page.

use once_cell::sync::OnceCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};

use crate::api::click::select_delimited_text;
use crate::api::focus::clean_focused_element;
use crate::api::helpers::document;
use crate::config::shipped_config;
use crate::{wasm_error, wasm_info, wasm_log, wasm_warn};

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Mark the triggers installed, `false` if that already happened
fn claim_installation() -> bool {
    INSTALLED.set(()).is_ok()
}

/// Install the keyboard and click listeners
///
/// Later calls are no-ops, so each shortcut fires its action once.
#[wasm_bindgen(js_name = installTriggers)]
pub fn install_triggers() -> Result<(), JsValue> {
    let document = document()?;
    if !claim_installation() {
        wasm_log!("Triggers already installed");
        return Ok(());
    }
    let triggers = &shipped_config().triggers;

    let keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if !triggers.is_normalize_shortcut(
            &event.key(),
            event.ctrl_key(),
            event.alt_key(),
            event.shift_key(),
            event.meta_key(),
        ) {
            return;
        }
        event.prevent_default();
        if let Err(e) = clean_focused_element() {
            wasm_error!("cleanFocusedElement failed: {:?}", e);
        }
    });
    document.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
    keydown.forget();

    let mut installed = 0;
    for region in &triggers.regions {
        let Some(element) = document.get_element_by_id(region) else {
            wasm_warn!("Region #{} not found, delimiter selection disabled there", region);
            continue;
        };

        let click = Closure::<dyn FnMut(MouseEvent)>::new(|event: MouseEvent| {
            if let Err(e) = select_delimited_text(&event) {
                wasm_error!("selectDelimitedText failed: {:?}", e);
            }
        });
        element.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
        click.forget();
        installed += 1;
    }

    wasm_info!(
        "Triggers installed: '{}' shortcut, {} of {} click regions",
        triggers.normalize_key,
        installed,
        triggers.regions.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_installation_claimed_once() {
        assert!(claim_installation());
        assert!(!claim_installation());
    }
}
