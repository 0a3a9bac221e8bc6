//! Keyboard focus for dialogs.

#[cfg(test)]
#[path = "focus_test.rs"]
mod focus_test;

use leptos::html::Div;
use leptos::prelude::*;

/// Keys that dismiss an open dialog.
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Move keyboard focus to `node` once it is mounted, so the dialog's
/// `on:keydown` handler sees Escape without a click first. No-op during
/// server rendering.
pub fn focus_on_mount(node: NodeRef<Div>) {
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            if let Some(element) = node.get() {
                if let Err(err) = element.focus() {
                    log::debug!("dialog focus failed: {err:?}");
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = node;
    }
}
